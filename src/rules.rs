/// Outcome of applying the Life rule to a single cell.
///
/// The variants follow the classic B3/S23 description:
///
/// - Any live cell with fewer than two live neighbors dies, as if by underpopulation.
/// - Any live cell with two or three live neighbors lives on to the next generation.
/// - Any live cell with more than three live neighbors dies, as if by overpopulation.
/// - Any dead cell with exactly three live neighbors becomes a live cell, as if by reproduction.
///
/// See: https://conwaylife.com/wiki/Conway%27s_Game_of_Life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Underpopulation,
    Survival,
    Overpopulation,
    Reproduction,

    /// A dead cell with exactly two neighbors. Nothing above matched, so it stays dead.
    Dormant,
}

impl Transition {
    /// Classify a cell given its current state and live neighbor count.
    ///
    /// The arms are checked in order, so the `n == 3` reproduction arm is only reached by dead
    /// cells: live cells with three neighbors were already claimed by survival.
    pub fn of(alive: bool, neighbors: u8) -> Self {
        match neighbors {
            n if n < 2 => Transition::Underpopulation,
            2 | 3 if alive => Transition::Survival,
            n if n > 3 => Transition::Overpopulation,
            3 => Transition::Reproduction,
            _ => Transition::Dormant,
        }
    }

    /// Whether the cell is alive in the next generation
    pub fn is_alive(self) -> bool {
        match self {
            Transition::Survival | Transition::Reproduction => true,
            Transition::Underpopulation | Transition::Overpopulation | Transition::Dormant => false,
        }
    }
}

/// Next state of a cell under B3/S23.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    Transition::of(alive, neighbors).is_alive()
}

#[cfg(test)]
mod tests {
    use super::Transition;
    use super::next_state;

    #[test]
    fn live_cells() {
        assert_eq!(Transition::of(true, 0), Transition::Underpopulation);
        assert_eq!(Transition::of(true, 1), Transition::Underpopulation);
        assert_eq!(Transition::of(true, 2), Transition::Survival);
        assert_eq!(Transition::of(true, 3), Transition::Survival);

        for n in 4..=8 {
            assert_eq!(Transition::of(true, n), Transition::Overpopulation);
        }
    }

    #[test]
    fn dead_cells() {
        assert_eq!(Transition::of(false, 0), Transition::Underpopulation);
        assert_eq!(Transition::of(false, 1), Transition::Underpopulation);
        assert_eq!(Transition::of(false, 2), Transition::Dormant);
        assert_eq!(Transition::of(false, 3), Transition::Reproduction);

        for n in 4..=8 {
            assert_eq!(Transition::of(false, n), Transition::Overpopulation);
        }
    }

    #[test]
    fn matches_b3s23() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }
}
