use std::fmt;

use rand::Rng;
use tracing::debug;
use tracing::trace;

use crate::rules;

/// Offsets of the Moore neighborhood, the center excluded.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed size Life board with hard edges.
///
/// Cells past the border do not exist: they are never counted as neighbors and the board does
/// not wrap around.
pub struct Grid {
    /// Number of columns
    width: usize,

    /// Number of rows
    height: usize,

    /// The current generation, stored row-major. Cell `(x, y)` lives at `y * width + x`.
    cells: Vec<bool>,

    /// Back buffer. [`Grid::step`] writes the next generation here, then swaps it with `cells`.
    ///
    /// Both buffers are allocated once and reused for every generation.
    next: Vec<bool>,

    /// Number of steps taken since the board was seeded
    generation: u64,
}

impl Grid {
    /// Create a board and scatter `live` cells on it at random.
    ///
    /// Every placement picks a uniformly random `x` and `y`. Picks may repeat, in which case the
    /// same cell is set twice, so the board can start with fewer than `live` live cells.
    ///
    /// # Panics
    ///
    /// If `width` or `height` is zero.
    pub fn new<R>(width: usize, height: usize, live: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut grid = Self::empty(width, height);
        grid.scatter(live, rng);

        debug!(
            width,
            height,
            requested = live,
            placed = grid.live_count(),
            "Seeded grid"
        );

        grid
    }

    /// Create a board where exactly the cells at `live` are alive.
    ///
    /// # Panics
    ///
    /// If `width` or `height` is zero, or if a coordinate is off the board.
    pub fn from_cells<I>(width: usize, height: usize, live: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::empty(width, height);

        for (x, y) in live {
            let i = grid.index(x, y);
            grid.cells[i] = true;
        }

        grid
    }

    fn empty(width: usize, height: usize) -> Self {
        assert!(width > 0, "grid width must be positive");
        assert!(height > 0, "grid height must be positive");

        let n = width
            .checked_mul(height)
            .expect("grid dimensions overflow usize");

        Self {
            width,
            height,
            cells: vec![false; n],
            next: vec![false; n],
            generation: 0,
        }
    }

    /// Clear the board and scatter `live` random cells on it, as [`Grid::new`] does.
    ///
    /// The generation counter starts over.
    pub fn reseed<R>(&mut self, live: usize, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.cells.fill(false);
        self.scatter(live, rng);
        self.generation = 0;

        debug!(
            requested = live,
            placed = self.live_count(),
            "Reseeded grid"
        );
    }

    fn scatter<R>(&mut self, live: usize, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for _ in 0..live {
            let x = rng.gen_range(0..self.width);
            let y = rng.gen_range(0..self.height);

            let i = self.index(x, y);
            self.cells[i] = true;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The current generation, row-major
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// # Panics
    ///
    /// If `(x, y)` is off the board.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Count the live cells around `(x, y)`. The result is in `0..=8`.
    ///
    /// Neighbors that would fall past an edge are skipped.
    ///
    /// # Panics
    ///
    /// If `(x, y)` is off the board.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.assert_on_board(x, y);

        let mut n = 0;

        for (dx, dy) in NEIGHBORHOOD {
            // off the left or top edge
            let (Some(x), Some(y)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };

            // off the right or bottom edge
            if x >= self.width || y >= self.height {
                continue;
            }

            if self.cells[y * self.width + x] {
                n += 1;
            }
        }

        n
    }

    /// Advance the board by one generation.
    ///
    /// Every cell is computed from the current generation only. Results land in the back buffer,
    /// which becomes the current generation once the whole board is done.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = y * self.width + x;
                let n = self.count_live_neighbors(x, y);

                self.next[i] = rules::next_state(self.cells[i], n);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;

        trace!(generation = self.generation, "Stepped grid");
    }

    fn index(&self, x: usize, y: usize) -> usize {
        self.assert_on_board(x, y);

        y * self.width + x
    }

    fn assert_on_board(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is off the {}x{} board",
            self.width,
            self.height
        );
    }
}

/// One line per row, `#` for live cells and `.` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks_exact(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }

            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("live", &self.live_count())
            .finish()
    }
}
