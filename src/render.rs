use crate::grid::Grid;

/// RGBA of a live cell, opaque white
pub const ALIVE: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// RGBA of a dead cell. Note the alpha: dead cells are transparent black, not opaque black.
pub const DEAD: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

/// Bytes per cell in a pixel buffer
pub const BYTES_PER_PIXEL: usize = 4;

/// Length a pixel buffer must have to hold `grid`
pub fn pixel_buffer_len(grid: &Grid) -> usize {
    BYTES_PER_PIXEL * grid.width() * grid.height()
}

/// Write the current generation of `grid` into `pixels`, one RGBA group per cell in row-major
/// order. Every byte of `pixels` is overwritten.
///
/// # Panics
///
/// If `pixels` is not exactly [`pixel_buffer_len`] bytes long.
pub fn render(grid: &Grid, pixels: &mut [u8]) {
    assert_eq!(
        pixels.len(),
        pixel_buffer_len(grid),
        "pixel buffer must hold one RGBA group per cell of the {}x{} grid",
        grid.width(),
        grid.height()
    );

    for (px, &alive) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).zip(grid.cells()) {
        px.copy_from_slice(if alive { &ALIVE } else { &DEAD });
    }
}

/// A pixel buffer sized for one grid.
///
/// Hosts can hand [`render`] their own buffer instead; this is for the ones that would rather
/// not do the arithmetic.
pub struct Frame {
    pixels: Vec<u8>,

    /// Width in pixels
    width: usize,

    /// Height in pixels
    height: usize,
}

impl Frame {
    pub fn new(grid: &Grid) -> Self {
        Self {
            pixels: vec![0; pixel_buffer_len(grid)],
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Render `grid` into this frame
    ///
    /// # Panics
    ///
    /// If `grid` does not have the dimensions this frame was created with.
    pub fn draw(&mut self, grid: &Grid) {
        assert!(
            grid.width() == self.width && grid.height() == self.height,
            "frame is {}x{} but the grid is {}x{}",
            self.width,
            self.height,
            grid.width(),
            grid.height()
        );

        render(grid, &mut self.pixels);
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::ALIVE;
    use super::DEAD;
    use super::Frame;
    use super::render;
    use crate::grid::Grid;

    #[test]
    fn cells_map_to_pixel_groups() {
        let grid = Grid::from_cells(3, 2, [(1, 0), (2, 1)]);
        let mut pixels = vec![0xAB; 24];

        render(&grid, &mut pixels);

        for (i, px) in pixels.chunks_exact(4).enumerate() {
            let expected = if i == 1 || i == 5 { ALIVE } else { DEAD };
            assert_eq!(px, expected, "pixel {i}");
        }
    }

    #[test]
    fn overwrites_stale_frame() {
        let mut grid = Grid::from_cells(3, 3, [(1, 0), (1, 1), (1, 2)]);
        let mut frame = Frame::new(&grid);

        frame.draw(&grid);
        grid.step();
        frame.draw(&grid);

        let lit: Vec<usize> = frame
            .pixels()
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| *px == ALIVE)
            .map(|(i, _)| i)
            .collect();

        assert_eq!(lit, vec![3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "pixel buffer must hold one RGBA group per cell")]
    fn short_buffer() {
        let grid = Grid::from_cells(2, 2, []);
        render(&grid, &mut [0; 15]);
    }

    #[test]
    #[should_panic(expected = "pixel buffer must hold one RGBA group per cell")]
    fn long_buffer() {
        let grid = Grid::from_cells(2, 2, []);
        render(&grid, &mut [0; 17]);
    }

    #[test]
    #[should_panic(expected = "frame is 2x3 but the grid is 3x2")]
    fn frame_of_another_grid() {
        let mut frame = Frame::new(&Grid::from_cells(2, 3, []));
        frame.draw(&Grid::from_cells(3, 2, []));
    }
}
