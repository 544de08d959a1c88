use crate::render::BYTES_PER_PIXEL;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Pixels covered by one braille character, horizontally and vertically
const CHAR_WIDTH: usize = 2;
const CHAR_HEIGHT: usize = 4;

/// A terminal viewport onto an RGBA frame.
///
/// Each terminal character shows a 2x4 block of pixels as braille dots. A pixel is lit when its
/// alpha is non-zero, so live cells show up and dead (transparent) cells don't.
pub struct Camera {
    /// The cell buffer. One entry per pixel in view
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the view, in pixels
    w: usize,

    /// Height of the view, in pixels
    h: usize,

    /// Column of the frame shown in the top left corner
    x: usize,

    /// Row of the frame shown in the top left corner
    y: usize,
}

impl Camera {
    /// A camera filling `cols` by `rows` terminal characters.
    pub fn new(cols: u16, rows: u16) -> Self {
        let (bw, bh) = (cols as usize, rows as usize);
        let (w, h) = (bw * CHAR_WIDTH, bh * CHAR_HEIGHT);

        // Each braille character takes 3 bytes in UTF-8, and we need one newline per row
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self {
            cb: vec![false; w * h],
            fb,
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
            x: 0,
            y: 0,
        }
    }

    /// Width of the view, in pixels
    pub fn width(&self) -> usize {
        self.w
    }

    /// Height of the view, in pixels
    pub fn height(&self) -> usize {
        self.h
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Fit the camera to a new terminal size. The position is kept as far as the `width` by
    /// `height` frame allows.
    pub fn resize(&mut self, cols: u16, rows: u16, width: usize, height: usize) {
        let (x, y) = (self.x, self.y);

        *self = Self::new(cols, rows);
        self.x = x;
        self.y = y;
        self.pan(0, 0, width, height);
    }

    /// Move the view by `(dx, dy)` pixels. The view never leaves the `width` by `height` frame.
    pub fn pan(&mut self, dx: isize, dy: isize, width: usize, height: usize) {
        self.x = self
            .x
            .saturating_add_signed(dx)
            .min(width.saturating_sub(self.w));
        self.y = self
            .y
            .saturating_add_signed(dy)
            .min(height.saturating_sub(self.h));
    }

    pub fn reset_view(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Copy the visible part of an RGBA frame into the cell buffer.
    ///
    /// # Panics
    ///
    /// If `pixels` does not hold `width * height` RGBA groups.
    pub fn draw_rgba(&mut self, pixels: &[u8], width: usize, height: usize) {
        assert_eq!(
            pixels.len(),
            BYTES_PER_PIXEL * width * height,
            "frame does not match its dimensions"
        );

        let cols = width.saturating_sub(self.x).min(self.w);
        let rows = height.saturating_sub(self.y).min(self.h);

        for cy in 0..rows {
            let row = (self.y + cy) * width + self.x;

            for cx in 0..cols {
                let alpha = pixels[BYTES_PER_PIXEL * (row + cx) + 3];

                if alpha != 0 {
                    let i = self.xy_from(cx, cy);
                    self.cb[i] = true;
                }
            }
        }
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?".
    pub fn render(&mut self) -> &str {
        let bw = self.w / CHAR_WIDTH;

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);
                self.cp[(y / CHAR_HEIGHT) * bw + (x / CHAR_WIDTH)] += Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every codepoint stays within U+2800..=U+28FF
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
