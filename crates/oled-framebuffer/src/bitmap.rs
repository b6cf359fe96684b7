//! 1-bit pixel grid produced by the normalizer.

use crate::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// A row-major grid of on/off pixels.
///
/// `true` means the pixel is lit ("white" in PNG output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Create a bitmap with every pixel set to `on`.
    pub fn filled(width: u32, height: u32, on: bool) -> Self {
        Self {
            width,
            height,
            pixels: vec![on; (width as usize) * (height as usize)],
        }
    }

    /// Create a display-sized (128x64) bitmap with every pixel set to `on`.
    pub fn display(on: bool) -> Self {
        Self::filled(DISPLAY_WIDTH, DISPLAY_HEIGHT, on)
    }

    /// Build a bitmap by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the bitmap matches the 128x64 display resolution.
    pub fn is_display_sized(&self) -> bool {
        self.dimensions() == (DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }

    /// Pixel state at `(x, y)`. Out-of-range coordinates read as off.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Row-major view of the pixels.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Number of lit pixels.
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Return a copy with every pixel flipped.
    pub fn inverted(&self) -> Self {
        self.clone().invert()
    }

    /// Flip every pixel in place and return the bitmap.
    pub fn invert(mut self) -> Self {
        for p in &mut self.pixels {
            *p = !*p;
        }
        self
    }
}
