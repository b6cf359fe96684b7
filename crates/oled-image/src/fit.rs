//! Aspect fitting: pad an image onto a black canvas of the display ratio.

use image::{DynamicImage, Rgba, RgbaImage};
use oled_framebuffer::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use tracing::debug;

use crate::{ImageEngineError, Result};

/// Canvas background (opaque black).
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Target width:height ratio as a reduced integer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// Ratio of the 128x64 display (2:1).
    pub const DISPLAY: AspectRatio = AspectRatio::reduced(DISPLAY_WIDTH, DISPLAY_HEIGHT);

    /// Build a ratio reduced to lowest terms.
    pub const fn reduced(width: u32, height: u32) -> Self {
        let (mut a, mut b) = (width, height);
        while b != 0 {
            let t = a % b;
            a = b;
            b = t;
        }
        if a == 0 {
            return Self { width, height };
        }
        Self {
            width: width / a,
            height: height / a,
        }
    }

    /// Smallest canvas of this ratio that contains `width` x `height`.
    pub fn canvas_for(self, width: u32, height: u32) -> (u32, u32) {
        let k = width
            .div_ceil(self.width)
            .max(height.div_ceil(self.height));
        (k * self.width, k * self.height)
    }
}

/// Center `img` on a black canvas whose aspect ratio is exactly `ratio`.
///
/// The wider dimension (relative to `ratio`) is kept and the other one is
/// extended. Offsets use integer division, so odd padding leaves the extra
/// pixel on the right/bottom. Transparent pixels end up black.
pub fn fit_to_aspect(img: &DynamicImage, ratio: AspectRatio) -> Result<RgbaImage> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(ImageEngineError::EmptyImage {
            width: w,
            height: h,
        });
    }

    let (new_w, new_h) = ratio.canvas_for(w, h);
    let x = (new_w - w) / 2;
    let y = (new_h - h) / 2;
    debug!(w, h, new_w, new_h, x, y, "Fitting image to aspect ratio");

    let mut canvas = RgbaImage::from_pixel(new_w, new_h, BACKGROUND);
    for (dx, dy, pixel) in img.to_rgba8().enumerate_pixels() {
        canvas.put_pixel(x + dx, y + dy, over_black(pixel));
    }
    Ok(canvas)
}

/// Composite a pixel over the opaque black background.
fn over_black(pixel: &Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    if a == 255 {
        return Rgba([r, g, b, 255]);
    }
    let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
    Rgba([scale(r), scale(g), scale(b), 255])
}
