//! Floyd-Steinberg error-diffusion dithering to 1-bit.

use image::{GrayImage, Luma};
use oled_framebuffer::Bitmap;
use tracing::debug;

/// Binarization threshold: values at or above become white.
const THRESHOLD: i16 = 128;

/// Apply Floyd-Steinberg dithering to a grayscale image.
///
/// Pixels are visited in raster order and quantized to 0 or 255.
/// Error distribution pattern:
/// - Right:        7/16
/// - Bottom-left:  3/16
/// - Bottom:       5/16
/// - Bottom-right: 1/16
pub fn floyd_steinberg_dither(img: &GrayImage) -> GrayImage {
    let (width, height) = img.dimensions();
    debug!(width, height, "Applying Floyd-Steinberg dithering");

    let w = width as usize;
    let h = height as usize;

    // i16 working buffer so diffused error can leave the 0..=255 range
    let mut buffer: Vec<i16> = img.as_raw().iter().map(|&v| i16::from(v)).collect();

    for y in 0..h {
        for x in 0..w {
            let old_pixel = buffer[y * w + x];
            let new_pixel: i16 = if old_pixel >= THRESHOLD { 255 } else { 0 };
            buffer[y * w + x] = new_pixel;
            distribute_error(&mut buffer, x, y, w, h, old_pixel - new_pixel);
        }
    }

    let pixels: Vec<u8> = buffer.iter().map(|&v| v.clamp(0, 255) as u8).collect();
    GrayImage::from_raw(width, height, pixels).unwrap_or_else(|| GrayImage::new(width, height))
}

/// Distribute quantization error to the unprocessed neighbours.
fn distribute_error(buffer: &mut [i16], x: usize, y: usize, w: usize, h: usize, error: i16) {
    let idx = y * w + x;
    let has_right = x + 1 < w;
    let has_below = y + 1 < h;

    if has_right {
        buffer[idx + 1] += error * 7 / 16;
    }
    if has_below {
        if x > 0 {
            buffer[idx + w - 1] += error * 3 / 16;
        }
        buffer[idx + w] += error * 5 / 16;
        if has_right {
            buffer[idx + w + 1] += error / 16;
        }
    }
}

/// Convert a grayscale image to a bitmap; any non-zero value is "on".
pub fn luma_to_bitmap(img: &GrayImage) -> Bitmap {
    Bitmap::from_fn(img.width(), img.height(), |x, y| img.get_pixel(x, y).0[0] != 0)
}

/// Render a bitmap as 8-bit grayscale: on = 255 (white), off = 0.
pub fn bitmap_to_luma(bitmap: &Bitmap) -> GrayImage {
    GrayImage::from_fn(bitmap.width(), bitmap.height(), |x, y| {
        Luma([if bitmap.get(x, y) { 255 } else { 0 }])
    })
}
