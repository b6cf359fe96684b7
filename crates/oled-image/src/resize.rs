//! Resizing to the fixed display resolution.
//!
//! Uses Lanczos3 filtering for high-quality downsampling.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use oled_framebuffer::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use tracing::debug;

/// Resize a fitted canvas to exactly 128x64.
///
/// The canvas is expected to already have the display aspect ratio; other
/// inputs are stretched. Returns the canvas unchanged if it already matches.
pub fn resize_to_display(canvas: RgbaImage) -> DynamicImage {
    let (orig_w, orig_h) = canvas.dimensions();
    let img = DynamicImage::ImageRgba8(canvas);

    if (orig_w, orig_h) == (DISPLAY_WIDTH, DISPLAY_HEIGHT) {
        debug!("Canvas already at display size, skipping resize");
        return img;
    }

    debug!(
        orig_w,
        orig_h,
        new_width = DISPLAY_WIDTH,
        new_height = DISPLAY_HEIGHT,
        "Resizing canvas to display size"
    );
    img.resize_exact(DISPLAY_WIDTH, DISPLAY_HEIGHT, FilterType::Lanczos3)
}
