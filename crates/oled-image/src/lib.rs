//! Image processing for 128x64 monochrome OLED output.
//!
//! Provides aspect fitting onto a black 2:1 canvas, Lanczos3 resizing,
//! Floyd-Steinberg dithering and the normalizer that chains them into a
//! display-sized [`oled_framebuffer::Bitmap`]. Also decodes still images and
//! animations (GIF, APNG, WebP) into source frames; other formats decode as
//! a single frame.

pub mod decode;
pub mod dither;
pub mod fit;
pub mod normalize;
pub mod resize;

// Re-exports for convenience
pub use decode::{DEFAULT_FRAME_DURATION_MS, SourceFrame, load_animation, load_image};
pub use dither::{bitmap_to_luma, floyd_steinberg_dither, luma_to_bitmap};
pub use fit::{AspectRatio, fit_to_aspect};
pub use normalize::{InvertStage, NormalizeOptions, NormalizedFrame, normalize, normalize_frames};
pub use resize::resize_to_display;

/// Errors that can occur while decoding or normalizing images.
#[derive(Debug, thiserror::Error)]
pub enum ImageEngineError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image has a zero dimension ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Animation contains no frames")]
    NoFrames,
}

/// Result type alias for image-engine operations.
pub type Result<T> = std::result::Result<T, ImageEngineError>;
