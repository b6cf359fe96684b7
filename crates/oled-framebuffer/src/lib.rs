//! Page-addressed framebuffer support for 128x64 monochrome OLED panels.
//!
//! Provides the 1-bit [`Bitmap`], the packed [`Framebuffer`] layout used by
//! SSD1306-style controllers, and source-code emitters (C and GNU assembler)
//! for static images and animations.

pub mod bitmap;
pub mod emit;
pub mod framebuffer;

// Re-exports for convenience
pub use bitmap::Bitmap;
pub use emit::{AnimatedFrame, Format, SourceFormat};
pub use framebuffer::{Framebuffer, pack_column, unpack_column};

/// Display width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Number of pixel rows packed into one page byte.
pub const PAGE_HEIGHT: u32 = 8;

/// Number of 8-row pages on the display.
pub const PAGE_COUNT: u32 = DISPLAY_HEIGHT / PAGE_HEIGHT;

/// Packed framebuffer size in bytes (one byte per column per page).
pub const FRAMEBUFFER_SIZE: usize = (DISPLAY_WIDTH * PAGE_COUNT) as usize;

/// Errors that can occur while packing or emitting framebuffers.
#[derive(Debug, thiserror::Error)]
pub enum FramebufferError {
    #[error(
        "Invalid bitmap dimensions: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Invalid buffer length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Animation has no frames")]
    EmptyAnimation,
}

/// Result type alias for framebuffer operations.
pub type Result<T> = std::result::Result<T, FramebufferError>;
