//! Page-major packing of 1-bit bitmaps.
//!
//! Layout: the display is split into 8-row pages. Page 0 holds rows 0..8,
//! page 1 rows 8..16, and so on. Within a page there is one byte per
//! column; bit `b` (LSB first) is the pixel at row `page * 8 + b`.
//! Bytes are stored page-major, column-minor.

use tracing::debug;

use crate::bitmap::Bitmap;
use crate::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAMEBUFFER_SIZE, FramebufferError, PAGE_COUNT, PAGE_HEIGHT,
    Result,
};

/// Packed display memory for one 128x64 frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    bytes: Vec<u8>,
}

/// Pack 8 vertically stacked pixels (top first) into one byte, LSB = top.
pub fn pack_column(column: [bool; 8]) -> u8 {
    column
        .iter()
        .enumerate()
        .fold(0u8, |byte, (bit, &on)| if on { byte | (1 << bit) } else { byte })
}

/// Expand one page byte into 8 vertically stacked pixels (top first).
pub fn unpack_column(byte: u8) -> [bool; 8] {
    let mut column = [false; 8];
    for (bit, px) in column.iter_mut().enumerate() {
        *px = byte & (1 << bit) != 0;
    }
    column
}

impl Framebuffer {
    /// Pack a display-sized bitmap.
    ///
    /// Returns [`FramebufferError::DimensionMismatch`] unless the bitmap is
    /// exactly 128x64.
    pub fn pack(bitmap: &Bitmap) -> Result<Self> {
        if !bitmap.is_display_sized() {
            return Err(FramebufferError::DimensionMismatch {
                expected_width: DISPLAY_WIDTH,
                expected_height: DISPLAY_HEIGHT,
                actual_width: bitmap.width(),
                actual_height: bitmap.height(),
            });
        }

        let mut bytes = Vec::with_capacity(FRAMEBUFFER_SIZE);
        for page in 0..PAGE_COUNT {
            for x in 0..DISPLAY_WIDTH {
                let mut column = [false; 8];
                for (bit, px) in column.iter_mut().enumerate() {
                    *px = bitmap.get(x, page * PAGE_HEIGHT + bit as u32);
                }
                bytes.push(pack_column(column));
            }
        }

        debug!(
            bytes = bytes.len(),
            lit = bitmap.count_on(),
            "Packed bitmap into framebuffer"
        );
        Ok(Self { bytes })
    }

    /// Wrap raw framebuffer bytes, checking the length.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != FRAMEBUFFER_SIZE {
            return Err(FramebufferError::InvalidLength {
                expected: FRAMEBUFFER_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Unpack back into a 128x64 bitmap.
    pub fn to_bitmap(&self) -> Bitmap {
        Bitmap::from_fn(DISPLAY_WIDTH, DISPLAY_HEIGHT, |x, y| {
            let page = y / PAGE_HEIGHT;
            let byte = self.bytes[(page * DISPLAY_WIDTH + x) as usize];
            unpack_column(byte)[(y % PAGE_HEIGHT) as usize]
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
