//! Source-code emitters for packed framebuffers.
//!
//! Supports two output variants:
//! - C: `uint8_t` array literals (`.c`)
//! - Assembly: GNU `as` data directives (`.S`)

pub mod asm;
pub mod c;

pub use asm::AsmSource;
pub use c::CSource;

use std::fmt;
use std::str::FromStr;

use crate::Result;
use crate::framebuffer::Framebuffer;

/// Number of values written per source line.
pub const VALUES_PER_LINE: usize = 16;

/// One frame of an animation together with its display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedFrame {
    pub framebuffer: Framebuffer,
    /// Display time in milliseconds.
    pub duration_ms: u16,
}

/// Trait implemented by each source-code output variant.
pub trait SourceFormat {
    /// Human-readable variant name (e.g. "C", "ASM").
    fn name(&self) -> &str;

    /// File extension without the dot.
    fn file_extension(&self) -> &str;

    /// Render a single framebuffer.
    fn render_static(&self, framebuffer: &Framebuffer) -> String;

    /// Render every frame plus the duration table.
    ///
    /// Fails with [`crate::FramebufferError::EmptyAnimation`] when `frames` is empty.
    fn render_animation(&self, frames: &[AnimatedFrame]) -> Result<String>;
}

/// Selectable output variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    C,
    Asm,
}

impl Format {
    /// Emitter implementing this variant.
    pub fn emitter(self) -> &'static dyn SourceFormat {
        match self {
            Format::C => &CSource,
            Format::Asm => &AsmSource,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::C => f.write_str("c"),
            Format::Asm => f.write_str("asm"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "c" => Ok(Format::C),
            "asm" => Ok(Format::Asm),
            other => Err(format!("unknown format '{other}' (expected 'c' or 'asm')")),
        }
    }
}

/// Format bytes as `0xNN` values, `VALUES_PER_LINE` per line.
pub(crate) fn hex_lines(bytes: &[u8]) -> impl Iterator<Item = String> + '_ {
    bytes.chunks(VALUES_PER_LINE).map(|chunk| {
        chunk
            .iter()
            .map(|b| format!("0x{b:02X}"))
            .collect::<Vec<_>>()
            .join(", ")
    })
}

/// Format durations as decimal values, `VALUES_PER_LINE` per line.
pub(crate) fn duration_lines(frames: &[AnimatedFrame]) -> impl Iterator<Item = String> + '_ {
    frames.chunks(VALUES_PER_LINE).map(|chunk| {
        chunk
            .iter()
            .map(|f| f.duration_ms.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    })
}
