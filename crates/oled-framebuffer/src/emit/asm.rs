//! GNU assembler source emitter.
//!
//! Static output is a bare run of `.byte` directives. Animated output adds
//! `n_frames`, a `.hword` duration table and one `frame_NNN` label per frame.
//! Each animated frame block starts with the SSD1306 data-control byte so it
//! can be streamed to the controller as-is; static output has no prefix.

use std::fmt::Write;

use super::{AnimatedFrame, SourceFormat, duration_lines, hex_lines};
use crate::framebuffer::Framebuffer;
use crate::{FramebufferError, Result};

/// Co = 0, D/C# = 1: the bytes that follow are display RAM data.
pub const DATA_CONTROL_BYTE: u8 = 0x40;

/// Assembly data-directive output variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsmSource;

fn write_bytes(out: &mut String, bytes: &[u8]) {
    for line in hex_lines(bytes) {
        let _ = writeln!(out, "    .byte {line}");
    }
}

impl SourceFormat for AsmSource {
    fn name(&self) -> &str {
        "ASM"
    }

    fn file_extension(&self) -> &str {
        "S"
    }

    fn render_static(&self, framebuffer: &Framebuffer) -> String {
        let mut out = String::new();
        write_bytes(&mut out, framebuffer.as_bytes());
        out
    }

    fn render_animation(&self, frames: &[AnimatedFrame]) -> Result<String> {
        if frames.is_empty() {
            return Err(FramebufferError::EmptyAnimation);
        }

        let mut out = String::new();
        let _ = writeln!(out, "n_frames: .hword {}\n", frames.len());

        out.push_str("durations:\n");
        for line in duration_lines(frames) {
            let _ = writeln!(out, "    .hword {line}");
        }

        for (i, frame) in frames.iter().enumerate() {
            let _ = writeln!(out, "\nframe_{i:03}:");
            let _ = writeln!(out, "    .byte 0x{DATA_CONTROL_BYTE:02X}");
            write_bytes(&mut out, frame.framebuffer.as_bytes());
        }
        Ok(out)
    }
}
