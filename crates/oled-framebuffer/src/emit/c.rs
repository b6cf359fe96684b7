//! C source emitter.
//!
//! Static output declares `framebuffer[1024]`; animated output adds a frame
//! count, a `uint16_t` duration table and a `[frame][byte]` array. Array
//! bounds are printed from [`FRAMEBUFFER_SIZE`].

use std::fmt::Write;

use super::{AnimatedFrame, SourceFormat, duration_lines, hex_lines};
use crate::framebuffer::Framebuffer;
use crate::{FRAMEBUFFER_SIZE, FramebufferError, Result};

const HEADER: &str = "#include <stdint.h>\n\n";

/// C array-literal output variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSource;

impl SourceFormat for CSource {
    fn name(&self) -> &str {
        "C"
    }

    fn file_extension(&self) -> &str {
        "c"
    }

    fn render_static(&self, framebuffer: &Framebuffer) -> String {
        let mut out = String::from(HEADER);
        let _ = writeln!(out, "const uint8_t framebuffer[{}] = {{", framebuffer.len());
        for line in hex_lines(framebuffer.as_bytes()) {
            let _ = writeln!(out, "    {line},");
        }
        out.push_str("};\n");
        out
    }

    fn render_animation(&self, frames: &[AnimatedFrame]) -> Result<String> {
        if frames.is_empty() {
            return Err(FramebufferError::EmptyAnimation);
        }
        let n = frames.len();

        let mut out = String::from(HEADER);
        let _ = writeln!(out, "const uint16_t n_frames = {n};\n");

        let _ = writeln!(out, "const uint16_t durations[{n}] = {{");
        for line in duration_lines(frames) {
            let _ = writeln!(out, "    {line},");
        }
        out.push_str("};\n\n");

        let _ = writeln!(out, "const uint8_t framebuffer[{n}][{FRAMEBUFFER_SIZE}] = {{");
        for frame in frames {
            out.push_str("    {\n");
            for line in hex_lines(frame.framebuffer.as_bytes()) {
                let _ = writeln!(out, "        {line},");
            }
            out.push_str("    },\n");
        }
        out.push_str("};\n");
        Ok(out)
    }
}
