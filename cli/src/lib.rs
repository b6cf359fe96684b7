//! Image/animation to 128x64 OLED converter.
//!
//! Wires argument parsing, option validation and the conversion pipeline
//! (`oled-image` for normalization, `oled-framebuffer` for packing and
//! source emission) behind the `img-to-oled` binary.

pub mod args;
pub mod config;
pub mod services;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
