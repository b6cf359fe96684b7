//! `img-to-oled` command-line entry point.
//!
//! Parses flags, validates the combination, then runs one conversion and
//! prints the paths it wrote.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use img_to_oled_lib::args::Cli;
use img_to_oled_lib::config;
use img_to_oled_lib::services::convert;

fn main() -> anyhow::Result<()> {
    img_to_oled_lib::init_tracing();

    let cli = Cli::parse();

    // Usage errors go through clap so they print like any other flag error
    let config = match config::validate(&cli) {
        Ok(config) => config,
        Err(e) => Cli::command()
            .error(ErrorKind::MissingRequiredArgument, e)
            .exit(),
    };

    tracing::debug!(?config, "Starting conversion");
    let report = convert::run(&config)?;

    if let Some(path) = &report.image_path {
        println!("Image saved: {}", path.display());
    }
    if let Some(dir) = &report.frames_dir {
        println!("Frames saved: {} ({} frames)", dir.display(), report.frame_count);
    }
    if let Some(path) = &report.buffer_path {
        println!("Framebuffer saved: {}", path.display());
    }
    Ok(())
}
