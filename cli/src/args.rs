//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;
use oled_framebuffer::Format;
use oled_image::InvertStage;

#[derive(Debug, Parser)]
#[command(name = "img-to-oled")]
#[command(about = "Convert an image or animation to a 128x64 OLED image and/or framebuffer")]
pub struct Cli {
    /// Input image or animation file
    pub input: PathBuf,

    /// Base output name (frames directory for animated --image output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Invert polarity
    #[arg(short, long)]
    pub invert: bool,

    /// When to invert: "source" (before dithering) or "dithered" (after).
    /// Defaults to "source" for still images and "dithered" for animations
    #[arg(long, value_name = "STAGE")]
    pub invert_stage: Option<InvertStage>,

    /// Treat the input as a multi-frame animation (GIF, APNG, WebP)
    #[arg(short, long)]
    pub animated: bool,

    /// Save the processed image(s) as PNG
    #[arg(long)]
    pub image: bool,

    /// Generate a packed framebuffer source file
    #[arg(long)]
    pub buffer: bool,

    /// Framebuffer format: "c" or "asm" (required with --buffer)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<Format>,
}
