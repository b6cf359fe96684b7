//! Normalizer: fit, resize, dither and optionally invert a source image.
//!
//! The point at which inversion happens changes the result. Inverting the
//! source ([`InvertStage::Source`]) leaves the aspect padding black, while
//! inverting the dithered bitmap ([`InvertStage::Dithered`]) turns it white.
//! Single images default to `Source`, animations to `Dithered`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use image::DynamicImage;
use oled_framebuffer::Bitmap;
use rayon::prelude::*;
use tracing::debug;

use crate::Result;
use crate::decode::SourceFrame;
use crate::dither::{floyd_steinberg_dither, luma_to_bitmap};
use crate::fit::{AspectRatio, fit_to_aspect};
use crate::resize::resize_to_display;

/// When polarity inversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvertStage {
    /// Invert the decoded source colors before fitting and dithering.
    #[default]
    Source,
    /// Flip every bit of the dithered bitmap.
    Dithered,
}

impl fmt::Display for InvertStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvertStage::Source => f.write_str("source"),
            InvertStage::Dithered => f.write_str("dithered"),
        }
    }
}

impl FromStr for InvertStage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "source" => Ok(InvertStage::Source),
            "dithered" => Ok(InvertStage::Dithered),
            other => Err(format!(
                "unknown invert stage '{other}' (expected 'source' or 'dithered')"
            )),
        }
    }
}

/// Options controlling normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub invert: bool,
    pub invert_stage: InvertStage,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set invert flag.
    pub fn with_invert(mut self, val: bool) -> Self {
        self.invert = val;
        self
    }

    /// Builder: set invert stage.
    pub fn with_invert_stage(mut self, val: InvertStage) -> Self {
        self.invert_stage = val;
        self
    }

    fn inverts_at(&self, stage: InvertStage) -> bool {
        self.invert && self.invert_stage == stage
    }
}

/// A normalized animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFrame {
    pub bitmap: Bitmap,
    pub duration_ms: u32,
}

/// Produce a 128x64 bitmap from an arbitrary source image.
pub fn normalize(img: &DynamicImage, options: &NormalizeOptions) -> Result<Bitmap> {
    let source = if options.inverts_at(InvertStage::Source) {
        debug!("Inverting source colors");
        let mut inverted = img.clone();
        inverted.invert();
        Cow::Owned(inverted)
    } else {
        Cow::Borrowed(img)
    };

    let canvas = fit_to_aspect(&source, AspectRatio::DISPLAY)?;
    let resized = resize_to_display(canvas);
    let dithered = floyd_steinberg_dither(&resized.to_luma8());
    let bitmap = luma_to_bitmap(&dithered);

    if options.inverts_at(InvertStage::Dithered) {
        debug!("Inverting dithered bitmap");
        return Ok(bitmap.invert());
    }
    Ok(bitmap)
}

/// Normalize every frame of an animation, preserving order.
///
/// Frames are independent, so they are processed in parallel.
pub fn normalize_frames(
    frames: &[SourceFrame],
    options: &NormalizeOptions,
) -> Result<Vec<NormalizedFrame>> {
    debug!(frames = frames.len(), "Normalizing animation frames");
    frames
        .par_iter()
        .map(|frame| -> Result<NormalizedFrame> {
            Ok(NormalizedFrame {
                bitmap: normalize(&frame.image, options)?,
                duration_ms: frame.duration_ms,
            })
        })
        .collect()
}
