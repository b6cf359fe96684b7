//! Input decoding for still images and animations.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::codecs::webp::WebPDecoder;
use image::{AnimationDecoder, DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use tracing::{debug, info};

use crate::{ImageEngineError, Result};

/// Display time used when a frame carries no (or a zero) delay.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// One decoded animation frame, fully composited.
#[derive(Debug, Clone)]
pub struct SourceFrame {
    pub image: DynamicImage,
    /// Display time in milliseconds.
    pub duration_ms: u32,
}

/// Open a still image, honouring EXIF orientation.
///
/// For multi-frame files only the first frame is returned.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Opened image"
    );
    Ok(img)
}

/// Decode every frame of a GIF, APNG or animated WebP.
///
/// Any other decodable image (still PNG/WebP, JPEG, BMP, ...) yields a single
/// frame with the default duration.
pub fn load_animation(path: &Path) -> Result<Vec<SourceFrame>> {
    let format = ImageReader::open(path)?.with_guessed_format()?.format();
    let reader = BufReader::new(File::open(path)?);

    let frames = match format {
        Some(ImageFormat::Gif) => collect_frames(GifDecoder::new(reader)?)?,
        Some(ImageFormat::Png) => {
            let decoder = PngDecoder::new(reader)?;
            if decoder.is_apng()? {
                collect_frames(decoder.apng()?)?
            } else {
                single_frame(DynamicImage::from_decoder(decoder)?)
            }
        }
        Some(ImageFormat::WebP) => {
            let decoder = WebPDecoder::new(reader)?;
            if decoder.has_animation() {
                collect_frames(decoder)?
            } else {
                single_frame(DynamicImage::from_decoder(decoder)?)
            }
        }
        // Formats without animation support are a one-frame sequence
        _ => single_frame(load_image(path)?),
    };

    if frames.is_empty() {
        return Err(ImageEngineError::NoFrames);
    }
    info!(path = %path.display(), frames = frames.len(), "Opened animation");
    Ok(frames)
}

fn single_frame(image: DynamicImage) -> Vec<SourceFrame> {
    vec![SourceFrame {
        image,
        duration_ms: DEFAULT_FRAME_DURATION_MS,
    }]
}

fn collect_frames<'a, D: AnimationDecoder<'a>>(decoder: D) -> Result<Vec<SourceFrame>> {
    decoder
        .into_frames()
        .enumerate()
        .map(|(i, frame)| -> Result<SourceFrame> {
            let frame = frame?;
            let (numer, denom) = frame.delay().numer_denom_ms();
            let duration_ms = frame_duration_ms(numer, denom);
            debug!(frame = i, duration_ms, "Decoded animation frame");
            Ok(SourceFrame {
                image: DynamicImage::ImageRgba8(frame.into_buffer()),
                duration_ms,
            })
        })
        .collect()
}

/// Convert a delay ratio to whole milliseconds, substituting the default
/// for missing delays.
fn frame_duration_ms(numer: u32, denom: u32) -> u32 {
    if denom == 0 {
        return DEFAULT_FRAME_DURATION_MS;
    }
    match numer / denom {
        0 => DEFAULT_FRAME_DURATION_MS,
        ms => ms,
    }
}
