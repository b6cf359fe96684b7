//! Conversion pipeline.
//!
//! decode -> normalize (fit, resize, dither, invert) -> PNG and/or
//! pack + emit. Every output file is written as soon as it is ready; a
//! failure part-way leaves earlier files in place.

use std::fs;
use std::path::{Path, PathBuf};

use oled_framebuffer::{AnimatedFrame, Bitmap, Framebuffer, FramebufferError};
use oled_image::{
    ImageEngineError, NormalizedFrame, bitmap_to_luma, load_animation, load_image, normalize,
    normalize_frames,
};
use tracing::{info, warn};

use super::output;
use crate::config::ConvertConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Image(#[from] ImageEngineError),

    #[error(transparent)]
    Framebuffer(#[from] FramebufferError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save PNG {}: {source}", .path.display())]
    SavePng {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Paths written by a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub image_path: Option<PathBuf>,
    pub frames_dir: Option<PathBuf>,
    pub buffer_path: Option<PathBuf>,
    pub frame_count: usize,
}

/// Run one conversion as described by `config`.
pub fn run(config: &ConvertConfig) -> Result<ConvertReport, ConvertError> {
    if config.animated {
        convert_animation(config)
    } else {
        convert_still(config)
    }
}

fn convert_still(config: &ConvertConfig) -> Result<ConvertReport, ConvertError> {
    let base = output::base_name(&config.input, config.output());
    let img = load_image(&config.input)?;
    let bitmap = normalize(&img, &config.normalize)?;

    let mut report = ConvertReport {
        frame_count: 1,
        ..ConvertReport::default()
    };

    if config.image {
        let path = output::image_path(&base);
        save_png(&bitmap, &path)?;
        info!(path = %path.display(), "Image saved");
        report.image_path = Some(path);
    }

    if let Some(format) = config.buffer {
        let emitter = format.emitter();
        let framebuffer = Framebuffer::pack(&bitmap)?;
        let path = output::buffer_path(&base, emitter);
        write_file(&path, &emitter.render_static(&framebuffer))?;
        info!(path = %path.display(), format = emitter.name(), "Framebuffer saved");
        report.buffer_path = Some(path);
    }

    Ok(report)
}

fn convert_animation(config: &ConvertConfig) -> Result<ConvertReport, ConvertError> {
    let base = output::base_name(&config.input, config.output());
    let source_frames = load_animation(&config.input)?;
    let mut frames = normalize_frames(&source_frames, &config.normalize)?;
    saturate_durations(&mut frames);

    let mut report = ConvertReport {
        frame_count: frames.len(),
        ..ConvertReport::default()
    };

    if config.image {
        let dir = output::frames_dir(&base, config.output());
        save_frames(&frames, &dir)?;
        info!(dir = %dir.display(), frames = frames.len(), "Frames saved");
        report.frames_dir = Some(dir);
    }

    if let Some(format) = config.buffer {
        let emitter = format.emitter();
        let packed = pack_frames(&frames)?;
        let path = output::buffer_path(&base, emitter);
        write_file(&path, &emitter.render_animation(&packed)?)?;
        info!(
            path = %path.display(),
            format = emitter.name(),
            frames = packed.len(),
            "Framebuffer saved"
        );
        report.buffer_path = Some(path);
    }

    Ok(report)
}

/// Write one PNG per frame plus the duration index.
fn save_frames(frames: &[NormalizedFrame], dir: &Path) -> Result<(), ConvertError> {
    fs::create_dir_all(dir).map_err(|source| ConvertError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    for (i, frame) in frames.iter().enumerate() {
        save_png(&frame.bitmap, &dir.join(output::frame_file_name(i)))?;
    }

    let durations: Vec<u32> = frames.iter().map(|f| f.duration_ms).collect();
    write_file(
        &dir.join(output::DURATIONS_FILE),
        &output::durations_listing(&durations),
    )
}

/// Pack every frame, clamping durations to the 16-bit table entries.
pub fn pack_frames(frames: &[NormalizedFrame]) -> Result<Vec<AnimatedFrame>, ConvertError> {
    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| -> Result<AnimatedFrame, ConvertError> {
            Ok(AnimatedFrame {
                framebuffer: Framebuffer::pack(&frame.bitmap)?,
                duration_ms: clamp_duration(i, frame.duration_ms),
            })
        })
        .collect()
}

/// Saturate durations in place so the PNG listing and the emitted table agree.
fn saturate_durations(frames: &mut [NormalizedFrame]) {
    for (i, frame) in frames.iter_mut().enumerate() {
        frame.duration_ms = u32::from(clamp_duration(i, frame.duration_ms));
    }
}

fn clamp_duration(index: usize, duration_ms: u32) -> u16 {
    u16::try_from(duration_ms).unwrap_or_else(|_| {
        warn!(
            frame = index,
            duration_ms,
            max = u16::MAX,
            "Frame duration exceeds 16-bit range, saturating"
        );
        u16::MAX
    })
}

fn save_png(bitmap: &Bitmap, path: &Path) -> Result<(), ConvertError> {
    bitmap_to_luma(bitmap)
        .save(path)
        .map_err(|source| ConvertError::SavePng {
            path: path.to_path_buf(),
            source,
        })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ConvertError> {
    fs::write(path, contents).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
