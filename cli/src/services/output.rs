//! Output file naming.
//!
//! - still image  -> `<base>_128x64.png`
//! - buffer       -> `<base>_fb.c` / `<base>_fb.S`
//! - animated PNG -> `<dir>/frame_NNN.png` + `<dir>/durations.txt`, where
//!   `<dir>` is `--output` if given, otherwise `<base>_frames`

use std::ffi::OsString;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use oled_framebuffer::SourceFormat;

pub const IMAGE_SUFFIX: &str = "_128x64.png";
pub const BUFFER_SUFFIX: &str = "_fb";
pub const FRAMES_SUFFIX: &str = "_frames";
pub const DURATIONS_FILE: &str = "durations.txt";

/// Base name for outputs: `--output` verbatim, else the input file stem.
pub fn base_name(input: &Path, output: Option<&Path>) -> PathBuf {
    if let Some(out) = output {
        return out.to_path_buf();
    }
    input
        .file_stem()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output"))
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

pub fn image_path(base: &Path) -> PathBuf {
    with_suffix(base, IMAGE_SUFFIX)
}

pub fn buffer_path(base: &Path, emitter: &dyn SourceFormat) -> PathBuf {
    with_suffix(base, &format!("{BUFFER_SUFFIX}.{}", emitter.file_extension()))
}

/// Directory for animated PNG frames.
pub fn frames_dir(base: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) => dir.to_path_buf(),
        None => with_suffix(base, FRAMES_SUFFIX),
    }
}

/// Label shared by PNG file names, `durations.txt` and assembly blocks.
pub fn frame_label(index: usize) -> String {
    format!("frame_{index:03}")
}

pub fn frame_file_name(index: usize) -> String {
    format!("{}.png", frame_label(index))
}

/// One `frame_NNN: <ms>` line per frame.
pub fn durations_listing(durations: &[u32]) -> String {
    let mut out = String::new();
    for (i, ms) in durations.iter().enumerate() {
        let _ = writeln!(out, "{}: {ms}", frame_label(i));
    }
    out
}
