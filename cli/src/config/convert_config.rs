//! Runtime conversion options.

use std::path::{Path, PathBuf};

use oled_framebuffer::Format;
use oled_image::{InvertStage, NormalizeOptions};

/// Validated options for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub animated: bool,
    /// Write PNG output(s).
    pub image: bool,
    /// Write a framebuffer source file in this format.
    pub buffer: Option<Format>,
    pub normalize: NormalizeOptions,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Builder: set output base (or frames directory).
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Builder: set animated mode. Also resets the invert stage to the
    /// mode's default.
    pub fn with_animated(mut self, val: bool) -> Self {
        self.animated = val;
        self.normalize.invert_stage = default_invert_stage(val);
        self
    }

    /// Builder: set PNG output flag.
    pub fn with_image(mut self, val: bool) -> Self {
        self.image = val;
        self
    }

    /// Builder: request framebuffer output in `format`.
    pub fn with_buffer(mut self, format: Format) -> Self {
        self.buffer = Some(format);
        self
    }

    /// Builder: set invert flag.
    pub fn with_invert(mut self, val: bool) -> Self {
        self.normalize.invert = val;
        self
    }

    /// Builder: override the invert stage.
    pub fn with_invert_stage(mut self, stage: InvertStage) -> Self {
        self.normalize.invert_stage = stage;
        self
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

/// Still images invert the source; animations invert the dithered frames.
pub fn default_invert_stage(animated: bool) -> InvertStage {
    if animated {
        InvertStage::Dithered
    } else {
        InvertStage::Source
    }
}
