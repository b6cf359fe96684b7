//! Flag-combination validation.

use tracing::warn;

use super::ConfigError;
use super::convert_config::{ConvertConfig, default_invert_stage};
use crate::args::Cli;

/// Check the parsed command line and build the run configuration.
pub fn validate(cli: &Cli) -> Result<ConvertConfig, ConfigError> {
    if !cli.image && !cli.buffer {
        return Err(ConfigError::NoOutputSelected);
    }

    let buffer = if cli.buffer {
        Some(cli.format.ok_or(ConfigError::MissingFormat)?)
    } else {
        if let Some(format) = cli.format {
            warn!(%format, "--format has no effect without --buffer");
        }
        None
    };

    if cli.invert_stage.is_some() && !cli.invert {
        warn!("--invert-stage has no effect without --invert");
    }

    let mut config = ConvertConfig::new(&cli.input)
        .with_animated(cli.animated)
        .with_image(cli.image)
        .with_invert(cli.invert)
        .with_invert_stage(
            cli.invert_stage
                .unwrap_or_else(|| default_invert_stage(cli.animated)),
        );
    config.buffer = buffer;
    config.output = cli.output.clone();
    Ok(config)
}
