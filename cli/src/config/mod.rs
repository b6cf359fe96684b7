//! Conversion configuration: validated options built from the command line.

pub mod convert_config;
pub mod validation;

pub use convert_config::ConvertConfig;
pub use validation::validate;

/// Usage errors detected before any processing starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Specify at least one of --image or --buffer")]
    NoOutputSelected,

    #[error("--format is required when using --buffer")]
    MissingFormat,
}
