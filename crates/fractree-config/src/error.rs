use fractree_core::ParamError;
use thiserror::Error;

/// Errors emitted while reading, writing, or validating the config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem operation failed.
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for [`crate::Config`].
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize failed: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid tree parameters: {0}")]
    Params(#[from] ParamError),
    #[error("{message}")]
    Validation { message: String },
    #[error("no home directory to hold the config")]
    NoConfigDir,
}
