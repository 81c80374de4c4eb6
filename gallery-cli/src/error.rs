//! CLI error type

use gallery_lib::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
