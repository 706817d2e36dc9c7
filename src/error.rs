use std::path::PathBuf;

use thiserror::Error;

/// Main error type for proctable
#[derive(Debug, Error)]
pub enum ProctableError {
    /// Configuration parsing failed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file is invalid
    #[error("Invalid configuration file {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    /// Locale tag could not be parsed
    #[error("Invalid locale tag {tag}: {reason}")]
    Locale { tag: String, reason: String },

    /// Collator construction failed
    #[error("Collation error: {message}")]
    Collation { message: String },
}

impl ProctableError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        ProctableError::Config {
            message: message.into(),
        }
    }

    /// Create a config invalid error
    pub fn config_invalid(path: PathBuf, reason: impl Into<String>) -> Self {
        ProctableError::ConfigInvalid {
            path,
            reason: reason.into(),
        }
    }

    /// Create a locale error
    pub fn locale(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        ProctableError::Locale {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a collation error
    pub fn collation(message: impl Into<String>) -> Self {
        ProctableError::Collation {
            message: message.into(),
        }
    }
}

/// Result type alias for proctable operations
pub type Result<T> = std::result::Result<T, ProctableError>;

impl From<toml::de::Error> for ProctableError {
    fn from(err: toml::de::Error) -> Self {
        ProctableError::Config {
            message: err.to_string(),
        }
    }
}
