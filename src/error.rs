//! Configuration error types.
//!
//! The simulation itself has no recoverable failure modes; only loading and
//! validating a [`crate::GameConfig`] can fail.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading or validating configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io {
        /// File that failed to open or read.
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`crate::GameConfig`].
    Parse(serde_json::Error),

    /// A value is outside the range the simulation can run with.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted range.
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "invalid config JSON: {err}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config value `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
