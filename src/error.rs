//! Error types for the filerev revisioning engine.

use std::path::PathBuf;
use thiserror::Error;

/// Revisioning engine errors
///
/// Every variant is terminal for the group that raised it. Nothing is retried
/// and files already moved or copied are left in place.
#[derive(Debug, Error)]
pub enum RevisionError {
    #[error("Destination {} for target {group} is not a directory", path.display())]
    DestinationNotDirectory { path: PathBuf, group: String },

    #[error("Failed to create destination {}: {source}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to place {} at {}: {source}", from.display(), to.display())]
    Place {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid revision length: {0} (must be at least 1)")]
    InvalidLength(usize),

    #[error("Group task failed: {0}")]
    Task(String),
}

impl RevisionError {
    /// True for the fatal destination conflict that aborts a whole build.
    pub fn is_destination_conflict(&self) -> bool {
        matches!(self, RevisionError::DestinationNotDirectory { .. })
    }
}

/// Host-level errors: configuration, discovery, and CLI surface
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Revision(#[from] RevisionError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Discovery failed: {0}")]
    Discovery(String),

    #[error("Summary file error: {0}")]
    Summary(String),

    #[error("Target not found: {0}. Define it under [targets] in filerev.toml.")]
    TargetNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
