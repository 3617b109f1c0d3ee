//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, RevisionError};

/// Map domain/service errors to a string for CLI output.
///
/// A destination conflict is prefixed so wrappers can tell a fatal abort from
/// other failures.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Revision(err @ RevisionError::DestinationNotDirectory { .. }) => {
            format!("Fatal: {}", err)
        }
        other => other.to_string(),
    }
}

/// Process exit code for an error.
pub fn exit_code(e: &ApiError) -> i32 {
    match e {
        ApiError::Revision(RevisionError::DestinationNotDirectory { .. }) => 2,
        ApiError::ConfigError(_) | ApiError::TargetNotFound(_) => 3,
        _ => 1,
    }
}
