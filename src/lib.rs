//! filerev: Content-Hash File Revisioning
//!
//! Renames or copies built assets to content-addressed names
//! (`app.js` -> `app.1a2b3c4d.js`) so clients can cache them forever while
//! any content change yields a new name. Source maps travel with their
//! primary file, and every original -> revised path lands in a shared
//! [`summary::Summary`] for downstream reference rewriting.

pub mod build;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod revision;
pub mod summary;
pub mod types;

pub use build::{BuildReport, BuildRunner};
pub use error::{ApiError, RevisionError};
pub use orchestrator::GroupOrchestrator;
pub use summary::{Summary, SummaryRecorder};
pub use types::{
    Algorithm, ExtensionlessName, FileGroup, GroupReport, Mode, RevisionEntry, RevisionOptions,
};
