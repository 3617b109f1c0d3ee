//! Core data model: revision options, file groups, and revision entries.

use crate::error::RevisionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default number of hex characters kept from the digest.
pub const DEFAULT_LENGTH: usize = 8;

/// Digest algorithm used to derive the revision suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Blake3,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
            Algorithm::Blake3 => "blake3",
        }
    }

    /// Length of the full hex digest for this algorithm.
    pub fn hex_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha256 | Algorithm::Blake3 => 64,
            Algorithm::Sha512 => 128,
        }
    }
}

impl FromStr for Algorithm {
    type Err = RevisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            "blake3" => Ok(Algorithm::Blake3),
            _ => Err(RevisionError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = RevisionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(value: Algorithm) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Naming policy for files without an extension
///
/// `Trim` yields `LICENSE.0123abcd`. `TrailingDot` reproduces the historical
/// `LICENSE.0123abcd.` produced by joining an empty extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionlessName {
    #[default]
    Trim,
    TrailingDot,
}

/// Options for one build invocation. Immutable while groups run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionOptions {
    #[serde(default)]
    pub algorithm: Algorithm,

    #[serde(default = "default_length")]
    pub length: usize,

    /// Trim the group working directory from summary keys and values
    #[serde(default)]
    pub drop_cwd: bool,

    #[serde(default)]
    pub extensionless: ExtensionlessName,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

impl Default for RevisionOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            length: DEFAULT_LENGTH,
            drop_cwd: false,
            extensionless: ExtensionlessName::default(),
        }
    }
}

impl RevisionOptions {
    pub fn validate(&self) -> Result<(), RevisionError> {
        if self.length == 0 {
            return Err(RevisionError::InvalidLength(self.length));
        }
        Ok(())
    }
}

/// A set of source files sharing one destination policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileGroup {
    /// Identifier used in logs and in the fatal destination error
    pub id: String,
    /// Sources in processing order
    pub sources: Vec<PathBuf>,
    /// Destination directory; `None` revisions in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    /// Destination is a file-shaped path produced by glob expansion
    #[serde(default)]
    pub from_glob_expansion: bool,
    /// Prefix trimmed from summary paths when `drop_cwd` is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<PathBuf>,
}

impl FileGroup {
    /// Group that revisions its sources in place.
    pub fn in_place(id: impl Into<String>, sources: Vec<PathBuf>) -> Self {
        Self {
            id: id.into(),
            sources,
            destination: None,
            from_glob_expansion: false,
            working_directory: None,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn from_glob_expansion(mut self, expanded: bool) -> Self {
        self.from_glob_expansion = expanded;
        self
    }

    pub fn with_working_directory(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(cwd.into());
        self
    }
}

/// Placement mode for a revised file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Rename in place, next to the source
    Move,
    /// Duplicate into the group destination, leaving the source intact
    Copy,
}

/// Original path and the path it was revisioned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionEntry {
    pub original: PathBuf,
    pub revised: PathBuf,
}

impl RevisionEntry {
    pub fn new(original: impl Into<PathBuf>, revised: impl Into<PathBuf>) -> Self {
        Self {
            original: original.into(),
            revised: revised.into(),
        }
    }
}

/// Outcome of one group run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupReport {
    pub group: String,
    /// Primary files revised (directories excluded)
    pub revised: usize,
    /// Companion artifacts revised alongside their primary
    pub companions: usize,
    /// Entries in processing order, companions right after their primary
    pub entries: Vec<RevisionEntry>,
}
