//! Summary accumulator: original path -> revised path for a whole build
//!
//! One `Summary` lives for the duration of a build invocation and is shared
//! (behind an `Arc`) by every group run. Writes are serialized by the lock;
//! entries are only ever added or overwritten, never removed.

use crate::error::ApiError;
use crate::revision::path::{drop_cwd, normalize_path_string};
use crate::types::RevisionEntry;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Process-wide mapping of original to revised paths
#[derive(Debug, Default)]
pub struct Summary {
    entries: RwLock<BTreeMap<String, String>>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from an existing mapping, e.g. one produced earlier in the same build.
    pub fn from_map(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Insert or overwrite; the later write for a key wins.
    pub fn insert(&self, original: String, revised: String) {
        self.entries.write().insert(original, revised);
    }

    /// Insert every entry of `other`, overwriting keys already present.
    pub fn extend(&self, other: &Summary) {
        let entries = other.snapshot();
        self.entries.write().extend(entries);
    }

    pub fn get(&self, original: &str) -> Option<String> {
        self.entries.read().get(original).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of the current mapping, sorted by original path.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.read().clone()
    }

    pub fn to_json_pretty(&self) -> Result<String, ApiError> {
        serde_json::to_string_pretty(&*self.entries.read())
            .map_err(|e| ApiError::Summary(format!("Failed to serialize summary: {}", e)))
    }

    /// Write the mapping as a JSON object, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<(), ApiError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ApiError::Summary(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| {
            ApiError::Summary(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Load a summary previously written with [`Summary::write_json`].
    pub fn load_json(path: &Path) -> Result<Self, ApiError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ApiError::Summary(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&contents).map_err(|e| {
            ApiError::Summary(format!("Invalid summary file {}: {}", path.display(), e))
        })?;
        Ok(Self::from_map(entries))
    }
}

/// Stores revision entries into a [`Summary`], optionally trimming the working directory
#[derive(Debug, Clone, Default)]
pub struct SummaryRecorder {
    working_directory: Option<PathBuf>,
    drop_cwd: bool,
}

impl SummaryRecorder {
    pub fn new(working_directory: Option<PathBuf>, drop_cwd: bool) -> Self {
        Self {
            working_directory,
            drop_cwd,
        }
    }

    /// Summary form of `path`: normalized, and trimmed when drop-cwd applies.
    pub fn summary_path(&self, path: &Path) -> String {
        match &self.working_directory {
            Some(cwd) if self.drop_cwd && !cwd.as_os_str().is_empty() => {
                drop_cwd(path, cwd).to_string_lossy().into_owned()
            }
            _ => normalize_path_string(path),
        }
    }

    /// Record `entry` and return the stored key and value.
    pub fn record(&self, summary: &Summary, entry: &RevisionEntry) -> (String, String) {
        let key = self.summary_path(&entry.original);
        let value = self.summary_path(&entry.revised);
        summary.insert(key.clone(), value.clone());
        (key, value)
    }
}
