//! Move-vs-copy placement and destination directory guarantees

use crate::error::RevisionError;
use crate::types::{FileGroup, Mode};
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Placement policy for one file group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placer {
    mode: Mode,
    destination: Option<PathBuf>,
}

impl Placer {
    /// Derive the policy from the group: a destination means Copy, none means Move.
    pub fn for_group(group: &FileGroup) -> Self {
        match destination_dir(group) {
            Some(destination) => Self {
                mode: Mode::Copy,
                destination: Some(destination),
            },
            None => Self {
                mode: Mode::Move,
                destination: None,
            },
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Group destination directory, `None` when revisioning in place.
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Make sure the destination directory exists before any file is touched.
    pub fn prepare(&self, group_id: &str) -> Result<(), RevisionError> {
        match &self.destination {
            Some(dir) => ensure_destination(dir, group_id),
            None => Ok(()),
        }
    }

    /// Directory a revised `file` lands in.
    pub fn target_dir(&self, file: &Path) -> PathBuf {
        match &self.destination {
            Some(dir) => dir.clone(),
            None => file.parent().map(Path::to_path_buf).unwrap_or_default(),
        }
    }

    /// Move or copy `file` to `revised_name` in the target directory.
    pub fn place(&self, file: &Path, revised_name: &OsStr) -> Result<(Mode, PathBuf), RevisionError> {
        let result_path = self.target_dir(file).join(revised_name);
        place(self.mode, file, &result_path)?;
        Ok((self.mode, result_path))
    }
}

/// Group destination with glob normalization applied
///
/// A glob-expanded destination is file-shaped (`dist/js/app.js`); its last
/// segment is dropped to recover the directory.
pub fn destination_dir(group: &FileGroup) -> Option<PathBuf> {
    let dest = group.destination.as_ref()?;
    if !group.from_glob_expansion {
        return Some(dest.clone());
    }
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Some(parent.to_path_buf()),
        _ => Some(PathBuf::from(".")),
    }
}

/// Verify `dir` is a directory, creating it (and its ancestors) when missing
///
/// An existing non-directory is fatal for the group.
pub fn ensure_destination(dir: &Path, group_id: &str) -> Result<(), RevisionError> {
    match fs::metadata(dir) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(RevisionError::DestinationNotDirectory {
            path: dir.to_path_buf(),
            group: group_id.to_string(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(
                destination = %dir.display(),
                group = group_id,
                "Destination dir does not exist: creating"
            );
            fs::create_dir_all(dir).map_err(|source| RevisionError::CreateDestination {
                path: dir.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(RevisionError::CreateDestination {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Execute one placement: rename for Move, byte copy for Copy.
pub fn place(mode: Mode, from: &Path, to: &Path) -> Result<(), RevisionError> {
    let place_error = |source| RevisionError::Place {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    match mode {
        Mode::Move => fs::rename(from, to).map_err(place_error),
        Mode::Copy => {
            if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(place_error)?;
            }
            fs::copy(from, to).map(|_| ()).map_err(place_error)
        }
    }
}
