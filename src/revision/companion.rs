//! Companion artifacts (source maps) revisioned in lockstep with their primary file

use crate::error::RevisionError;
use crate::revision::placer;
use crate::types::{Mode, RevisionEntry};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extensions whose files may carry a companion map.
pub const COMPANION_EXTENSIONS: &[&str] = &["js", "css"];

/// Marker appended to a path to name its companion.
pub const COMPANION_SUFFIX: &str = ".map";

/// True when `file`'s extension may have a companion.
pub fn is_companion_eligible(file: &Path) -> bool {
    file.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPANION_EXTENSIONS.contains(&ext))
}

/// `path` with the companion marker appended (`app.js` -> `app.js.map`).
pub fn companion_path(path: &Path) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(COMPANION_SUFFIX);
    PathBuf::from(raw)
}

/// Revision the companion of `file`, if it has one
///
/// The companion gets the same placement as its primary and lands next to
/// `revised_path` under the same marker. Returns the companion's entry, or
/// `None` when the extension is not eligible or no companion exists.
pub fn resolve_companion(
    file: &Path,
    revised_path: &Path,
    mode: Mode,
) -> Result<Option<RevisionEntry>, RevisionError> {
    if !is_companion_eligible(file) {
        return Ok(None);
    }

    let original = companion_path(file);
    if !original.is_file() {
        return Ok(None);
    }

    let revised = companion_path(revised_path);
    placer::place(mode, &original, &revised)?;
    Ok(Some(RevisionEntry::new(original, revised)))
}
