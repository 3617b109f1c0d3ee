//! Revised file name synthesis: `stem.suffix.ext`

use crate::error::RevisionError;
use crate::revision::hasher;
use crate::types::{ExtensionlessName, RevisionOptions};
use std::ffi::OsString;
use std::path::Path;

const SEPARATOR: &str = ".";

/// First `length` characters of a hex digest (the whole digest if shorter).
pub fn suffix(digest_hex: &str, length: usize) -> &str {
    let end = length.min(digest_hex.len());
    &digest_hex[..end]
}

/// Insert `suffix` between the stem and the extension of `file`'s name
///
/// `app.js` becomes `app.<suffix>.js`; `archive.tar.gz` becomes
/// `archive.tar.<suffix>.gz`. A name without extension (or with an empty one,
/// like `notes.`) follows `policy`.
pub fn revised_name(file: &Path, suffix: &str, policy: ExtensionlessName) -> OsString {
    let mut name = file.file_stem().map(OsString::from).unwrap_or_default();
    name.push(SEPARATOR);
    name.push(suffix);

    match file.extension().filter(|ext| !ext.is_empty()) {
        Some(ext) => {
            name.push(SEPARATOR);
            name.push(ext);
        }
        None => {
            if policy == ExtensionlessName::TrailingDot {
                name.push(SEPARATOR);
            }
        }
    }

    name
}

/// Hash `file` and return its revised name
///
/// Content-deterministic: the same bytes always give the same suffix,
/// whatever the file is called.
pub fn name(file: &Path, options: &RevisionOptions) -> Result<OsString, RevisionError> {
    let digest = hasher::file_digest_hex(options.algorithm, file)?;
    Ok(revised_name(
        file,
        suffix(&digest, options.length),
        options.extensionless,
    ))
}
