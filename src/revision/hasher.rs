//! Content digests for revision suffixes

use crate::error::RevisionError;
use crate::types::Algorithm;
use sha2::Digest;
use std::fs;
use std::path::Path;

/// Compute the lowercase hex digest of `content` under `algorithm`.
pub fn digest_hex(algorithm: Algorithm, content: &[u8]) -> String {
    match algorithm {
        Algorithm::Md5 => hex::encode(md5::Md5::digest(content)),
        Algorithm::Sha1 => hex::encode(sha1::Sha1::digest(content)),
        Algorithm::Sha256 => hex::encode(sha2::Sha256::digest(content)),
        Algorithm::Sha512 => hex::encode(sha2::Sha512::digest(content)),
        Algorithm::Blake3 => hex::encode(blake3::hash(content).as_bytes()),
    }
}

/// Read the full content of `path` and compute its hex digest.
///
/// A read failure aborts the enclosing group; there is no retry.
pub fn file_digest_hex(algorithm: Algorithm, path: &Path) -> Result<String, RevisionError> {
    let content = fs::read(path).map_err(|source| RevisionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(digest_hex(algorithm, &content))
}
