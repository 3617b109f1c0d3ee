//! Hasher Implementation Verification Tests
//!
//! The suffix must be exactly the leading hex characters of the digest each
//! algorithm's reference crate produces.

use filerev::revision::{hasher, namer};
use filerev::{Algorithm, RevisionOptions};
use sha2::Digest;
use tempfile::TempDir;

use crate::integration::write_file;

#[test]
fn test_md5_matches_reference_crate() {
    let content = b"test content";
    let reference = hex::encode(md5::Md5::digest(content));
    assert_eq!(hasher::digest_hex(Algorithm::Md5, content), reference);
}

#[test]
fn test_sha512_matches_reference_crate() {
    let content = b"test content";
    let reference = hex::encode(sha2::Sha512::digest(content));
    assert_eq!(hasher::digest_hex(Algorithm::Sha512, content), reference);
}

#[test]
fn test_blake3_matches_reference_crate() {
    let content = b"test content";
    let reference = blake3::hash(content).to_hex().to_string();
    assert_eq!(hasher::digest_hex(Algorithm::Blake3, content), reference);
}

#[test]
fn test_suffix_is_digest_prefix_for_every_algorithm() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(temp_dir.path(), "bundle.js", "let a = 1;");

    for algorithm in [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha512,
        Algorithm::Blake3,
    ] {
        let options = RevisionOptions {
            algorithm,
            length: 10,
            ..Default::default()
        };
        let name = namer::name(&file, &options).unwrap();
        let digest = hasher::digest_hex(algorithm, b"let a = 1;");
        assert_eq!(
            name.to_string_lossy(),
            format!("bundle.{}.js", &digest[..10]),
            "algorithm {}",
            algorithm
        );
    }
}

#[test]
fn test_length_beyond_digest_uses_whole_digest() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_file(temp_dir.path(), "a.css", "a");
    let options = RevisionOptions {
        length: 100,
        ..Default::default()
    };
    let name = namer::name(&file, &options).unwrap();
    let digest = hasher::digest_hex(Algorithm::Md5, b"a");
    assert_eq!(name.to_string_lossy(), format!("a.{}.css", digest));
}
