//! Regression tests for extension-less file names
//!
//! Joining an empty extension historically produced `LICENSE.<hash>.`. The
//! default policy trims that trailing dot; `TrailingDot` keeps it for
//! consumers that depend on the old names.

use filerev::{ExtensionlessName, FileGroup, GroupOrchestrator, RevisionOptions, Summary};
use tempfile::TempDir;

use crate::integration::{md5_suffix, write_file};

fn revise_license(policy: ExtensionlessName) -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let source = write_file(temp_dir.path(), "LICENSE", "MIT");
    let orchestrator = GroupOrchestrator::new(RevisionOptions {
        extensionless: policy,
        ..Default::default()
    })
    .unwrap();

    let report = orchestrator
        .process_group(&FileGroup::in_place("docs", vec![source]), &Summary::new())
        .unwrap();
    let name = report.entries[0]
        .revised
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    (temp_dir, name)
}

#[test]
fn test_default_policy_trims_trailing_dot() {
    let (temp_dir, name) = revise_license(ExtensionlessName::default());
    assert_eq!(name, format!("LICENSE.{}", md5_suffix("MIT")));
    assert!(!name.ends_with('.'));
    assert!(temp_dir.path().join(&name).is_file());
}

#[test]
fn test_trailing_dot_policy_reproduces_historical_name() {
    let (temp_dir, name) = revise_license(ExtensionlessName::TrailingDot);
    assert_eq!(name, format!("LICENSE.{}.", md5_suffix("MIT")));
    assert!(temp_dir.path().join(&name).is_file());
}
