//! Drop-cwd trimming of summary keys and values

use filerev::revision::path::drop_cwd;
use filerev::{FileGroup, GroupOrchestrator, RevisionOptions, Summary};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::integration::{md5_suffix, summary_form, write_file};

fn run(drop: bool, cwd: Option<&Path>, root: &Path) -> Summary {
    let source = write_file(root, "dist/js/app.js", "app");
    let mut group = FileGroup::in_place("js", vec![source]);
    if let Some(cwd) = cwd {
        group = group.with_working_directory(cwd);
    }
    let orchestrator = GroupOrchestrator::new(RevisionOptions {
        drop_cwd: drop,
        ..Default::default()
    })
    .unwrap();
    let summary = Summary::new();
    orchestrator.process_group(&group, &summary).unwrap();
    summary
}

#[test]
fn test_trims_working_directory_from_both_sides() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let summary = run(true, Some(&root.join("dist")), root);

    let revised = format!("app.{}.js", md5_suffix("app"));
    assert_eq!(
        summary.get(&summary_form(&["js", "app.js"])),
        Some(summary_form(&["js", &revised]))
    );
}

#[test]
fn test_disabled_keeps_full_paths() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let summary = run(false, Some(&root.join("dist")), root);

    let key = root.join("dist/js/app.js").to_string_lossy().into_owned();
    assert!(summary.get(&key).is_some());
}

#[test]
fn test_enabled_without_working_directory_keeps_full_paths() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let summary = run(true, None, root);

    let key = root.join("dist/js/app.js").to_string_lossy().into_owned();
    assert!(summary.get(&key).is_some());
}

#[cfg(unix)]
#[test]
fn test_trim_laws_on_absolute_paths() {
    assert_eq!(
        drop_cwd(Path::new("/a/b/c/d.js"), Path::new("/a/b")),
        PathBuf::from("c/d.js")
    );
    assert_eq!(
        drop_cwd(Path::new("/x/y.js"), Path::new("/a/b")),
        PathBuf::from("/x/y.js")
    );
}
