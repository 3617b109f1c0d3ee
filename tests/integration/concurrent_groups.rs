//! Concurrent group runs sharing one summary

use filerev::{BuildRunner, FileGroup, GroupOrchestrator, RevisionOptions, Summary};
use std::sync::Arc;
use tempfile::TempDir;

use crate::integration::write_file;

fn runner(max: usize) -> BuildRunner {
    BuildRunner::new(GroupOrchestrator::new(RevisionOptions::default()).unwrap())
        .with_max_concurrent_groups(max)
}

#[test]
fn test_many_groups_share_one_summary() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let groups: Vec<FileGroup> = (0..16)
        .map(|g| {
            let sources = (0..5)
                .map(|f| {
                    write_file(
                        root,
                        &format!("g{}/f{}.js", g, f),
                        &format!("group {} file {}", g, f),
                    )
                })
                .collect();
            FileGroup::in_place(format!("g{}", g), sources)
                .with_destination(root.join("build").join(format!("g{}", g)))
        })
        .collect();

    let summary = Arc::new(Summary::new());
    let report = runner(4).run_blocking(groups, Arc::clone(&summary)).unwrap();

    assert_eq!(report.groups.len(), 16);
    assert_eq!(report.total_revised(), 80);
    assert_eq!(summary.len(), 80);
}

#[test]
fn test_summary_reused_across_builds() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let summary = Arc::new(Summary::new());

    let first = write_file(root, "a.js", "a");
    runner(2)
        .run_blocking(vec![FileGroup::in_place("a", vec![first])], Arc::clone(&summary))
        .unwrap();

    let second = write_file(root, "b.css", "b");
    runner(2)
        .run_blocking(vec![FileGroup::in_place("b", vec![second])], Arc::clone(&summary))
        .unwrap();

    assert_eq!(summary.len(), 2);
}

#[test]
fn test_fatal_group_leaves_earlier_groups_revised() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let early = write_file(root, "early.js", "early");
    let bad = write_file(root, "bad.js", "bad");
    let blocker = write_file(root, "blocked", "not a dir");
    let late = write_file(root, "late.js", "late");

    let groups = vec![
        FileGroup::in_place("early", vec![early.clone()]),
        FileGroup::in_place("bad", vec![bad.clone()]).with_destination(&blocker),
        FileGroup::in_place("late", vec![late.clone()]),
    ];

    let summary = Arc::new(Summary::new());
    let err = runner(1).run_blocking(groups, Arc::clone(&summary)).unwrap_err();

    assert!(err.is_destination_conflict());
    // no rollback: the earlier group's move stands
    assert!(!early.exists());
    assert_eq!(summary.len(), 1);
    assert!(bad.exists());
    assert!(late.exists());
}

#[test]
fn test_concurrent_failure_leaves_later_groups_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let slow: Vec<_> = (0..3000)
        .map(|i| write_file(root, &format!("slow/f{}.css", i), &format!("slow {}", i)))
        .collect();
    let blocker = write_file(root, "blocker", "not a dir");
    let bad = write_file(root, "bad.js", "bad");
    let late1 = write_file(root, "late1.js", "late 1");
    let late2 = write_file(root, "late2.js", "late 2");

    let groups = vec![
        FileGroup::in_place("slow", slow),
        FileGroup::in_place("bad", vec![bad.clone()]).with_destination(&blocker),
        FileGroup::in_place("late1", vec![late1.clone()]),
        FileGroup::in_place("late2", vec![late2.clone()]),
    ];

    let summary = Arc::new(Summary::new());
    let err = runner(2).run_blocking(groups, Arc::clone(&summary)).unwrap_err();

    assert!(err.is_destination_conflict());
    assert!(bad.exists());
    assert!(late1.exists(), "late1 must not start after bad failed");
    assert!(late2.exists(), "late2 must not start after bad failed");

    let settled = summary.len();
    assert_eq!(settled, 3000);
    std::thread::sleep(std::time::Duration::from_millis(100));
    assert_eq!(summary.len(), settled, "summary must be stable once run returns");
}
