//! Lexical path normalization and working-directory trimming

use std::path::{Component, Path, PathBuf};

/// Normalize a path without touching the filesystem
///
/// This function:
/// 1. Drops `.` segments and repeated separators
/// 2. Folds `..` into the preceding normal segment (kept when nothing precedes it)
/// 3. Rebuilds the path with the platform separator
///
/// An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Normalized path as a string with platform separators.
pub fn normalize_path_string(path: &Path) -> String {
    normalize_path(path).to_string_lossy().into_owned()
}

/// Trim the segments `path` shares with `cwd`
///
/// Both paths are normalized and split into segments; the longest run of
/// leading segments equal position-by-position is dropped from `path`. A
/// match made only of the root (or drive prefix) is not a match, so paths
/// outside `cwd` are returned unchanged, and `cwd` itself trims to `.`.
pub fn drop_cwd(path: &Path, cwd: &Path) -> PathBuf {
    let path = normalize_path(path);
    let cwd = normalize_path(cwd);
    if cwd == Path::new(".") {
        return path;
    }

    let segments: Vec<Component<'_>> = path.components().collect();
    let cwd_segments: Vec<Component<'_>> = cwd.components().collect();

    let matched = segments
        .iter()
        .zip(cwd_segments.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let shares_named_segment = segments[..matched]
        .iter()
        .any(|c| matches!(c, Component::Normal(_)));
    if !shares_named_segment {
        return path;
    }

    let rest: PathBuf = segments[matched..].iter().collect();
    if rest.as_os_str().is_empty() {
        return PathBuf::from(".");
    }
    rest
}
