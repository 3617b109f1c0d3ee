//! Target discovery: expand configured glob patterns into file groups
//!
//! A target names a base directory (`cwd`), include/exclude patterns, an
//! optional destination, and whether to expand. Without expansion the whole
//! target is one group copied flat into `dest`. With expansion every match is
//! its own group whose destination mirrors the match's relative path, so the
//! placer recovers `dest/<relative dir>`.

use crate::error::ApiError;
use crate::types::FileGroup;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One configured revisioning target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Base directory the patterns are matched against (workspace-relative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Glob patterns; a leading `!` excludes
    #[serde(default)]
    pub src: Vec<String>,

    /// Destination directory; omitted means revision in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<PathBuf>,

    /// Mirror each match's relative directory under `dest`
    #[serde(default)]
    pub expand: bool,
}

impl TargetConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.src.is_empty() {
            return Err("src must list at least one pattern".to_string());
        }
        if self.src.iter().all(|p| p.starts_with('!')) {
            return Err("src has only exclude patterns".to_string());
        }
        build_globsets(&self.src).map(|_| ())
    }
}

struct Patterns {
    include: GlobSet,
    exclude: GlobSet,
}

impl Patterns {
    fn matches(&self, relative: &Path) -> bool {
        self.include.is_match(relative) && !self.exclude.is_match(relative)
    }
}

fn build_globsets(patterns: &[String]) -> Result<Patterns, String> {
    let mut include = GlobSetBuilder::new();
    let mut exclude = GlobSetBuilder::new();

    for raw in patterns {
        let (builder, pattern) = match raw.strip_prefix('!') {
            Some(rest) => (&mut exclude, rest),
            None => (&mut include, raw.as_str()),
        };
        let glob = GlobBuilder::new(pattern.trim())
            .literal_separator(true)
            .build()
            .map_err(|e| format!("Invalid glob pattern '{}': {}", raw, e))?;
        builder.add(glob);
    }

    Ok(Patterns {
        include: include
            .build()
            .map_err(|e| format!("Invalid glob set: {}", e))?,
        exclude: exclude
            .build()
            .map_err(|e| format!("Invalid glob set: {}", e))?,
    })
}

/// Expand `target` into file groups, sources in sorted walk order.
pub fn discover(
    name: &str,
    target: &TargetConfig,
    workspace_root: &Path,
) -> Result<Vec<FileGroup>, ApiError> {
    let patterns = build_globsets(&target.src)
        .map_err(|e| ApiError::Discovery(format!("Target '{}': {}", name, e)))?;

    let base = match &target.cwd {
        Some(cwd) => workspace_root.join(cwd),
        None => workspace_root.to_path_buf(),
    };
    let working_directory = target.cwd.as_ref().map(|_| base.clone());
    let dest = target.dest.as_ref().map(|d| workspace_root.join(d));

    let matches = walk_matches(&base, &patterns)
        .map_err(|e| ApiError::Discovery(format!("Target '{}': {}", name, e)))?;
    if matches.is_empty() {
        warn!(target = name, base = %base.display(), "No files matched");
    }
    debug!(target = name, matched = matches.len(), "Target expanded");

    let groups = match (&dest, target.expand) {
        (Some(dest), true) => matches
            .into_iter()
            .map(|relative| FileGroup {
                id: name.to_string(),
                sources: vec![base.join(&relative)],
                destination: Some(dest.join(&relative)),
                from_glob_expansion: true,
                working_directory: working_directory.clone(),
            })
            .collect(),
        _ => vec![FileGroup {
            id: name.to_string(),
            sources: matches.iter().map(|relative| base.join(relative)).collect(),
            destination: dest,
            from_glob_expansion: false,
            working_directory,
        }],
    };

    Ok(groups)
}

/// Relative paths under `base` matching `patterns`, sorted by path
///
/// Matching directories are included; the orchestrator skips them.
fn walk_matches(base: &Path, patterns: &Patterns) -> Result<Vec<PathBuf>, String> {
    if !base.exists() {
        return Err(format!("Base directory {} does not exist", base.display()));
    }

    let mut matches = Vec::new();
    for entry in WalkDir::new(base).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| format!("Failed to walk directory: {}", e))?;
        if entry.depth() == 0 {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(base)
            .map_err(|e| format!("Failed to relativize {}: {}", entry.path().display(), e))?;
        if patterns.matches(relative) {
            matches.push(relative.to_path_buf());
        }
    }
    Ok(matches)
}
