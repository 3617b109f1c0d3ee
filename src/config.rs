//! Configuration System
//!
//! Layered configuration for revision options, build behavior, targets, and
//! logging. Sources are merged by [`ConfigLoader`]: defaults, the global file,
//! the workspace `filerev.toml`, then `FILEREV_*` environment variables.

use crate::build::DEFAULT_MAX_CONCURRENT_GROUPS;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::types::RevisionOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use crate::discovery::TargetConfig;
pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilerevConfig {
    /// Hashing and naming options shared by every target
    #[serde(default)]
    pub options: RevisionOptions,

    /// Build runner settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Named targets, processed in name order
    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Build runner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Groups processed at once; 1 runs them one after another
    #[serde(default = "default_max_concurrent_groups")]
    pub max_concurrent_groups: usize,

    /// Where to write the summary JSON after a run (workspace-relative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<PathBuf>,
}

fn default_max_concurrent_groups() -> usize {
    DEFAULT_MAX_CONCURRENT_GROUPS
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_concurrent_groups: default_max_concurrent_groups(),
            summary_file: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Options(String),
    Build(String),
    Target(String, String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Options(msg) => write!(f, "Options: {}", msg),
            ValidationError::Build(msg) => write!(f, "Build: {}", msg),
            ValidationError::Target(name, msg) => write!(f, "Target '{}': {}", name, msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FilerevConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.options.validate() {
            errors.push(ValidationError::Options(e.to_string()));
        }

        if self.build.max_concurrent_groups == 0 {
            errors.push(ValidationError::Build(
                "max_concurrent_groups must be at least 1".to_string(),
            ));
        }

        for (name, target) in &self.targets {
            if let Err(e) = target.validate() {
                errors.push(ValidationError::Target(name.clone(), e));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every problem into one error.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
            ApiError::ConfigError(joined.join("; "))
        })
    }

    /// Configuration written by `filerev init`
    pub fn starter() -> Self {
        let mut targets = BTreeMap::new();
        targets.insert(
            "assets".to_string(),
            TargetConfig {
                cwd: Some(PathBuf::from("dist")),
                src: vec!["**/*.js".to_string(), "**/*.css".to_string()],
                dest: None,
                expand: false,
            },
        );
        Self {
            options: RevisionOptions::default(),
            build: BuildConfig {
                summary_file: Some(PathBuf::from("dist/filerev.json")),
                ..Default::default()
            },
            targets,
            logging: LoggingConfig::default(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize configuration: {}", e)))
    }

    /// Write the starter configuration into `workspace_root`
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn write_starter(workspace_root: &Path, force: bool) -> Result<PathBuf, ApiError> {
        let path = workspace_config_path(workspace_root);
        if path.exists() && !force {
            return Err(ApiError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        fs::write(&path, Self::starter().to_toml_string()?)?;
        Ok(path)
    }
}
