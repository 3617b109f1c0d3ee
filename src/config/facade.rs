//! ConfigLoader: single entry point that layers every configuration source.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::FilerevConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`FilerevConfig`] from defaults, files, and environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace
    ///
    /// Precedence (lowest to highest): defaults, global config file, workspace
    /// `filerev.toml`, `filerev.{FILEREV_ENV}.toml`, `FILEREV_*` environment.
    pub fn load(workspace_root: &Path) -> Result<FilerevConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: FilerevConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            targets = config.targets.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from an explicit file, skipping global and workspace files.
    pub fn load_from_file(path: &Path) -> Result<FilerevConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        Ok(builder.build()?.try_deserialize()?)
    }
}
