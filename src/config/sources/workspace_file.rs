//! Workspace config file source: filerev.toml and filerev.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Name of the workspace configuration file.
pub const WORKSPACE_CONFIG_FILE: &str = "filerev.toml";

pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(WORKSPACE_CONFIG_FILE)
}

/// Add workspace config files to builder.
/// Precedence: filerev.toml (base) then filerev.{FILEREV_ENV}.toml when FILEREV_ENV is set.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let base_config_path = workspace_config_path(workspace_root);
    if base_config_path.is_file() {
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    if let Ok(env_name) = std::env::var("FILEREV_ENV") {
        let env_config_path = workspace_root.join(format!("filerev.{}.toml", env_name));
        if env_config_path.is_file() {
            builder = builder.add_source(File::from(env_config_path).required(false));
        }
    }

    Ok(builder)
}
