//! Merge rules: defaults, override order, conflict handling.

use crate::build::DEFAULT_MAX_CONCURRENT_GROUPS;
use crate::types::DEFAULT_LENGTH;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key; `targets` tables merge by
/// target name, so a workspace file can add targets to global ones.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("options.algorithm", "md5")?
        .set_default("options.length", DEFAULT_LENGTH as u64)?
        .set_default("options.drop_cwd", false)?
        .set_default("options.extensionless", "trim")?
        .set_default(
            "build.max_concurrent_groups",
            DEFAULT_MAX_CONCURRENT_GROUPS as u64,
        )
}
