//! CLI route: single route table and run context. Dispatches to the engine and presentation.

use crate::build::{BuildReport, BuildRunner};
use crate::cli::help::command_name;
use crate::cli::parse::{Commands, NamingArgs};
use crate::cli::presentation::{
    format_build_report_json, format_build_report_text, format_hash_rows,
};
use crate::config::{ConfigLoader, FilerevConfig};
use crate::discovery;
use crate::error::ApiError;
use crate::orchestrator::GroupOrchestrator;
use crate::revision::namer;
use crate::summary::Summary;
use crate::types::{ExtensionlessName, FileGroup, RevisionOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace, merged configuration, and the build summary
///
/// The summary lives as long as the context, so several commands executed
/// through one context accumulate into the same mapping.
pub struct RunContext {
    workspace_root: PathBuf,
    config: FilerevConfig,
    summary: Arc<Summary>,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::with_config(workspace_root, config)
    }

    /// Create run context from an already merged configuration.
    pub fn with_config(workspace_root: PathBuf, config: FilerevConfig) -> Result<Self, ApiError> {
        config.ensure_valid()?;
        Ok(Self {
            workspace_root,
            config,
            summary: Arc::new(Summary::new()),
        })
    }

    pub fn config(&self) -> &FilerevConfig {
        &self.config
    }

    pub fn summary(&self) -> Arc<Summary> {
        Arc::clone(&self.summary)
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Run {
                targets,
                summary,
                jobs,
                merge,
                format,
            } => self.handle_run(targets, summary.as_deref(), *jobs, *merge, format),
            Commands::Rev {
                files,
                dest,
                naming,
                drop_cwd,
                cwd,
                summary,
                format,
            } => {
                let mut options = apply_naming(&self.config.options, naming)?;
                options.drop_cwd |= *drop_cwd;
                let group = FileGroup {
                    id: "rev".to_string(),
                    sources: files.clone(),
                    destination: dest.clone(),
                    from_glob_expansion: false,
                    working_directory: cwd.clone(),
                };
                let report = self.run_groups(options, vec![group], None)?;
                if let Some(path) = summary {
                    self.summary.write_json(path)?;
                }
                self.render(&report, format)
            }
            Commands::Hash { files, naming } => {
                let options = apply_naming(&self.config.options, naming)?;
                options.validate()?;
                let mut rows = Vec::with_capacity(files.len());
                for file in files {
                    let name = namer::name(file, &options)?;
                    rows.push((
                        file.display().to_string(),
                        name.to_string_lossy().into_owned(),
                    ));
                }
                Ok(format_hash_rows(&rows))
            }
            Commands::Init { force } => {
                let path = FilerevConfig::write_starter(&self.workspace_root, *force)?;
                Ok(format!("Wrote {}", path.display()))
            }
        }
    }

    fn handle_run(
        &self,
        names: &[String],
        summary_override: Option<&Path>,
        jobs: Option<usize>,
        merge: bool,
        format: &str,
    ) -> Result<String, ApiError> {
        if self.config.targets.is_empty() {
            return Err(ApiError::ConfigError(
                "No targets configured. Run `filerev init` to create filerev.toml.".to_string(),
            ));
        }

        let selected: Vec<&String> = if names.is_empty() {
            self.config.targets.keys().collect()
        } else {
            names.iter().collect()
        };

        let mut groups = Vec::new();
        for name in selected {
            let target = self
                .config
                .targets
                .get(name)
                .ok_or_else(|| ApiError::TargetNotFound(name.clone()))?;
            groups.extend(discovery::discover(name, target, &self.workspace_root)?);
        }

        let summary_path = summary_override.map(Path::to_path_buf).or_else(|| {
            self.config
                .build
                .summary_file
                .as_ref()
                .map(|p| self.workspace_root.join(p))
        });

        if merge {
            match &summary_path {
                Some(path) if path.is_file() => {
                    let prior = Summary::load_json(path)?;
                    debug!(path = %path.display(), entries = prior.len(), "Seeding summary");
                    self.summary.extend(&prior);
                }
                Some(path) => {
                    debug!(path = %path.display(), "No summary file to merge yet");
                }
                None => {
                    return Err(ApiError::ConfigError(
                        "--merge needs a summary file (--summary or build.summary_file)"
                            .to_string(),
                    ));
                }
            }
        }

        let report = self.run_groups(self.config.options.clone(), groups, jobs)?;

        if let Some(path) = summary_path {
            self.summary.write_json(&path)?;
            info!(path = %path.display(), entries = self.summary.len(), "Summary written");
        }

        self.render(&report, format)
    }

    fn run_groups(
        &self,
        options: RevisionOptions,
        groups: Vec<FileGroup>,
        jobs: Option<usize>,
    ) -> Result<BuildReport, ApiError> {
        let orchestrator = GroupOrchestrator::new(options)?;
        let runner = BuildRunner::new(orchestrator)
            .with_max_concurrent_groups(jobs.unwrap_or(self.config.build.max_concurrent_groups));
        Ok(runner.run_blocking(groups, Arc::clone(&self.summary))?)
    }

    fn render(&self, report: &BuildReport, format: &str) -> Result<String, ApiError> {
        match format {
            "json" => format_build_report_json(report, &self.summary),
            "text" => Ok(format_build_report_text(
                report,
                &self.summary,
                std::io::stdout().is_terminal(),
            )),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

/// Layer CLI naming flags over configured options.
fn apply_naming(base: &RevisionOptions, naming: &NamingArgs) -> Result<RevisionOptions, ApiError> {
    let mut options = base.clone();
    if let Some(ref algorithm) = naming.algorithm {
        options.algorithm = algorithm.parse()?;
    }
    if let Some(length) = naming.length {
        options.length = length;
    }
    if naming.trailing_dot {
        options.extensionless = ExtensionlessName::TrailingDot;
    }
    Ok(options)
}
