//! CLI parse: clap types for filerev. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filerev - content-hash file revisioning for build output
#[derive(Parser)]
#[command(name = "filerev")]
#[command(about = "Rename or copy build assets to content-hashed names")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Revision configured targets (all of them when none are named)
    Run {
        /// Target names from the configuration
        targets: Vec<String>,
        /// Write the summary JSON here (overrides build.summary_file)
        #[arg(long)]
        summary: Option<PathBuf>,
        /// Groups processed at once (overrides build.max_concurrent_groups)
        #[arg(long)]
        jobs: Option<usize>,
        /// Seed the summary from the existing summary file before running
        #[arg(long)]
        merge: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Revision the given files as a single group
    Rev {
        /// Files to revision, processed in the given order
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Copy into this directory instead of renaming in place
        #[arg(long)]
        dest: Option<PathBuf>,
        #[command(flatten)]
        naming: NamingArgs,
        /// Trim the working directory from summary paths
        #[arg(long)]
        drop_cwd: bool,
        /// Working directory used by --drop-cwd
        #[arg(long)]
        cwd: Option<PathBuf>,
        /// Write the summary JSON here
        #[arg(long)]
        summary: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print revised names without touching any file
    Hash {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        naming: NamingArgs,
    },
    /// Write a starter filerev.toml into the workspace
    Init {
        /// Overwrite an existing filerev.toml
        #[arg(long)]
        force: bool,
    },
}

/// Naming overrides shared by `rev` and `hash`
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingArgs {
    /// Digest algorithm (md5, sha1, sha256, sha512, blake3)
    #[arg(long)]
    pub algorithm: Option<String>,
    /// Hex characters kept from the digest
    #[arg(long)]
    pub length: Option<usize>,
    /// Keep the trailing dot on extension-less names (`LICENSE.abcd1234.`)
    #[arg(long)]
    pub trailing_dot: bool,
}
