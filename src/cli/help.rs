//! CLI help and command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Command name string used in log records (e.g. "run", "hash").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Run { .. } => "run",
        Commands::Rev { .. } => "rev",
        Commands::Hash { .. } => "hash",
        Commands::Init { .. } => "init",
    }
}
