//! CLI domain: parse, route, help, output, and presentation only.
//! No engine logic; the single route table dispatches to the build runner.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{exit_code, map_error};
pub use parse::{Cli, Commands, NamingArgs};
pub use presentation::{
    format_build_report_json, format_build_report_text, format_hash_rows, format_notice,
};
pub use route::RunContext;
