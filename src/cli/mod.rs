//! CLI module for strand
//!
//! Provides command-line interface for:
//! - serve: Boot logging and serve the HTTP API
//! - analyze: One-shot analysis of a string
//! - interpret: One-shot natural-language query interpretation

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{resolve_config, run_command, serve, write_json};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
