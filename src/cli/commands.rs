//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::analyzer::analyze;
use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::init_logging;
use crate::query::interpret;

use super::args::Command;
use super::errors::CliResult;

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
        Command::Analyze { value } => write_json(&mut io::stdout(), &analyze(&value)),
        Command::Interpret { query } => {
            let filters = interpret(&query)?;
            write_json(&mut io::stdout(), &filters)
        }
    }
}

/// Load the config file (or defaults) and apply flag overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    Ok(config)
}

/// Boot logging and run the HTTP server until shutdown
pub fn serve(config: ServerConfig) -> CliResult<()> {
    init_logging(&config.log_level, config.log_format)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::new(config).start())?;

    Ok(())
}

/// Write a value as pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
