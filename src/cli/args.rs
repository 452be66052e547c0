//! CLI argument definitions using clap
//!
//! Commands:
//! - strand serve [--config <path>] [--host <host>] [--port <port>]
//! - strand analyze <value>
//! - strand interpret <query>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// strand - deterministic string analysis service
#[derive(Parser, Debug)]
#[command(name = "strand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the analysis of a single string and exit
    Analyze {
        /// The string to analyze
        value: String,
    },

    /// Print the filters a natural-language query derives and exit
    Interpret {
        /// The free-text query
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
