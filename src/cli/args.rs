//! CLI argument definitions using clap
//!
//! Commands:
//! - vtheatre init --config <path>
//! - vtheatre serve --config <path> [--port <port>]
//! - vtheatre query --config <path>

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Virtual theatre GraphQL service
#[derive(Parser, Debug)]
#[command(name = "vtheatre")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and apply the bundled schema
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./vtheatre.json")]
        config: PathBuf,
    },

    /// Serve GraphQL over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./vtheatre.json")]
        config: PathBuf,

        /// Override the configured HTTP port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute one GraphQL request read from stdin and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./vtheatre.json")]
        config: PathBuf,
    },
}

impl Command {
    pub fn config_path(&self) -> &Path {
        match self {
            Command::Init { config } | Command::Serve { config, .. } | Command::Query { config } => {
                config.as_path()
            }
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
