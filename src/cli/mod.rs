//! CLI module
//!
//! Provides command-line interface for:
//! - init: Create the database from the bundled schema
//! - serve: Serve GraphQL over HTTP
//! - query: One-shot request execution over stdin/stdout

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{execute_request, init, query, run, run_command, serve, Config, SCHEMA_SQL};
pub use errors::{CliError, CliResult};
pub use io::{parse_request, read_request, write_json};
