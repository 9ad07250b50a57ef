//! CLI command implementations
//!
//! Every command loads the JSON config first. `init` is the only command
//! that may create the database file; `serve` and `query` refuse to run
//! against a missing one.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::runtime::Runtime;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::graph::build_schema;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability;
use crate::store::SqliteStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_json};

/// Schema script applied by `init`
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (required)
    pub database_path: String,

    /// Log filter directive (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// HTTP transport settings (optional)
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.database_path.trim().is_empty() {
            return Err(CliError::Config("database_path must not be empty".into()));
        }

        EnvFilter::try_new(&self.log_level).map_err(|e| {
            CliError::Config(format!("invalid log_level '{}': {}", self.log_level, e))
        })?;

        if self.http.port == 0 {
            return Err(CliError::Config("http.port must be > 0".into()));
        }

        self.http
            .origins()
            .map_err(|e| CliError::Config(format!("http.cors_origins: {}", e)))?;

        Ok(())
    }

    pub fn database(&self) -> &Path {
        Path::new(&self.database_path)
    }

    fn open_existing(&self) -> CliResult<SqliteStore> {
        if !self.database().exists() {
            return Err(CliError::NotInitialized(self.database().to_path_buf()));
        }
        Ok(SqliteStore::open(self.database())?)
    }
}

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = Config::load(cli.command.config_path())?;
    observability::init_logging(&config.log_level)
        .map_err(|e| CliError::Config(e.to_string()))?;
    run_command(cli.command, &config)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command, config: &Config) -> CliResult<()> {
    match cmd {
        Command::Init { .. } => init(config),
        Command::Serve { port, .. } => serve(config, port),
        Command::Query { .. } => query(config),
    }
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::Boot(format!("failed to create tokio runtime: {}", e)))
}

/// Create the database file and apply the bundled schema
pub fn init(config: &Config) -> CliResult<()> {
    create_database(config)?;
    write_json(&json!({
        "initialized": true,
        "database": config.database_path,
    }))
}

fn create_database(config: &Config) -> CliResult<()> {
    create_database_with(config, SCHEMA_SQL)
}

/// A failed bootstrap removes the file again so a retry of `init` is not
/// refused as already initialized.
fn create_database_with(config: &Config, script: &str) -> CliResult<()> {
    let path = config.database();
    if path.exists() {
        return Err(CliError::AlreadyInitialized(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::Config(format!("failed to create directory {:?}: {}", parent, e))
        })?;
    }

    let applied = SqliteStore::open(path)
        .map_err(CliError::from)
        .and_then(|store| Ok(runtime()?.block_on(store.apply_script(script))?));

    if let Err(e) = applied {
        if let Err(remove) = fs::remove_file(path) {
            if remove.kind() != std::io::ErrorKind::NotFound {
                warn!(database = %config.database_path, error = %remove, "could not remove partial database");
            }
        }
        return Err(e);
    }

    info!(database = %config.database_path, "database initialized");
    Ok(())
}

/// Serve GraphQL over HTTP until the process is stopped
pub fn serve(config: &Config, port: Option<u16>) -> CliResult<()> {
    let store = config.open_existing()?;

    let mut http = config.http.clone();
    if let Some(port) = port {
        http.port = port;
    }
    let server = HttpServer::new(http, build_schema(Arc::new(store)))
        .map_err(|e| CliError::Config(format!("http.cors_origins: {}", e)))?;

    runtime()?.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })
}

/// Execute one request from stdin and print the response
pub fn query(config: &Config) -> CliResult<()> {
    let request = read_request()?;
    let response = execute_request(config, request)?;
    write_json(&response)
}

/// Execute a request against the configured database
pub fn execute_request(
    config: &Config,
    request: async_graphql::Request,
) -> CliResult<async_graphql::Response> {
    let store = config.open_existing()?;
    let schema = build_schema(Arc::new(store));
    Ok(runtime()?.block_on(schema.execute(request)))
}
