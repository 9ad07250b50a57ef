//! CLI failures. Every one is fatal: `main` prints `CODE: message` and
//! exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database {} already exists", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("database {} not found, run 'vtheatre init' first", .0.display())]
    NotInitialized(PathBuf),

    #[error("{0} ({code})", code = .0.code())]
    Store(#[from] StoreError),

    #[error("{0}")]
    Boot(String),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "THEATRE_CLI_CONFIG_ERROR",
            Self::Input(_) | Self::Io(_) | Self::Json(_) => "THEATRE_CLI_IO_ERROR",
            Self::AlreadyInitialized(_) => "THEATRE_CLI_ALREADY_INITIALIZED",
            Self::NotInitialized(_) => "THEATRE_CLI_NOT_INITIALIZED",
            Self::Store(_) => "THEATRE_CLI_STORE_FAILED",
            Self::Boot(_) => "THEATRE_CLI_BOOT_FAILED",
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
