//! JSON I/O handling for CLI
//!
//! - Input: one GraphQL request object on stdin (`query`, optional
//!   `variables` and `operationName`), may span several lines
//! - Output: one JSON object on stdout, newline terminated

use std::io::{self, Read, Write};

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Parse a GraphQL request document
pub fn parse_request(input: &str) -> CliResult<async_graphql::Request> {
    if input.trim().is_empty() {
        return Err(CliError::Input("empty request".into()));
    }
    Ok(serde_json::from_str(input)?)
}

/// Read a GraphQL request from stdin
pub fn read_request() -> CliResult<async_graphql::Request> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_request(&input)
}

/// Write one JSON value followed by a newline
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write one JSON value to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    write_json_to(&mut io::stdout().lock(), value)
}
