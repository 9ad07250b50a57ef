//! Store error types
//!
//! Error codes:
//! - THEATRE_STORE_QUERY (driver rejected or failed a statement)
//! - THEATRE_STORE_DECODE (row could not be mapped onto an entity)
//! - THEATRE_STORE_UNAVAILABLE (connection could not be reached)

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by the row access layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed statement or constraint violation reported by the driver
    #[error("store query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// A fetched row did not match the shape of the requested entity
    #[error("failed to decode {table} row: {source}")]
    Decode {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The connection is gone (poisoned lock or lost worker)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Query(_) => "THEATRE_STORE_QUERY",
            StoreError::Decode { .. } => "THEATRE_STORE_DECODE",
            StoreError::Unavailable(_) => "THEATRE_STORE_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = StoreError::Unavailable("lock poisoned".to_string());
        assert_eq!(err.code(), "THEATRE_STORE_UNAVAILABLE");

        let err = StoreError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.code(), "THEATRE_STORE_QUERY");
    }

    #[test]
    fn test_decode_display_names_table() {
        let source = serde_json::from_str::<i64>("\"x\"").unwrap_err();
        let err = StoreError::Decode {
            table: "users",
            source,
        };
        assert!(err.to_string().contains("users"));
    }
}
