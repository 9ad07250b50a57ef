//! Resolution-layer error types
//!
//! Error codes:
//! - THEATRE_STORE_FAILED (underlying read/write failure, never retried)
//! - THEATRE_NOT_FOUND (a required single-row lookup matched nothing)
//! - THEATRE_MISSING_KEY (a dual-key mutation received neither key)
//!
//! A legitimately absent optional relation is not an error and never
//! produces one of these.

use std::fmt::Display;

use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for resolvers and mutation handlers
pub type TheatreResult<T> = Result<T, TheatreError>;

/// Errors surfaced to the query-execution engine
#[derive(Debug, Error)]
pub enum TheatreError {
    /// Read or write failure from the row access layer
    #[error("{0}")]
    Store(#[from] StoreError),

    /// A lookup that requires a row found none
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A dual-key operation was given no key at all
    #[error("{entity} lookup requires an id or an alternate key")]
    AmbiguousOrMissingKey { entity: &'static str },
}

impl TheatreError {
    /// Create a not-found error for `entity` identified by `key`
    pub fn not_found(entity: &'static str, key: impl Display) -> Self {
        TheatreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Create a missing-key error for `entity`
    pub fn missing_key(entity: &'static str) -> Self {
        TheatreError::AmbiguousOrMissingKey { entity }
    }

    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            TheatreError::Store(_) => "THEATRE_STORE_FAILED",
            TheatreError::NotFound { .. } => "THEATRE_NOT_FOUND",
            TheatreError::AmbiguousOrMissingKey { .. } => "THEATRE_MISSING_KEY",
        }
    }

    /// Returns whether this is a business "no such row" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, TheatreError::NotFound { .. })
    }
}

impl ErrorExtensions for TheatreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.code());
            if let TheatreError::Store(inner) = self {
                ext.set("cause", inner.code());
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TheatreError::not_found("Session", 4).code(),
            "THEATRE_NOT_FOUND"
        );
        assert_eq!(
            TheatreError::missing_key("User").code(),
            "THEATRE_MISSING_KEY"
        );
        assert_eq!(
            TheatreError::from(StoreError::Unavailable("gone".into())).code(),
            "THEATRE_STORE_FAILED"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = TheatreError::not_found("SessionState", "name=ended");
        assert_eq!(err.to_string(), "SessionState not found: name=ended");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_extension_carries_code() {
        let err = TheatreError::missing_key("UsdScene").extend();
        let ext = serde_json::to_value(err.extensions.expect("extensions set")).unwrap();
        assert_eq!(ext["code"], "THEATRE_MISSING_KEY");
    }
}
