//! Row access layer for vtheatre
//!
//! Two read primitives and one write primitive over a relational store:
//!
//! - `fetch_all`: every row matching a statement
//! - `fetch_one`: the first matching row, or `None`
//! - `execute`: a single insert, update or delete
//!
//! Each call wraps exactly one driver round-trip. Errors are never recovered
//! here; they propagate to the resolver that issued the call.
//!
//! `fetch_one` reports "no row" as `None` rather than an error. Callers that
//! require presence surface their own not-found condition, since an absent
//! optional relation is a legitimate result.

mod errors;
mod row;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use row::{decode, flag, Params, Row};
pub use sqlite::SqliteStore;

use async_trait::async_trait;

/// Outcome of a write statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOutcome {
    /// Number of rows inserted, updated or deleted
    pub rows_affected: usize,
    /// Rowid assigned by the most recent successful insert on the connection
    pub last_insert_id: i64,
}

/// Capability object through which every resolver reaches the store.
///
/// Implementations must be shareable across concurrently suspended
/// resolvers; ordering between sibling calls is not guaranteed.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Fetch every row produced by `sql`
    async fn fetch_all(&self, sql: &str, params: Params) -> StoreResult<Vec<Row>>;

    /// Fetch the first row produced by `sql`, `None` when there is none
    async fn fetch_one(&self, sql: &str, params: Params) -> StoreResult<Option<Row>>;

    /// Execute a single write statement
    async fn execute(&self, sql: &str, params: Params) -> StoreResult<WriteOutcome>;
}
