//! SQLite-backed row store
//!
//! rusqlite is a blocking driver. Every call is moved onto tokio's blocking
//! pool and awaited, so a resolver suspends until its statement completes.
//! The single connection is serialized behind a mutex.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params_from_iter, Connection};
use serde_json::{Number, Value};
use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::row::{Params, Row};
use super::{RowStore, WriteOutcome};

/// Row store over a single SQLite connection
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a database file
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Declared foreign keys are not enforced: deletes never cascade and
    /// never fail because a child row still points at the parent.
    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a multi-statement SQL script (schema and seed loading)
    pub async fn apply_script(&self, script: &str) -> StoreResult<()> {
        let script = script.to_owned();
        self.with_connection(move |conn| conn.execute_batch(&script))
            .await
    }

    async fn with_connection<T, F>(&self, f: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))?;
            f(&*guard).map_err(StoreError::from)
        })
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?
    }
}

#[async_trait]
impl RowStore for SqliteStore {
    async fn fetch_all(&self, sql: &str, params: Params) -> StoreResult<Vec<Row>> {
        debug!(sql = %sql, params = params.len(), "fetch_all");
        let sql = sql.to_owned();
        self.with_connection(move |conn| query_rows(conn, &sql, params, None))
            .await
    }

    async fn fetch_one(&self, sql: &str, params: Params) -> StoreResult<Option<Row>> {
        debug!(sql = %sql, params = params.len(), "fetch_one");
        let sql = sql.to_owned();
        let rows = self
            .with_connection(move |conn| query_rows(conn, &sql, params, Some(1)))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn execute(&self, sql: &str, params: Params) -> StoreResult<WriteOutcome> {
        debug!(sql = %sql, params = params.len(), "execute");
        let sql = sql.to_owned();
        self.with_connection(move |conn| {
            let rows_affected = conn.execute(&sql, params_from_iter(params.into_iter().map(to_sql)))?;
            Ok(WriteOutcome {
                rows_affected,
                last_insert_id: conn.last_insert_rowid(),
            })
        })
        .await
    }
}

fn query_rows(
    conn: &Connection,
    sql: &str,
    params: Params,
    limit: Option<usize>,
) -> rusqlite::Result<Vec<Row>> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let mut rows = stmt.query(params_from_iter(params.into_iter().map(to_sql)))?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut map = Row::new();
        for (i, name) in columns.iter().enumerate() {
            map.insert(name.clone(), from_sql(row.get_ref(i)?));
        }
        out.push(map);

        if limit.is_some_and(|l| out.len() >= l) {
            break;
        }
    }
    Ok(out)
}

fn to_sql(value: Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Real(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => SqlValue::Text(s),
        other => SqlValue::Text(other.to_string()),
    }
}

fn from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::from(b.to_vec()),
    }
}
