//! Typed access patterns over the row store
//!
//! Every relation in the graph is resolved with exactly one of three
//! patterns, each a single store call:
//!
//! 1. Forward foreign key: child row → parent row (`fetch_one` by id)
//! 2. Reverse foreign key: parent row → child rows (`fetch_all` by column)
//! 3. Join traversal: many-to-many through an association table
//!
//! Nothing here batches or caches. Sibling resolvers asking for the same
//! relation issue independent queries.

use std::fmt;
use std::sync::Arc;

use async_graphql::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::store::{decode, Params, RowStore, StoreResult, WriteOutcome};

use super::errors::{TheatreError, TheatreResult};

/// A row type backed by one table
pub trait Table: DeserializeOwned + Send + Sync + 'static {
    /// Table name in the store
    const TABLE: &'static str;
}

/// A table row with its own integer identity
pub trait Entity: Table {
    /// Type name used in error messages
    const NAME: &'static str;

    /// Primary key
    fn id(&self) -> i64;
}

/// One direction of a many-to-many association.
///
/// `from` is the join column matched against the current row's id, `to` is
/// the join column pointing at the rows being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub join: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

impl Hop {
    pub const fn new(join: &'static str, from: &'static str, to: &'static str) -> Self {
        Self { join, from, to }
    }

    /// The same association walked the other way
    pub const fn reversed(self) -> Self {
        Self {
            join: self.join,
            from: self.to,
            to: self.from,
        }
    }
}

/// Identifier-ambiguous single-row key.
///
/// The internal id takes precedence; otherwise the first non-null alternate
/// key is used. Everything collapses into one conditional predicate so the
/// lookup stays a single store call.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLookup {
    id: Option<i64>,
    alternates: Vec<(&'static str, Option<Value>)>,
}

impl KeyLookup {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            alternates: Vec::new(),
        }
    }

    /// Add an alternate key, consulted after the id and any earlier alternates
    pub fn or<V: Into<Value>>(mut self, column: &'static str, value: Option<V>) -> Self {
        self.alternates.push((column, value.map(Into::into)));
        self
    }

    /// Add a textual external id. Blank strings are the "no external id"
    /// placeholder shared by many rows, so they count as absent.
    pub fn or_external(self, column: &'static str, value: Option<String>) -> Self {
        self.or(column, value.filter(|v| !v.is_empty()))
    }

    /// True when neither the id nor any alternate was supplied
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.alternates.iter().all(|(_, v)| v.is_none())
    }

    /// `CASE WHEN ?1 IS NOT NULL THEN id = ?1 WHEN ?2 IS NOT NULL THEN ... ELSE 0 END`
    fn predicate(&self) -> (String, Params) {
        let mut sql = String::from("CASE WHEN ?1 IS NOT NULL THEN id = ?1");
        let mut params: Params = vec![self.id.map(Value::from).unwrap_or(Value::Null)];

        for (i, (column, value)) in self.alternates.iter().enumerate() {
            let n = i + 2;
            sql.push_str(&format!(" WHEN ?{n} IS NOT NULL THEN {column} = ?{n}"));
            params.push(value.clone().unwrap_or(Value::Null));
        }

        sql.push_str(" ELSE 0 END");
        (sql, params)
    }
}

impl fmt::Display for KeyLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.id {
            return write!(f, "id={}", id);
        }
        match self.alternates.iter().find(|(_, v)| v.is_some()) {
            Some((column, Some(value))) => write!(f, "{}={}", column, value),
            _ => write!(f, "no key"),
        }
    }
}

/// Store capability handed to every resolver through the schema data
#[derive(Clone)]
pub struct Rows {
    store: Arc<dyn RowStore>,
}

impl Rows {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    /// Borrow the capability registered on the schema
    pub fn from_ctx<'c>(ctx: &'c Context<'_>) -> async_graphql::Result<&'c Rows> {
        ctx.data::<Rows>()
    }

    pub async fn select<T: Table>(&self, sql: &str, params: Params) -> TheatreResult<Vec<T>> {
        let rows = self.store.fetch_all(sql, params).await?;
        let decoded = rows
            .into_iter()
            .map(|row| decode(T::TABLE, row))
            .collect::<StoreResult<Vec<T>>>()?;
        Ok(decoded)
    }

    pub async fn select_one<T: Table>(
        &self,
        sql: &str,
        params: Params,
    ) -> TheatreResult<Option<T>> {
        match self.store.fetch_one(sql, params).await? {
            Some(row) => Ok(Some(decode(T::TABLE, row)?)),
            None => Ok(None),
        }
    }

    pub async fn execute(&self, sql: &str, params: Params) -> TheatreResult<WriteOutcome> {
        Ok(self.store.execute(sql, params).await?)
    }

    /// Whole collection in the store's natural scan order
    pub async fn all<T: Table>(&self) -> TheatreResult<Vec<T>> {
        self.select(&format!("SELECT * FROM {}", T::TABLE), Vec::new())
            .await
    }

    pub async fn by_id<T: Entity>(&self, id: i64) -> TheatreResult<Option<T>> {
        self.select_one(
            &format!("SELECT * FROM {} WHERE id = ?1", T::TABLE),
            vec![Value::from(id)],
        )
        .await
    }

    /// Like `by_id`, but a missing row is a `NotFound` error
    pub async fn require<T: Entity>(&self, id: i64) -> TheatreResult<T> {
        self.by_id(id)
            .await?
            .ok_or_else(|| TheatreError::not_found(T::NAME, format!("id={}", id)))
    }

    /// Forward foreign key. A null key is absent without touching the store.
    pub async fn forward<T: Entity>(&self, key: Option<i64>) -> TheatreResult<Option<T>> {
        match key {
            Some(id) => self.by_id(id).await,
            None => Ok(None),
        }
    }

    /// Reverse foreign key: rows of `T` whose `column` holds `parent`
    pub async fn reverse<T: Table>(&self, column: &str, parent: i64) -> TheatreResult<Vec<T>> {
        self.select(
            &format!("SELECT * FROM {} WHERE {} = ?1", T::TABLE, column),
            vec![Value::from(parent)],
        )
        .await
    }

    /// Join traversal: rows of `T` associated with `parent` through `hop`
    pub async fn traverse<T: Entity>(&self, hop: Hop, parent: i64) -> TheatreResult<Vec<T>> {
        let sql = format!(
            "SELECT t.* FROM {table} t JOIN {join} j ON j.{to} = t.id WHERE j.{from} = ?1",
            table = T::TABLE,
            join = hop.join,
            to = hop.to,
            from = hop.from,
        );
        self.select(&sql, vec![Value::from(parent)]).await
    }

    /// Dual-key lookup. No key at all simply matches nothing.
    pub async fn lookup<T: Entity>(&self, key: &KeyLookup) -> TheatreResult<Option<T>> {
        if key.is_empty() {
            return Ok(None);
        }
        let (predicate, params) = key.predicate();
        self.select_one(
            &format!("SELECT * FROM {} WHERE {}", T::TABLE, predicate),
            params,
        )
        .await
    }

    /// Dual-key lookup for a mutation target: no key and no match are errors
    pub async fn locate<T: Entity>(&self, key: &KeyLookup) -> TheatreResult<T> {
        if key.is_empty() {
            return Err(TheatreError::missing_key(T::NAME));
        }
        self.lookup(key)
            .await?
            .ok_or_else(|| TheatreError::not_found(T::NAME, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hop_reversal() {
        let hop = Hop::new("scenesPerformances", "performanceId", "sceneId");
        let back = hop.reversed();
        assert_eq!(back.from, "sceneId");
        assert_eq!(back.to, "performanceId");
        assert_eq!(back.reversed(), hop);
    }

    #[test]
    fn test_predicate_orders_alternates_after_id() {
        let key = KeyLookup::new(Some(5))
            .or("eosId", None::<String>)
            .or("email", Some("a@b.c"));
        let (sql, params) = key.predicate();

        assert_eq!(
            sql,
            "CASE WHEN ?1 IS NOT NULL THEN id = ?1 \
             WHEN ?2 IS NOT NULL THEN eosId = ?2 \
             WHEN ?3 IS NOT NULL THEN email = ?3 ELSE 0 END"
        );
        assert_eq!(params, vec![json!(5), Value::Null, json!("a@b.c")]);
    }

    #[test]
    fn test_empty_key() {
        assert!(KeyLookup::new(None).or("pCloudFileId", None::<i64>).is_empty());
        assert!(!KeyLookup::new(None).or("pCloudFileId", Some(900)).is_empty());
    }

    #[test]
    fn test_blank_external_id_is_no_key() {
        assert!(KeyLookup::new(None).or_external("eosId", Some(String::new())).is_empty());

        let key = KeyLookup::new(None).or_external("eosId", Some("eos-1".to_string()));
        assert!(!key.is_empty());
        assert_eq!(key.to_string(), "eosId=\"eos-1\"");
    }

    #[test]
    fn test_key_display_prefers_id() {
        let both = KeyLookup::new(Some(5)).or("pCloudFileId", Some(1));
        assert_eq!(both.to_string(), "id=5");

        let alternate = KeyLookup::new(None).or("pCloudFileId", Some(900));
        assert_eq!(alternate.to_string(), "pCloudFileId=900");

        assert_eq!(KeyLookup::new(None).to_string(), "no key");
    }
}
