//! Write statements and the read-back that follows them
//!
//! Every mutation performs exactly one write and then re-reads the affected
//! row by primary key. The two are separate store round-trips and are not
//! transactional, so a read-back can legitimately come back empty.

use async_graphql::MaybeUndefined;
use serde_json::Value;

use crate::graph::access::{Entity, Rows};
use crate::graph::errors::TheatreResult;
use crate::store::Params;

/// Column values for a single-row insert
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    columns: Vec<(&'static str, Value)>,
}

impl Insert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value<V: Into<Value>>(mut self, column: &'static str, value: V) -> Self {
        self.columns.push((column, value.into()));
        self
    }

    fn statement(&self, table: &str) -> (String, Params) {
        let names: Vec<&str> = self.columns.iter().map(|(c, _)| *c).collect();
        let slots: Vec<String> = (1..=self.columns.len()).map(|n| format!("?{}", n)).collect();
        let params = self.columns.iter().map(|(_, v)| v.clone()).collect();
        (
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                table,
                names.join(", "),
                slots.join(", ")
            ),
            params,
        )
    }
}

/// Columns touched by a partial update.
///
/// Only supplied fields are written; every other column keeps its value.
/// Non-nullable columns take `Option` (omitted or null both mean "keep").
/// Nullable columns take `MaybeUndefined`, so an explicit `null` clears the
/// column while an omitted field leaves it alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changeset {
    columns: Vec<(&'static str, Value)>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<V: Into<Value>>(mut self, column: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.columns.push((column, value.into()));
        }
        self
    }

    pub fn set_nullable<V: Into<Value>>(
        mut self,
        column: &'static str,
        value: MaybeUndefined<V>,
    ) -> Self {
        match value {
            MaybeUndefined::Undefined => {}
            MaybeUndefined::Null => self.columns.push((column, Value::Null)),
            MaybeUndefined::Value(value) => self.columns.push((column, value.into())),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn statement(&self, table: &str, id: i64) -> (String, Params) {
        let assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
            .collect();
        let mut params: Params = self.columns.iter().map(|(_, v)| v.clone()).collect();
        params.push(Value::from(id));
        (
            format!(
                "UPDATE {} SET {} WHERE id = ?{}",
                table,
                assignments.join(", "),
                params.len()
            ),
            params,
        )
    }
}

impl Rows {
    /// Insert one row and read it back by its new id
    pub async fn insert<T: Entity>(&self, insert: Insert) -> TheatreResult<Option<T>> {
        let (sql, params) = insert.statement(T::TABLE);
        let outcome = self.execute(&sql, params).await?;
        self.by_id(outcome.last_insert_id).await
    }

    /// Apply a changeset to row `id` and read it back.
    ///
    /// An empty changeset skips the write entirely.
    pub async fn update<T: Entity>(&self, id: i64, changes: Changeset) -> TheatreResult<Option<T>> {
        if !changes.is_empty() {
            let (sql, params) = changes.statement(T::TABLE, id);
            self.execute(&sql, params).await?;
        }
        self.by_id(id).await
    }

    /// Hard-delete `row`, handing it back to the caller. No cascade.
    pub async fn delete<T: Entity>(&self, row: T) -> TheatreResult<T> {
        self.execute(
            &format!("DELETE FROM {} WHERE id = ?1", T::TABLE),
            vec![Value::from(row.id())],
        )
        .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_statement() {
        let (sql, params) = Insert::new()
            .value("name", "Ada")
            .value("isAdmin", false)
            .statement("users");
        assert_eq!(sql, "INSERT INTO users (name, isAdmin) VALUES (?1, ?2)");
        assert_eq!(params, vec![json!("Ada"), json!(false)]);
    }

    #[test]
    fn test_changeset_skips_omitted_fields() {
        let changes = Changeset::new()
            .set("title", None::<String>)
            .set("ownerId", Some(3))
            .set_nullable("description", MaybeUndefined::<String>::Undefined);
        let (sql, params) = changes.statement("performances", 9);

        assert_eq!(sql, "UPDATE performances SET ownerId = ?1 WHERE id = ?2");
        assert_eq!(params, vec![json!(3), json!(9)]);
    }

    #[test]
    fn test_changeset_explicit_null_clears() {
        let changes = Changeset::new()
            .set_nullable("streamingUrl", MaybeUndefined::<String>::Null)
            .set_nullable("eosSessionId", MaybeUndefined::Value("eos-1".to_string()));
        let (sql, params) = changes.statement("sessions", 2);

        assert_eq!(
            sql,
            "UPDATE sessions SET streamingUrl = ?1, eosSessionId = ?2 WHERE id = ?3"
        );
        assert_eq!(params, vec![Value::Null, json!("eos-1"), json!(2)]);
    }

    #[test]
    fn test_empty_changeset() {
        assert!(Changeset::new().is_empty());
        assert!(Changeset::new().set("title", None::<String>).is_empty());
    }
}
