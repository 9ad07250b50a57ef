//! Row representation shared by every store implementation
//!
//! A row is a column-name → JSON value map. Entities decode from it with
//! serde, so column names must match the entity's serde field names.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::errors::{StoreError, StoreResult};

/// A single fetched row keyed by column name
pub type Row = Map<String, Value>;

/// Positional statement parameters (`?1`, `?2`, ...)
pub type Params = Vec<Value>;

/// Decode a row into an entity of `table`
pub fn decode<T: DeserializeOwned>(table: &'static str, row: Row) -> StoreResult<T> {
    serde_json::from_value(Value::Object(row)).map_err(|source| StoreError::Decode { table, source })
}

/// Deserialize a boolean column.
///
/// SQLite has no boolean storage class; flags come back as integers.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Null => Ok(false),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(i != 0),
            None => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        },
        other => Err(D::Error::custom(format!(
            "expected a boolean flag, found {}",
            other
        ))),
    }
}
