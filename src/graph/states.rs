//! Session state name ↔ id indirection
//!
//! Sessions store only `sessionStateId`; the externally visible state name is
//! always read through the `sessionStates` table. No transition graph is
//! enforced here.

use serde_json::Value;

use super::access::{Entity, Rows};
use super::entities::SessionState;
use super::errors::{TheatreError, TheatreResult};

/// Resolve a state name to its id. An unknown name is fatal for the caller;
/// no default state is substituted.
pub async fn state_id_for_name(rows: &Rows, name: &str) -> TheatreResult<i64> {
    let state: Option<SessionState> = rows
        .select_one(
            "SELECT * FROM sessionStates WHERE name = ?1",
            vec![Value::from(name)],
        )
        .await?;

    state
        .map(|s| s.id)
        .ok_or_else(|| TheatreError::not_found(SessionState::NAME, format!("name={}", name)))
}

/// Resolve a state id to its name, `None` when the id dangles
pub async fn state_name_for_id(rows: &Rows, id: i64) -> TheatreResult<Option<String>> {
    Ok(rows.by_id::<SessionState>(id).await?.map(|s| s.name))
}
