use async_graphql::{Context, InputObject, MaybeUndefined, Object, Result};
use tracing::info;

use crate::graph::access::{KeyLookup, Rows};
use crate::graph::entities::{Session, SessionState};
use crate::graph::errors::TheatreResult;
use crate::graph::states;

use super::logged;
use super::write::{Changeset, Insert};

/// State given to new sessions when none is requested
pub const DEFAULT_SESSION_STATE: &str = "inactive";

#[derive(Debug, Clone, InputObject)]
pub struct CreateSessionInput {
    pub title: String,
    pub owner_id: i64,
    pub performance_id: i64,
    pub usd_scene_id: Option<i64>,
    /// State name, defaults to `inactive`
    pub state: Option<String>,
    pub eos_session_id: Option<String>,
    pub streaming_url: Option<String>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateSessionInput {
    pub title: Option<String>,
    pub owner_id: Option<i64>,
    pub performance_id: Option<i64>,
    pub usd_scene_id: MaybeUndefined<i64>,
    pub eos_session_id: MaybeUndefined<String>,
    pub streaming_url: MaybeUndefined<String>,
    /// State name; resolved to its id before writing
    pub state: Option<String>,
}

/// Target a session by id or by external session id
#[derive(Debug, Clone, Default, InputObject)]
pub struct SessionWhere {
    pub id: Option<i64>,
    pub eos_session_id: Option<String>,
}

impl SessionWhere {
    pub fn key(self) -> KeyLookup {
        KeyLookup::new(self.id).or_external("eosSessionId", self.eos_session_id)
    }
}

pub async fn create_session(
    rows: &Rows,
    data: CreateSessionInput,
) -> TheatreResult<Option<Session>> {
    let state_name = data
        .state
        .unwrap_or_else(|| DEFAULT_SESSION_STATE.to_string());
    let state_id = states::state_id_for_name(rows, &state_name).await?;

    let insert = Insert::new()
        .value("eosSessionId", data.eos_session_id)
        .value("title", data.title)
        .value("ownerId", data.owner_id)
        .value("performanceId", data.performance_id)
        .value("usdSceneId", data.usd_scene_id)
        .value("sessionStateId", state_id)
        .value("streamingUrl", data.streaming_url);

    let session: Option<Session> = rows.insert(insert).await?;
    info!(
        session = ?session.as_ref().map(|s| s.id),
        state = %state_name,
        "session created"
    );
    Ok(session)
}

pub async fn update_session(
    rows: &Rows,
    target: KeyLookup,
    data: UpdateSessionInput,
) -> TheatreResult<Option<Session>> {
    let session: Session = rows.locate(&target).await?;
    let state_id = match &data.state {
        Some(name) => Some(states::state_id_for_name(rows, name).await?),
        None => None,
    };

    let changes = Changeset::new()
        .set("title", data.title)
        .set("ownerId", data.owner_id)
        .set("performanceId", data.performance_id)
        .set_nullable("usdSceneId", data.usd_scene_id)
        .set_nullable("eosSessionId", data.eos_session_id)
        .set_nullable("streamingUrl", data.streaming_url)
        .set("sessionStateId", state_id);

    let updated = rows.update(session.id, changes).await?;
    info!(session = session.id, "session updated");
    Ok(updated)
}

pub async fn delete_session(rows: &Rows, target: KeyLookup) -> TheatreResult<Session> {
    let session: Session = rows.locate(&target).await?;
    let deleted = rows.delete(session).await?;
    info!(session = deleted.id, "session deleted");
    Ok(deleted)
}

/// Move a session into the named state. Any state may follow any other.
pub async fn set_session_state(
    rows: &Rows,
    target: KeyLookup,
    state: &str,
) -> TheatreResult<Option<Session>> {
    let session: Session = rows.locate(&target).await?;
    let state_id = states::state_id_for_name(rows, state).await?;

    let updated = rows
        .update(
            session.id,
            Changeset::new().set("sessionStateId", Some(state_id)),
        )
        .await?;
    info!(session = session.id, state, "session state changed");
    Ok(updated)
}

pub async fn create_session_state(
    rows: &Rows,
    name: String,
) -> TheatreResult<Option<SessionState>> {
    let state: Option<SessionState> = rows.insert(Insert::new().value("name", name)).await?;
    info!(state = ?state.as_ref().map(|s| s.id), "session state created");
    Ok(state)
}

pub async fn rename_session_state(
    rows: &Rows,
    id: i64,
    name: String,
) -> TheatreResult<Option<SessionState>> {
    let state: SessionState = rows.require(id).await?;
    let updated = rows
        .update(state.id, Changeset::new().set("name", Some(name)))
        .await?;
    info!(state = id, "session state renamed");
    Ok(updated)
}

/// Delete a state row. Sessions still pointing at it keep the dangling id
/// and report no state.
pub async fn delete_session_state(rows: &Rows, id: i64) -> TheatreResult<SessionState> {
    let state: SessionState = rows.require(id).await?;
    let deleted = rows.delete(state).await?;
    info!(state = id, name = %deleted.name, "session state deleted");
    Ok(deleted)
}

#[derive(Default)]
pub struct SessionMutation;

#[Object]
impl SessionMutation {
    async fn create_session(
        &self,
        ctx: &Context<'_>,
        data: CreateSessionInput,
    ) -> Result<Option<Session>> {
        logged(
            "createSession",
            create_session(Rows::from_ctx(ctx)?, data).await,
        )
    }

    async fn update_session(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] target: SessionWhere,
        data: UpdateSessionInput,
    ) -> Result<Option<Session>> {
        logged(
            "updateSession",
            update_session(Rows::from_ctx(ctx)?, target.key(), data).await,
        )
    }

    async fn delete_session(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] target: SessionWhere,
    ) -> Result<Session> {
        logged(
            "deleteSession",
            delete_session(Rows::from_ctx(ctx)?, target.key()).await,
        )
    }

    async fn set_session_state(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] target: SessionWhere,
        state: String,
    ) -> Result<Option<Session>> {
        logged(
            "setSessionState",
            set_session_state(Rows::from_ctx(ctx)?, target.key(), &state).await,
        )
    }

    async fn create_session_state(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> Result<Option<SessionState>> {
        logged(
            "createSessionState",
            create_session_state(Rows::from_ctx(ctx)?, name).await,
        )
    }

    async fn rename_session_state(
        &self,
        ctx: &Context<'_>,
        id: i64,
        name: String,
    ) -> Result<Option<SessionState>> {
        logged(
            "renameSessionState",
            rename_session_state(Rows::from_ctx(ctx)?, id, name).await,
        )
    }

    async fn delete_session_state(&self, ctx: &Context<'_>, id: i64) -> Result<SessionState> {
        logged(
            "deleteSessionState",
            delete_session_state(Rows::from_ctx(ctx)?, id).await,
        )
    }
}
