//! Query root
//!
//! Collections return every row in natural scan order, with no pagination
//! or filtering. Single-row lookups map "no such row" to `null`.

use async_graphql::{Context, Object, Result, ResultExt};

use super::access::{KeyLookup, Rows};
use super::entities::{
    AudioData, Avatar, AvatarMotionData, FaceData, LightData, Performance, Prop, PropMotionData,
    Session, SessionCast, SessionState, UsdScene, User, UserAttendance,
};
use super::states;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn user_by_id(&self, ctx: &Context<'_>, id: i64) -> Result<Option<User>> {
        Rows::from_ctx(ctx)?.by_id(id).await.extend()
    }

    /// Locate a user by id, external identity id or email, in that order of
    /// precedence
    async fn user(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
        eos_id: Option<String>,
        email: Option<String>,
    ) -> Result<Option<User>> {
        let key = KeyLookup::new(id)
            .or_external("eosId", eos_id)
            .or("email", email);
        Rows::from_ctx(ctx)?.lookup(&key).await.extend()
    }

    async fn user_attendances(&self, ctx: &Context<'_>) -> Result<Vec<UserAttendance>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn usd_scenes(&self, ctx: &Context<'_>) -> Result<Vec<UsdScene>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn scene_by_id(&self, ctx: &Context<'_>, id: i64) -> Result<Option<UsdScene>> {
        Rows::from_ctx(ctx)?.by_id(id).await.extend()
    }

    /// Locate a scene by id or by external file id; the id wins when both
    /// are given
    async fn usd_scene(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
        p_cloud_file_id: Option<i64>,
    ) -> Result<Option<UsdScene>> {
        let key = KeyLookup::new(id).or("pCloudFileId", p_cloud_file_id);
        Rows::from_ctx(ctx)?.lookup(&key).await.extend()
    }

    async fn performances(&self, ctx: &Context<'_>) -> Result<Vec<Performance>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn performance_by_id(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Performance>> {
        Rows::from_ctx(ctx)?.by_id(id).await.extend()
    }

    async fn avatars(&self, ctx: &Context<'_>) -> Result<Vec<Avatar>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn avatar_by_id(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Avatar>> {
        Rows::from_ctx(ctx)?.by_id(id).await.extend()
    }

    async fn props(&self, ctx: &Context<'_>) -> Result<Vec<Prop>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn prop_by_id(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Prop>> {
        Rows::from_ctx(ctx)?.by_id(id).await.extend()
    }

    async fn sessions(&self, ctx: &Context<'_>) -> Result<Vec<Session>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn session_by_id(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Session>> {
        Rows::from_ctx(ctx)?.by_id(id).await.extend()
    }

    async fn session(
        &self,
        ctx: &Context<'_>,
        id: Option<i64>,
        eos_session_id: Option<String>,
    ) -> Result<Option<Session>> {
        let key = KeyLookup::new(id).or_external("eosSessionId", eos_session_id);
        Rows::from_ctx(ctx)?.lookup(&key).await.extend()
    }

    /// Sessions in the named state. An unknown state name is an error, not
    /// an empty list.
    async fn session_by_state(&self, ctx: &Context<'_>, state: String) -> Result<Vec<Session>> {
        let rows = Rows::from_ctx(ctx)?;
        let state_id = states::state_id_for_name(rows, &state).await.extend()?;
        rows.reverse("sessionStateId", state_id).await.extend()
    }

    async fn session_states(&self, ctx: &Context<'_>) -> Result<Vec<SessionState>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn session_casts(&self, ctx: &Context<'_>) -> Result<Vec<SessionCast>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn avatar_motion_data(&self, ctx: &Context<'_>) -> Result<Vec<AvatarMotionData>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn face_data(&self, ctx: &Context<'_>) -> Result<Vec<FaceData>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn light_data(&self, ctx: &Context<'_>) -> Result<Vec<LightData>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn audio_data(&self, ctx: &Context<'_>) -> Result<Vec<AudioData>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }

    async fn prop_motion_data(&self, ctx: &Context<'_>) -> Result<Vec<PropMotionData>> {
        Rows::from_ctx(ctx)?.all().await.extend()
    }
}
