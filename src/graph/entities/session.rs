use async_graphql::{ComplexObject, Context, Result, ResultExt, SimpleObject};
use serde::Deserialize;

use crate::graph::access::{Entity, Rows, Table};
use crate::graph::states;

use super::{
    AudioData, Avatar, AvatarMotionData, FaceData, LightData, Performance, PropMotionData,
    UsdScene, User, SESSION_ATTENDEES, SESSION_CAST,
};

/// A live or recorded run of a performance.
///
/// The lifecycle state is stored as `sessionStateId` only; the `state` field
/// always dereferences it through `sessionStates`.
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Session {
    pub id: i64,
    pub eos_session_id: Option<String>,
    pub title: String,
    pub streaming_url: Option<String>,
    #[graphql(skip)]
    pub owner_id: i64,
    #[graphql(skip)]
    pub performance_id: i64,
    #[graphql(skip)]
    pub usd_scene_id: Option<i64>,
    #[graphql(skip)]
    pub session_state_id: i64,
}

impl Table for Session {
    const TABLE: &'static str = "sessions";
}

impl Entity for Session {
    const NAME: &'static str = "Session";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl Session {
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.owner_id))
            .await
            .extend()
    }

    /// Absent when the performance has since been deleted
    async fn performance(&self, ctx: &Context<'_>) -> Result<Option<Performance>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.performance_id))
            .await
            .extend()
    }

    async fn usd_scene(&self, ctx: &Context<'_>) -> Result<Option<UsdScene>> {
        Rows::from_ctx(ctx)?
            .forward(self.usd_scene_id)
            .await
            .extend()
    }

    /// Lifecycle state name
    async fn state(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        states::state_name_for_id(Rows::from_ctx(ctx)?, self.session_state_id)
            .await
            .extend()
    }

    async fn motion_data(&self, ctx: &Context<'_>) -> Result<Vec<AvatarMotionData>> {
        Rows::from_ctx(ctx)?
            .reverse("sessionId", self.id)
            .await
            .extend()
    }

    async fn face_data(&self, ctx: &Context<'_>) -> Result<Vec<FaceData>> {
        Rows::from_ctx(ctx)?
            .reverse("sessionId", self.id)
            .await
            .extend()
    }

    async fn light_data(&self, ctx: &Context<'_>) -> Result<Vec<LightData>> {
        Rows::from_ctx(ctx)?
            .reverse("sessionId", self.id)
            .await
            .extend()
    }

    async fn audio_data(&self, ctx: &Context<'_>) -> Result<Vec<AudioData>> {
        Rows::from_ctx(ctx)?
            .reverse("sessionId", self.id)
            .await
            .extend()
    }

    async fn prop_motion_data(&self, ctx: &Context<'_>) -> Result<Vec<PropMotionData>> {
        Rows::from_ctx(ctx)?
            .reverse("sessionId", self.id)
            .await
            .extend()
    }

    async fn attendees(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        Rows::from_ctx(ctx)?
            .traverse(SESSION_ATTENDEES, self.id)
            .await
            .extend()
    }

    async fn cast(&self, ctx: &Context<'_>) -> Result<Vec<Avatar>> {
        Rows::from_ctx(ctx)?
            .traverse(SESSION_CAST, self.id)
            .await
            .extend()
    }
}

/// Named lifecycle state. Names are unique.
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct SessionState {
    pub id: i64,
    pub name: String,
}

impl Table for SessionState {
    const TABLE: &'static str = "sessionStates";
}

impl Entity for SessionState {
    const NAME: &'static str = "SessionState";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl SessionState {
    /// Sessions currently in this state
    async fn sessions(&self, ctx: &Context<'_>) -> Result<Vec<Session>> {
        Rows::from_ctx(ctx)?
            .reverse("sessionStateId", self.id)
            .await
            .extend()
    }
}
