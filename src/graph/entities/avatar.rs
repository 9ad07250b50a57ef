use async_graphql::{ComplexObject, Context, Result, ResultExt, SimpleObject};
use serde::Deserialize;

use crate::graph::access::{Entity, Rows, Table};

use super::{AudioData, AvatarMotionData, FaceData, Performance, User, PERFORMANCE_CAST};

#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Avatar {
    pub id: i64,
    pub name: String,
    #[graphql(skip)]
    pub user_id: Option<i64>,
}

impl Table for Avatar {
    const TABLE: &'static str = "avatars";
}

impl Entity for Avatar {
    const NAME: &'static str = "Avatar";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl Avatar {
    /// Owning user, absent for unassigned avatars
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        Rows::from_ctx(ctx)?
            .forward(self.user_id)
            .await
            .extend()
    }

    async fn performances(&self, ctx: &Context<'_>) -> Result<Vec<Performance>> {
        Rows::from_ctx(ctx)?
            .traverse(PERFORMANCE_CAST.reversed(), self.id)
            .await
            .extend()
    }

    async fn avatar_motion_data(&self, ctx: &Context<'_>) -> Result<Vec<AvatarMotionData>> {
        Rows::from_ctx(ctx)?
            .reverse("avatarId", self.id)
            .await
            .extend()
    }

    async fn face_data(&self, ctx: &Context<'_>) -> Result<Vec<FaceData>> {
        Rows::from_ctx(ctx)?
            .reverse("avatarId", self.id)
            .await
            .extend()
    }

    async fn audio_data(&self, ctx: &Context<'_>) -> Result<Vec<AudioData>> {
        Rows::from_ctx(ctx)?
            .reverse("avatarId", self.id)
            .await
            .extend()
    }
}
