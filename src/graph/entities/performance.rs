use async_graphql::{ComplexObject, Context, Result, ResultExt, SimpleObject};
use serde::Deserialize;

use crate::graph::access::{Entity, Rows, Table};

use super::{
    Avatar, Session, UsdScene, User, PERFORMANCE_CAST, PERFORMANCE_MEMBERS, SCENE_PERFORMANCES,
};

/// A performance: owned by a user, staged across scenes with a cast of avatars
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Performance {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[graphql(skip)]
    pub owner_id: i64,
}

impl Table for Performance {
    const TABLE: &'static str = "performances";
}

impl Entity for Performance {
    const NAME: &'static str = "Performance";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl Performance {
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.owner_id))
            .await
            .extend()
    }

    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        Rows::from_ctx(ctx)?
            .traverse(PERFORMANCE_MEMBERS, self.id)
            .await
            .extend()
    }

    async fn usd_scenes(&self, ctx: &Context<'_>) -> Result<Vec<UsdScene>> {
        Rows::from_ctx(ctx)?
            .traverse(SCENE_PERFORMANCES.reversed(), self.id)
            .await
            .extend()
    }

    /// The performance cast
    async fn avatars(&self, ctx: &Context<'_>) -> Result<Vec<Avatar>> {
        Rows::from_ctx(ctx)?
            .traverse(PERFORMANCE_CAST, self.id)
            .await
            .extend()
    }

    async fn sessions(&self, ctx: &Context<'_>) -> Result<Vec<Session>> {
        Rows::from_ctx(ctx)?
            .reverse("performanceId", self.id)
            .await
            .extend()
    }
}
