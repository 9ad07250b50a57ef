use async_graphql::{ComplexObject, Context, Result, ResultExt, SimpleObject};
use serde::Deserialize;

use crate::graph::access::{Entity, Rows, Table};
use crate::store::flag;

use super::{Performance, Session, User, SCENE_MEMBERS, SCENE_PERFORMANCES};

/// A USD scene file, linkable to any number of performances.
///
/// `pCloudFileId` is the external file id and doubles as an alternate key.
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct UsdScene {
    pub id: i64,
    pub p_cloud_file_id: Option<i64>,
    pub file_url: Option<String>,
    pub title: String,
    #[serde(deserialize_with = "flag")]
    pub template: bool,
    #[serde(deserialize_with = "flag")]
    pub public: bool,
    #[graphql(skip)]
    pub owner_id: i64,
}

impl Table for UsdScene {
    const TABLE: &'static str = "usdScenes";
}

impl Entity for UsdScene {
    const NAME: &'static str = "UsdScene";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl UsdScene {
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.owner_id))
            .await
            .extend()
    }

    async fn performances(&self, ctx: &Context<'_>) -> Result<Vec<Performance>> {
        Rows::from_ctx(ctx)?
            .traverse(SCENE_PERFORMANCES, self.id)
            .await
            .extend()
    }

    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        Rows::from_ctx(ctx)?
            .traverse(SCENE_MEMBERS, self.id)
            .await
            .extend()
    }

    /// Sessions staged in this scene
    async fn sessions(&self, ctx: &Context<'_>) -> Result<Vec<Session>> {
        Rows::from_ctx(ctx)?
            .reverse("usdSceneId", self.id)
            .await
            .extend()
    }
}
