use async_graphql::{ComplexObject, Context, Result, ResultExt, SimpleObject};
use serde::Deserialize;

use crate::graph::access::{Entity, Rows, Table};

use super::PropMotionData;

/// A scene prop with its own motion tracks
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Prop {
    pub id: i64,
    pub name: String,
    pub p_cloud_file_id: Option<i64>,
    pub file_url: Option<String>,
}

impl Table for Prop {
    const TABLE: &'static str = "props";
}

impl Entity for Prop {
    const NAME: &'static str = "Prop";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl Prop {
    async fn prop_motion_data(&self, ctx: &Context<'_>) -> Result<Vec<PropMotionData>> {
        Rows::from_ctx(ctx)?
            .reverse("propId", self.id)
            .await
            .extend()
    }
}
