//! Per-session capture artifacts
//!
//! Every capture row belongs to exactly one session and, where the modality
//! has one, to exactly one avatar or prop. Transforms are stored per axis
//! and exposed as `Vector3`.

use async_graphql::{ComplexObject, Context, Result, ResultExt, SimpleObject};
use serde::Deserialize;

use crate::graph::access::{Entity, Rows, Table};

use super::{Avatar, Prop, Session, Vector3};

/// Motion capture track for one avatar
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct AvatarMotionData {
    pub id: i64,
    pub p_cloud_file_id: Option<i64>,
    pub file_url: Option<String>,
    #[graphql(skip)]
    pub session_id: i64,
    #[graphql(skip)]
    pub avatar_id: i64,
    #[graphql(skip)]
    pub initial_position_x: f64,
    #[graphql(skip)]
    pub initial_position_y: f64,
    #[graphql(skip)]
    pub initial_position_z: f64,
    #[graphql(skip)]
    pub initial_rotation_x: f64,
    #[graphql(skip)]
    pub initial_rotation_y: f64,
    #[graphql(skip)]
    pub initial_rotation_z: f64,
}

impl Table for AvatarMotionData {
    const TABLE: &'static str = "avatarMotionData";
}

impl Entity for AvatarMotionData {
    const NAME: &'static str = "AvatarMotionData";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl AvatarMotionData {
    async fn initial_position(&self) -> Vector3 {
        Vector3::new(
            self.initial_position_x,
            self.initial_position_y,
            self.initial_position_z,
        )
    }

    async fn initial_rotation(&self) -> Vector3 {
        Vector3::new(
            self.initial_rotation_x,
            self.initial_rotation_y,
            self.initial_rotation_z,
        )
    }

    async fn avatar(&self, ctx: &Context<'_>) -> Result<Option<Avatar>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.avatar_id))
            .await
            .extend()
    }

    async fn session(&self, ctx: &Context<'_>) -> Result<Option<Session>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.session_id))
            .await
            .extend()
    }
}

/// Facial capture track for one avatar
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct FaceData {
    pub id: i64,
    pub p_cloud_file_id: Option<i64>,
    pub file_url: Option<String>,
    #[graphql(skip)]
    pub session_id: i64,
    #[graphql(skip)]
    pub avatar_id: i64,
}

impl Table for FaceData {
    const TABLE: &'static str = "faceData";
}

impl Entity for FaceData {
    const NAME: &'static str = "FaceData";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl FaceData {
    async fn avatar(&self, ctx: &Context<'_>) -> Result<Option<Avatar>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.avatar_id))
            .await
            .extend()
    }

    async fn session(&self, ctx: &Context<'_>) -> Result<Option<Session>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.session_id))
            .await
            .extend()
    }
}

/// Audio track for one avatar
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct AudioData {
    pub id: i64,
    pub p_cloud_file_id: Option<i64>,
    pub file_url: Option<String>,
    #[graphql(skip)]
    pub session_id: i64,
    #[graphql(skip)]
    pub avatar_id: i64,
}

impl Table for AudioData {
    const TABLE: &'static str = "audioData";
}

impl Entity for AudioData {
    const NAME: &'static str = "AudioData";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl AudioData {
    async fn avatar(&self, ctx: &Context<'_>) -> Result<Option<Avatar>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.avatar_id))
            .await
            .extend()
    }

    async fn session(&self, ctx: &Context<'_>) -> Result<Option<Session>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.session_id))
            .await
            .extend()
    }
}

/// A scene light and its characteristics for one session
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct LightData {
    pub id: i64,
    pub light_id: Option<i64>,
    pub p_cloud_file_id: Option<i64>,
    pub file_url: Option<String>,
    pub light_type: Option<String>,
    /// Opaque JSON blob describing colour, intensity and the like
    pub light_characteristics_json: Option<String>,
    #[graphql(skip)]
    pub session_id: i64,
    #[graphql(skip)]
    pub position_x: f64,
    #[graphql(skip)]
    pub position_y: f64,
    #[graphql(skip)]
    pub position_z: f64,
}

impl Table for LightData {
    const TABLE: &'static str = "lightData";
}

impl Entity for LightData {
    const NAME: &'static str = "LightData";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl LightData {
    async fn position(&self) -> Vector3 {
        Vector3::new(self.position_x, self.position_y, self.position_z)
    }

    async fn session(&self, ctx: &Context<'_>) -> Result<Option<Session>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.session_id))
            .await
            .extend()
    }
}

/// Motion track for one prop
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct PropMotionData {
    pub id: i64,
    pub p_cloud_file_id: Option<i64>,
    pub file_url: Option<String>,
    #[graphql(skip)]
    pub session_id: i64,
    #[graphql(skip)]
    pub prop_id: i64,
    #[graphql(skip)]
    pub initial_position_x: f64,
    #[graphql(skip)]
    pub initial_position_y: f64,
    #[graphql(skip)]
    pub initial_position_z: f64,
    #[graphql(skip)]
    pub initial_rotation_x: f64,
    #[graphql(skip)]
    pub initial_rotation_y: f64,
    #[graphql(skip)]
    pub initial_rotation_z: f64,
}

impl Table for PropMotionData {
    const TABLE: &'static str = "propMotionData";
}

impl Entity for PropMotionData {
    const NAME: &'static str = "PropMotionData";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl PropMotionData {
    async fn initial_position(&self) -> Vector3 {
        Vector3::new(
            self.initial_position_x,
            self.initial_position_y,
            self.initial_position_z,
        )
    }

    async fn initial_rotation(&self) -> Vector3 {
        Vector3::new(
            self.initial_rotation_x,
            self.initial_rotation_y,
            self.initial_rotation_z,
        )
    }

    async fn prop(&self, ctx: &Context<'_>) -> Result<Option<Prop>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.prop_id))
            .await
            .extend()
    }

    async fn session(&self, ctx: &Context<'_>) -> Result<Option<Session>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.session_id))
            .await
            .extend()
    }
}
