use async_graphql::{ComplexObject, Context, Result, ResultExt, SimpleObject};
use serde::Deserialize;

use crate::graph::access::{Entity, Rows, Table};
use crate::store::flag;

use super::{Avatar, Performance, Session, UsdScene, PERFORMANCE_MEMBERS, SESSION_ATTENDEES};

/// A user of the system
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// External identity id, empty when the user has none
    pub eos_id: String,
    pub user_role: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub is_admin: bool,
    #[serde(deserialize_with = "flag")]
    pub is_super_admin: bool,
}

impl Table for User {
    const TABLE: &'static str = "users";
}

impl Entity for User {
    const NAME: &'static str = "User";

    fn id(&self) -> i64 {
        self.id
    }
}

#[ComplexObject]
impl User {
    /// Performances owned by this user
    async fn performances(&self, ctx: &Context<'_>) -> Result<Vec<Performance>> {
        Rows::from_ctx(ctx)?
            .reverse("ownerId", self.id)
            .await
            .extend()
    }

    /// Performances this user is a member of
    async fn member_of(&self, ctx: &Context<'_>) -> Result<Vec<Performance>> {
        Rows::from_ctx(ctx)?
            .traverse(PERFORMANCE_MEMBERS.reversed(), self.id)
            .await
            .extend()
    }

    async fn avatars(&self, ctx: &Context<'_>) -> Result<Vec<Avatar>> {
        Rows::from_ctx(ctx)?
            .reverse("userId", self.id)
            .await
            .extend()
    }

    async fn usd_scenes(&self, ctx: &Context<'_>) -> Result<Vec<UsdScene>> {
        Rows::from_ctx(ctx)?
            .reverse("ownerId", self.id)
            .await
            .extend()
    }

    async fn sessions_owned(&self, ctx: &Context<'_>) -> Result<Vec<Session>> {
        Rows::from_ctx(ctx)?
            .reverse("ownerId", self.id)
            .await
            .extend()
    }

    async fn sessions_attending(&self, ctx: &Context<'_>) -> Result<Vec<Session>> {
        Rows::from_ctx(ctx)?
            .traverse(SESSION_ATTENDEES.reversed(), self.id)
            .await
            .extend()
    }
}
