//! Association rows that are also root collections

use async_graphql::{ComplexObject, Context, Result, ResultExt, SimpleObject};
use serde::Deserialize;

use crate::graph::access::{Rows, Table};

use super::{Avatar, Session, User};

/// A user attending a session
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct UserAttendance {
    pub session_id: i64,
    pub user_id: i64,
}

impl Table for UserAttendance {
    const TABLE: &'static str = "userAttendance";
}

#[ComplexObject]
impl UserAttendance {
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.user_id))
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

/// An avatar cast in a session
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct SessionCast {
    pub session_id: i64,
    pub avatar_id: i64,
}

impl Table for SessionCast {
    const TABLE: &'static str = "sessionCast";
}

#[ComplexObject]
impl SessionCast {
    async fn session(&self, ctx: &Context<'_>) -> Result<Option<Session>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.session_id))
            .await
            .extend()
    }

    async fn avatar(&self, ctx: &Context<'_>) -> Result<Option<Avatar>> {
        Rows::from_ctx(ctx)?
            .forward(Some(self.avatar_id))
            .await
            .extend()
    }
}
