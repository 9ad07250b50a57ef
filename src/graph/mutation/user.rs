use async_graphql::{Context, InputObject, MaybeUndefined, Object, Result};
use tracing::info;

use crate::graph::access::{KeyLookup, Rows};
use crate::graph::entities::User;
use crate::graph::errors::TheatreResult;

use super::logged;
use super::write::{Changeset, Insert};

#[derive(Debug, Clone, InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    /// Defaults to an empty string
    pub eos_id: Option<String>,
    pub user_role: Option<String>,
    /// Defaults to false
    pub is_admin: Option<bool>,
    /// Defaults to false
    pub is_super_admin: Option<bool>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub eos_id: Option<String>,
    pub user_role: MaybeUndefined<String>,
    pub is_admin: Option<bool>,
    pub is_super_admin: Option<bool>,
}

/// Target a user by id or by external identity id
#[derive(Debug, Clone, Default, InputObject)]
pub struct UserWhere {
    pub id: Option<i64>,
    pub eos_id: Option<String>,
}

impl UserWhere {
    /// An empty `eosId` is the "no external identity" default and never
    /// identifies a user.
    pub fn key(self) -> KeyLookup {
        KeyLookup::new(self.id).or_external("eosId", self.eos_id)
    }
}

pub async fn create_user(rows: &Rows, data: CreateUserInput) -> TheatreResult<Option<User>> {
    let insert = Insert::new()
        .value("eosId", data.eos_id.unwrap_or_default())
        .value("name", data.name)
        .value("email", data.email)
        .value("userRole", data.user_role)
        .value("isAdmin", data.is_admin.unwrap_or(false))
        .value("isSuperAdmin", data.is_super_admin.unwrap_or(false));

    let user: Option<User> = rows.insert(insert).await?;
    info!(user = ?user.as_ref().map(|u| u.id), "user created");
    Ok(user)
}

pub async fn update_user(
    rows: &Rows,
    target: KeyLookup,
    data: UpdateUserInput,
) -> TheatreResult<Option<User>> {
    let user: User = rows.locate(&target).await?;
    let changes = Changeset::new()
        .set("name", data.name)
        .set("email", data.email)
        .set("eosId", data.eos_id)
        .set_nullable("userRole", data.user_role)
        .set("isAdmin", data.is_admin)
        .set("isSuperAdmin", data.is_super_admin);

    let updated = rows.update(user.id, changes).await?;
    info!(user = user.id, "user updated");
    Ok(updated)
}

pub async fn delete_user(rows: &Rows, target: KeyLookup) -> TheatreResult<User> {
    let user: User = rows.locate(&target).await?;
    let deleted = rows.delete(user).await?;
    info!(user = deleted.id, "user deleted");
    Ok(deleted)
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserInput) -> Result<Option<User>> {
        logged("createUser", create_user(Rows::from_ctx(ctx)?, data).await)
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] target: UserWhere,
        data: UpdateUserInput,
    ) -> Result<Option<User>> {
        logged(
            "updateUser",
            update_user(Rows::from_ctx(ctx)?, target.key(), data).await,
        )
    }

    async fn delete_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] target: UserWhere,
    ) -> Result<User> {
        logged("deleteUser", delete_user(Rows::from_ctx(ctx)?, target.key()).await)
    }
}
