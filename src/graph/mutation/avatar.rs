use async_graphql::{Context, InputObject, MaybeUndefined, Object, Result};
use tracing::info;

use crate::graph::access::{KeyLookup, Rows};
use crate::graph::entities::Avatar;
use crate::graph::errors::TheatreResult;

use super::logged;
use super::write::{Changeset, Insert};

#[derive(Debug, Clone, InputObject)]
pub struct CreateAvatarInput {
    pub name: String,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateAvatarInput {
    pub name: Option<String>,
    /// `null` unassigns the avatar from its user
    pub user_id: MaybeUndefined<i64>,
}

pub async fn create_avatar(rows: &Rows, data: CreateAvatarInput) -> TheatreResult<Option<Avatar>> {
    let insert = Insert::new()
        .value("name", data.name)
        .value("userId", data.user_id);

    let avatar: Option<Avatar> = rows.insert(insert).await?;
    info!(avatar = ?avatar.as_ref().map(|a| a.id), "avatar created");
    Ok(avatar)
}

pub async fn update_avatar(
    rows: &Rows,
    id: i64,
    data: UpdateAvatarInput,
) -> TheatreResult<Option<Avatar>> {
    let avatar: Avatar = rows.locate(&KeyLookup::new(Some(id))).await?;
    let changes = Changeset::new()
        .set("name", data.name)
        .set_nullable("userId", data.user_id);

    let updated = rows.update(avatar.id, changes).await?;
    info!(avatar = id, "avatar updated");
    Ok(updated)
}

pub async fn delete_avatar(rows: &Rows, id: i64) -> TheatreResult<Avatar> {
    let avatar: Avatar = rows.locate(&KeyLookup::new(Some(id))).await?;
    let deleted = rows.delete(avatar).await?;
    info!(avatar = id, "avatar deleted");
    Ok(deleted)
}

#[derive(Default)]
pub struct AvatarMutation;

#[Object]
impl AvatarMutation {
    async fn create_avatar(
        &self,
        ctx: &Context<'_>,
        data: CreateAvatarInput,
    ) -> Result<Option<Avatar>> {
        logged("createAvatar", create_avatar(Rows::from_ctx(ctx)?, data).await)
    }

    async fn update_avatar(
        &self,
        ctx: &Context<'_>,
        id: i64,
        data: UpdateAvatarInput,
    ) -> Result<Option<Avatar>> {
        logged(
            "updateAvatar",
            update_avatar(Rows::from_ctx(ctx)?, id, data).await,
        )
    }

    async fn delete_avatar(&self, ctx: &Context<'_>, id: i64) -> Result<Avatar> {
        logged("deleteAvatar", delete_avatar(Rows::from_ctx(ctx)?, id).await)
    }
}
