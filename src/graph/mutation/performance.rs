use async_graphql::{Context, InputObject, MaybeUndefined, Object, Result};
use tracing::info;

use crate::graph::access::{KeyLookup, Rows};
use crate::graph::entities::Performance;
use crate::graph::errors::TheatreResult;

use super::logged;
use super::write::{Changeset, Insert};

#[derive(Debug, Clone, InputObject)]
pub struct CreatePerformanceInput {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdatePerformanceInput {
    pub title: Option<String>,
    pub description: MaybeUndefined<String>,
    pub owner_id: Option<i64>,
}

pub async fn create_performance(
    rows: &Rows,
    data: CreatePerformanceInput,
) -> TheatreResult<Option<Performance>> {
    let insert = Insert::new()
        .value("title", data.title)
        .value("description", data.description)
        .value("ownerId", data.owner_id);

    let performance: Option<Performance> = rows.insert(insert).await?;
    info!(performance = ?performance.as_ref().map(|p| p.id), "performance created");
    Ok(performance)
}

pub async fn update_performance(
    rows: &Rows,
    id: i64,
    data: UpdatePerformanceInput,
) -> TheatreResult<Option<Performance>> {
    let performance: Performance = rows.locate(&KeyLookup::new(Some(id))).await?;
    let changes = Changeset::new()
        .set("title", data.title)
        .set_nullable("description", data.description)
        .set("ownerId", data.owner_id);

    let updated = rows.update(performance.id, changes).await?;
    info!(performance = id, "performance updated");
    Ok(updated)
}

/// Sessions referencing the performance are left in place
pub async fn delete_performance(rows: &Rows, id: i64) -> TheatreResult<Performance> {
    let performance: Performance = rows.locate(&KeyLookup::new(Some(id))).await?;
    let deleted = rows.delete(performance).await?;
    info!(performance = id, "performance deleted");
    Ok(deleted)
}

#[derive(Default)]
pub struct PerformanceMutation;

#[Object]
impl PerformanceMutation {
    async fn create_performance(
        &self,
        ctx: &Context<'_>,
        data: CreatePerformanceInput,
    ) -> Result<Option<Performance>> {
        logged(
            "createPerformance",
            create_performance(Rows::from_ctx(ctx)?, data).await,
        )
    }

    async fn update_performance(
        &self,
        ctx: &Context<'_>,
        id: i64,
        data: UpdatePerformanceInput,
    ) -> Result<Option<Performance>> {
        logged(
            "updatePerformance",
            update_performance(Rows::from_ctx(ctx)?, id, data).await,
        )
    }

    async fn delete_performance(&self, ctx: &Context<'_>, id: i64) -> Result<Performance> {
        logged(
            "deletePerformance",
            delete_performance(Rows::from_ctx(ctx)?, id).await,
        )
    }
}
