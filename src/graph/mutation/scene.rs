use async_graphql::{Context, InputObject, MaybeUndefined, Object, Result};
use serde_json::Value;
use tracing::info;

use crate::graph::access::{KeyLookup, Rows};
use crate::graph::entities::{Performance, UsdScene, SCENE_PERFORMANCES};
use crate::graph::errors::{TheatreError, TheatreResult};

use super::logged;
use super::write::{Changeset, Insert};

#[derive(Debug, Clone, InputObject)]
pub struct CreateUsdSceneInput {
    pub title: String,
    pub owner_id: i64,
    pub p_cloud_file_id: Option<i64>,
    pub file_url: Option<String>,
    /// Defaults to false
    pub template: Option<bool>,
    /// Defaults to false
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateUsdSceneInput {
    pub title: Option<String>,
    pub owner_id: Option<i64>,
    pub p_cloud_file_id: MaybeUndefined<i64>,
    pub file_url: MaybeUndefined<String>,
    pub template: Option<bool>,
    pub public: Option<bool>,
}

/// Target a scene by id or by external file id
#[derive(Debug, Clone, Default, InputObject)]
pub struct UsdSceneWhere {
    pub id: Option<i64>,
    pub p_cloud_file_id: Option<i64>,
}

impl UsdSceneWhere {
    pub fn key(self) -> KeyLookup {
        KeyLookup::new(self.id).or("pCloudFileId", self.p_cloud_file_id)
    }
}

pub async fn create_usd_scene(
    rows: &Rows,
    data: CreateUsdSceneInput,
) -> TheatreResult<Option<UsdScene>> {
    let insert = Insert::new()
        .value("title", data.title)
        .value("ownerId", data.owner_id)
        .value("pCloudFileId", data.p_cloud_file_id)
        .value("fileUrl", data.file_url)
        .value("template", data.template.unwrap_or(false))
        .value("public", data.public.unwrap_or(false));

    let scene: Option<UsdScene> = rows.insert(insert).await?;
    info!(scene = ?scene.as_ref().map(|s| s.id), "scene created");
    Ok(scene)
}

pub async fn update_usd_scene(
    rows: &Rows,
    target: KeyLookup,
    data: UpdateUsdSceneInput,
) -> TheatreResult<Option<UsdScene>> {
    let scene: UsdScene = rows.locate(&target).await?;
    let changes = Changeset::new()
        .set("title", data.title)
        .set("ownerId", data.owner_id)
        .set_nullable("pCloudFileId", data.p_cloud_file_id)
        .set_nullable("fileUrl", data.file_url)
        .set("template", data.template)
        .set("public", data.public);

    let updated = rows.update(scene.id, changes).await?;
    info!(scene = scene.id, "scene updated");
    Ok(updated)
}

pub async fn delete_usd_scene(rows: &Rows, target: KeyLookup) -> TheatreResult<UsdScene> {
    let scene: UsdScene = rows.locate(&target).await?;
    let deleted = rows.delete(scene).await?;
    info!(scene = deleted.id, "scene deleted");
    Ok(deleted)
}

/// Attach a scene to a performance.
///
/// Both sides must exist. Attaching an existing pair is a no-op: the join
/// table's pair key plus `INSERT OR IGNORE` keeps one association per pair.
pub async fn add_scene_to_performance(
    rows: &Rows,
    scene_id: i64,
    performance_id: i64,
) -> TheatreResult<Option<Performance>> {
    rows.require::<UsdScene>(scene_id).await?;
    rows.require::<Performance>(performance_id).await?;

    let sql = format!(
        "INSERT OR IGNORE INTO {} ({}, {}) VALUES (?1, ?2)",
        SCENE_PERFORMANCES.join, SCENE_PERFORMANCES.from, SCENE_PERFORMANCES.to
    );
    let outcome = rows
        .execute(&sql, vec![Value::from(scene_id), Value::from(performance_id)])
        .await?;

    info!(
        scene = scene_id,
        performance = performance_id,
        inserted = outcome.rows_affected,
        "scene attached to performance"
    );
    rows.by_id(performance_id).await
}

/// Detach a scene from a performance; a missing association is `NotFound`
pub async fn remove_scene_from_performance(
    rows: &Rows,
    scene_id: i64,
    performance_id: i64,
) -> TheatreResult<Option<Performance>> {
    let sql = format!(
        "DELETE FROM {} WHERE {} = ?1 AND {} = ?2",
        SCENE_PERFORMANCES.join, SCENE_PERFORMANCES.from, SCENE_PERFORMANCES.to
    );
    let outcome = rows
        .execute(&sql, vec![Value::from(scene_id), Value::from(performance_id)])
        .await?;

    if outcome.rows_affected == 0 {
        return Err(TheatreError::not_found(
            "ScenePerformance",
            format!("sceneId={}, performanceId={}", scene_id, performance_id),
        ));
    }

    info!(
        scene = scene_id,
        performance = performance_id,
        "scene detached from performance"
    );
    rows.by_id(performance_id).await
}

#[derive(Default)]
pub struct SceneMutation;

#[Object]
impl SceneMutation {
    async fn create_usd_scene(
        &self,
        ctx: &Context<'_>,
        data: CreateUsdSceneInput,
    ) -> Result<Option<UsdScene>> {
        logged(
            "createUsdScene",
            create_usd_scene(Rows::from_ctx(ctx)?, data).await,
        )
    }

    async fn update_usd_scene(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] target: UsdSceneWhere,
        data: UpdateUsdSceneInput,
    ) -> Result<Option<UsdScene>> {
        logged(
            "updateUsdScene",
            update_usd_scene(Rows::from_ctx(ctx)?, target.key(), data).await,
        )
    }

    async fn delete_usd_scene(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] target: UsdSceneWhere,
    ) -> Result<UsdScene> {
        logged(
            "deleteUsdScene",
            delete_usd_scene(Rows::from_ctx(ctx)?, target.key()).await,
        )
    }

    async fn add_scene_to_performance(
        &self,
        ctx: &Context<'_>,
        scene_id: i64,
        performance_id: i64,
    ) -> Result<Option<Performance>> {
        logged(
            "addSceneToPerformance",
            add_scene_to_performance(Rows::from_ctx(ctx)?, scene_id, performance_id).await,
        )
    }

    async fn remove_scene_from_performance(
        &self,
        ctx: &Context<'_>,
        scene_id: i64,
        performance_id: i64,
    ) -> Result<Option<Performance>> {
        logged(
            "removeSceneFromPerformance",
            remove_scene_from_performance(Rows::from_ctx(ctx)?, scene_id, performance_id).await,
        )
    }
}
