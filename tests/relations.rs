//! Relation Resolver Tests
//!
//! Each relation field resolves through one access pattern:
//! - forward foreign key (child to parent, absent when null or dangling)
//! - reverse foreign key (parent to children)
//! - join traversal through an association table

mod common;

use common::{run, seeded_schema};
use serde_json::json;

// =============================================================================
// Forward foreign keys
// =============================================================================

#[tokio::test]
async fn test_session_forward_relations() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ sessionById(id: 1) { owner { name } performance { title } usdScene { title } state } }",
    )
    .await;

    assert_eq!(
        data["sessionById"],
        json!({
            "owner": {"name": "Ada"},
            "performance": {"title": "Hamlet"},
            "usdScene": {"title": "Castle"},
            "state": "active",
        })
    );
}

#[tokio::test]
async fn test_null_foreign_key_is_absent() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ sessionById(id: 2) { usdScene { id } state } avatarById(id: 2) { user { id } } }",
    )
    .await;

    assert_eq!(
        data,
        json!({
            "sessionById": {"usdScene": null, "state": "inactive"},
            "avatarById": {"user": null},
        })
    );
}

#[tokio::test]
async fn test_capture_rows_point_back() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ avatarMotionData { avatar { name } session { title }
                              initialPosition { x y z } initialRotation { y } }
           propMotionData { prop { name } }
           lightData { session { id } } }",
    )
    .await;

    assert_eq!(
        data,
        json!({
            "avatarMotionData": [{
                "avatar": {"name": "Ghost"},
                "session": {"title": "Opening night"},
                "initialPosition": {"x": 1.0, "y": 2.0, "z": 3.0},
                "initialRotation": {"y": 90.0},
            }],
            "propMotionData": [{"prop": {"name": "Skull"}}],
            "lightData": [{"session": {"id": 1}}],
        })
    );
}

// =============================================================================
// Reverse foreign keys
// =============================================================================

#[tokio::test]
async fn test_user_owned_collections() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ userById(id: 1) { performances { id } avatars { name } usdScenes { id } sessionsOwned { id } } }",
    )
    .await;

    assert_eq!(
        data["userById"],
        json!({
            "performances": [{"id": 1}],
            "avatars": [{"name": "Ghost"}],
            "usdScenes": [{"id": 5}],
            "sessionsOwned": [{"id": 1}],
        })
    );
}

#[tokio::test]
async fn test_session_capture_collections() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ sessionById(id: 1) { motionData { id } faceData { id } lightData { id }
                                audioData { id } propMotionData { id } } }",
    )
    .await;

    assert_eq!(
        data["sessionById"],
        json!({
            "motionData": [{"id": 1}],
            "faceData": [{"id": 1}],
            "lightData": [{"id": 1}],
            "audioData": [{"id": 1}],
            "propMotionData": [{"id": 1}],
        })
    );
}

#[tokio::test]
async fn test_avatar_and_prop_capture() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ avatarById(id: 1) { avatarMotionData { id } faceData { id } audioData { id } }
           propById(id: 1) { propMotionData { id } } }",
    )
    .await;

    assert_eq!(
        data,
        json!({
            "avatarById": {"avatarMotionData": [{"id": 1}], "faceData": [{"id": 1}], "audioData": []},
            "propById": {"propMotionData": [{"id": 1}]},
        })
    );
}

#[tokio::test]
async fn test_parent_without_children() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ performanceById(id: 2) { sessions { id } usdScenes { id } members { id } avatars { id } } }",
    )
    .await;

    assert_eq!(
        data["performanceById"],
        json!({"sessions": [{"id": 2}], "usdScenes": [], "members": [], "avatars": []})
    );
}

// =============================================================================
// Join traversals
// =============================================================================

#[tokio::test]
async fn test_performance_joins() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ performanceById(id: 1) { members { name } usdScenes { title } avatars { name } owner { id } } }",
    )
    .await;

    assert_eq!(
        data["performanceById"],
        json!({
            "members": [{"name": "Ada"}, {"name": "Grace"}],
            "usdScenes": [{"title": "Castle"}],
            "avatars": [{"name": "Ghost"}, {"name": "Ariel"}],
            "owner": {"id": 1},
        })
    );
}

#[tokio::test]
async fn test_joins_walked_from_the_other_side() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ userById(id: 2) { memberOf { title } sessionsAttending { title } }
           sceneById(id: 5) { performances { title } members { name } sessions { id } }
           avatarById(id: 2) { performances { id } } }",
    )
    .await;

    assert_eq!(
        data,
        json!({
            "userById": {
                "memberOf": [{"title": "Hamlet"}],
                "sessionsAttending": [{"title": "Opening night"}],
            },
            "sceneById": {
                "performances": [{"title": "Hamlet"}],
                "members": [{"name": "Grace"}],
                "sessions": [{"id": 1}],
            },
            "avatarById": {"performances": [{"id": 1}]},
        })
    );
}

#[tokio::test]
async fn test_session_attendees_and_cast() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ sessionById(id: 1) { attendees { name } cast { name } } }",
    )
    .await;

    assert_eq!(
        data["sessionById"],
        json!({"attendees": [{"name": "Grace"}], "cast": [{"name": "Ghost"}]})
    );
}

#[tokio::test]
async fn test_deep_nesting_cycles_back() {
    let schema = seeded_schema().await;
    let data = run(
        &schema,
        "{ userById(id: 1) { performances { sessions { owner { performances { title } } } } } }",
    )
    .await;

    assert_eq!(
        data["userById"]["performances"][0]["sessions"][0]["owner"]["performances"],
        json!([{"title": "Hamlet"}])
    );
}
