//! Shared fixture: an in-memory store with the bundled schema and a small
//! production seeded into it.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;
use vtheatre::graph::{build_schema, TheatreSchema};
use vtheatre::store::SqliteStore;

pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

/// Two users, two performances, two scenes, one session per performance and
/// one capture row of each kind on session 1.
///
/// Scene 5 has external file id 100, scene 7 has 900. Session states come
/// from the schema seed: 1 inactive, 2 active, 3 ended.
pub const SEED_SQL: &str = "
    INSERT INTO users (id, eosId, name, email, userRole, isAdmin, isSuperAdmin) VALUES
        (1, 'eos-ada', 'Ada', 'ada@example.com', 'director', 1, 0),
        (2, '', 'Grace', 'grace@example.com', NULL, 0, 0);

    INSERT INTO performances (id, title, description, ownerId) VALUES
        (1, 'Hamlet', 'Prince of Denmark', 1),
        (2, 'The Tempest', NULL, 2);

    INSERT INTO usdScenes (id, pCloudFileId, fileUrl, title, ownerId, template, public) VALUES
        (5, 100, 'https://files/castle.usd', 'Castle', 1, 1, 0),
        (7, 900, NULL, 'Island', 2, 0, 1);

    INSERT INTO avatars (id, name, userId) VALUES
        (1, 'Ghost', 1),
        (2, 'Ariel', NULL);

    INSERT INTO props (id, name, pCloudFileId, fileUrl) VALUES
        (1, 'Skull', 300, NULL);

    INSERT INTO sessions (id, eosSessionId, title, ownerId, performanceId, usdSceneId, sessionStateId, streamingUrl) VALUES
        (1, 'eos-s1', 'Opening night', 1, 1, 5, 2, 'rtmp://stream/1'),
        (2, NULL, 'Rehearsal', 2, 2, NULL, 1, NULL);

    INSERT INTO avatarMotionData (id, sessionId, avatarId, pCloudFileId, initialPositionX, initialPositionY, initialPositionZ, initialRotationX, initialRotationY, initialRotationZ) VALUES
        (1, 1, 1, 400, 1.0, 2.0, 3.0, 0.0, 90.0, 0.0);
    INSERT INTO faceData (id, sessionId, avatarId, pCloudFileId) VALUES (1, 1, 1, 401);
    INSERT INTO audioData (id, sessionId, avatarId, pCloudFileId) VALUES (1, 1, 2, 402);
    INSERT INTO lightData (id, sessionId, lightId, lightType, positionX, positionY, positionZ) VALUES
        (1, 1, 11, 'spot', 4.0, 5.0, 6.0);
    INSERT INTO propMotionData (id, sessionId, propId, initialPositionX, initialPositionY, initialPositionZ) VALUES
        (1, 1, 1, 0.5, 0.0, -0.5);

    INSERT INTO scenesPerformances (sceneId, performanceId) VALUES (5, 1);
    INSERT INTO performanceMembership (performanceId, userId) VALUES (1, 1), (1, 2);
    INSERT INTO performanceCast (performanceId, avatarId) VALUES (1, 1), (1, 2);
    INSERT INTO userAttendance (sessionId, userId) VALUES (1, 2);
    INSERT INTO sessionCast (sessionId, avatarId) VALUES (1, 1);
    INSERT INTO usdSceneMembership (usdSceneId, userId) VALUES (5, 2);
";

pub async fn empty_schema() -> TheatreSchema {
    let store = SqliteStore::open_in_memory().unwrap();
    store.apply_script(SCHEMA_SQL).await.unwrap();
    build_schema(Arc::new(store))
}

pub async fn seeded_schema() -> TheatreSchema {
    let store = SqliteStore::open_in_memory().unwrap();
    store.apply_script(SCHEMA_SQL).await.unwrap();
    store.apply_script(SEED_SQL).await.unwrap();
    build_schema(Arc::new(store))
}

/// Execute and return `data`, failing the test on any error
pub async fn run(schema: &TheatreSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors for {}: {:?}",
        query,
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Execute and return `(data, error codes)`
pub async fn run_with_errors(schema: &TheatreSchema, query: &str) -> (Value, Vec<String>) {
    let response = schema.execute(query).await;
    let codes = response
        .errors
        .iter()
        .map(|err| {
            let err = serde_json::to_value(err).unwrap();
            err["extensions"]["code"].as_str().unwrap_or_default().to_string()
        })
        .collect();
    (response.data.into_json().unwrap(), codes)
}
