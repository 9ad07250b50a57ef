//! Entity types and their field resolvers
//!
//! One Rust type per entity, one method per relation field. Scalar columns
//! are plain struct fields; foreign-key columns are hidden from the schema
//! and only reachable through their relation resolvers.

mod avatar;
mod capture;
mod links;
mod performance;
mod prop;
mod scene;
mod session;
mod user;

pub use avatar::Avatar;
pub use capture::{AudioData, AvatarMotionData, FaceData, LightData, PropMotionData};
pub use links::{SessionCast, UserAttendance};
pub use performance::Performance;
pub use prop::Prop;
pub use scene::UsdScene;
pub use session::{Session, SessionState};
pub use user::User;

use async_graphql::SimpleObject;

use super::access::Hop;

pub const SCENE_PERFORMANCES: Hop = Hop::new("scenesPerformances", "sceneId", "performanceId");
pub const PERFORMANCE_MEMBERS: Hop = Hop::new("performanceMembership", "performanceId", "userId");
pub const PERFORMANCE_CAST: Hop = Hop::new("performanceCast", "performanceId", "avatarId");
pub const SESSION_ATTENDEES: Hop = Hop::new("userAttendance", "sessionId", "userId");
pub const SESSION_CAST: Hop = Hop::new("sessionCast", "sessionId", "avatarId");
pub const SCENE_MEMBERS: Hop = Hop::new("usdSceneMembership", "usdSceneId", "userId");

/// Three-axis float triple (position or rotation)
#[derive(Debug, Clone, Copy, PartialEq, Default, SimpleObject)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
