//! Mutation handlers
//!
//! Each handler runs three phases:
//!
//! 1. Input normalization: per-field defaults, state names resolved to ids
//! 2. Exactly one insert, update or delete
//! 3. Read-back of the affected row by primary key
//!
//! Results are nullable. A null result means the write may have happened
//! but the row could not be read back; the two steps are not atomic.
//!
//! Update and delete targets are located with a dual key (`where`). Giving
//! no key at all is rejected before the store is touched; a key that
//! matches nothing is `NotFound`.

mod avatar;
mod performance;
mod scene;
mod session;
mod user;
mod write;

pub use avatar::{AvatarMutation, CreateAvatarInput, UpdateAvatarInput};
pub use performance::{CreatePerformanceInput, PerformanceMutation, UpdatePerformanceInput};
pub use scene::{CreateUsdSceneInput, SceneMutation, UpdateUsdSceneInput, UsdSceneWhere};
pub use session::{CreateSessionInput, SessionMutation, SessionWhere, UpdateSessionInput};
pub use user::{CreateUserInput, UpdateUserInput, UserMutation, UserWhere};
pub use write::{Changeset, Insert};

use async_graphql::{MergedObject, Result, ResultExt};
use tracing::warn;

use super::errors::TheatreResult;

/// Mutation root combining every entity's mutations
#[derive(Default, MergedObject)]
pub struct MutationRoot(
    UserMutation,
    PerformanceMutation,
    SceneMutation,
    AvatarMutation,
    SessionMutation,
);

/// Log a failed mutation and convert its error for the engine
fn logged<T>(operation: &'static str, result: TheatreResult<T>) -> Result<T> {
    if let Err(err) = &result {
        warn!(operation, code = err.code(), error = %err, "mutation failed");
    }
    result.extend()
}
