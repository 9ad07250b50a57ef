//! GraphQL resolution layer
//!
//! Maps the theatre schema onto the row store: a query root of flat
//! collections and single-row lookups, one resolver per relation field, and
//! a mutation root of create/update/delete handlers.
//!
//! The store capability is registered once as schema data and every
//! resolver reaches it through the execution context. Nothing is shared
//! between resolvers beyond that handle.

pub mod access;
pub mod entities;
pub mod errors;
pub mod mutation;
pub mod query;
pub mod states;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::store::RowStore;

pub use access::{Entity, Hop, KeyLookup, Rows, Table};
pub use errors::{TheatreError, TheatreResult};
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// Executable schema type
pub type TheatreSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema over `store`
pub fn build_schema(store: Arc<dyn RowStore>) -> TheatreSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(Rows::new(store))
    .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_exposes_roots() {
        let store: Arc<dyn RowStore> = Arc::new(crate::store::SqliteStore::open_in_memory().unwrap());
        let sdl = build_schema(store).sdl();

        assert!(sdl.contains("sessionByState"));
        assert!(sdl.contains("addSceneToPerformance"));
        assert!(sdl.contains("input UserWhere"));
        assert!(sdl.contains("type Vector3"));
    }
}
