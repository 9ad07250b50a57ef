//! vtheatre - GraphQL resolution layer for a virtual-theatre production
//! database
//!
//! The store answers SQL; the graph layer turns GraphQL fields into single
//! store calls and maps their outcomes onto the schema's types.

pub mod cli;
pub mod graph;
pub mod http_server;
pub mod observability;
pub mod store;
