//! # HTTP Server Module
//!
//! Thin axum transport over the executable schema.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/graphql` - GraphQL execution (POST) and GraphiQL (GET)

pub mod config;
pub mod graphql_routes;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
