//! # HTTP Server
//!
//! Combines the health and GraphQL routers behind CORS and request tracing.

use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::config::{HttpServerConfig, InvalidOrigin};
use super::graphql_routes::graphql_routes;
use super::health_routes::health_routes;
use crate::graph::TheatreSchema;

/// HTTP server for the theatre GraphQL API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Fails when any configured CORS origin is malformed
    pub fn new(config: HttpServerConfig, schema: TheatreSchema) -> Result<Self, InvalidOrigin> {
        let router = Self::build_router(&config, schema)?;
        Ok(Self { config, router })
    }

    fn build_router(config: &HttpServerConfig, schema: TheatreSchema) -> Result<Router, InvalidOrigin> {
        let origins = config.origins()?;
        let allow_origin = if origins.is_empty() {
            AllowOrigin::from(Any)
        } else {
            AllowOrigin::list(origins)
        };
        let cors = CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any);

        Ok(Router::new()
            .merge(health_routes())
            .merge(graphql_routes(schema))
            .layer(TraceLayer::new_for_http())
            .layer(cors))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "serving GraphQL at http://{}/graphql", addr);
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::graph::build_schema;
    use crate::store::SqliteStore;

    async fn server() -> HttpServer {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .apply_script(include_str!("../../sql/schema.sql"))
            .await
            .unwrap();
        HttpServer::new(HttpServerConfig::default(), build_schema(Arc::new(store))).unwrap()
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_server_with_custom_port() {
        let store = SqliteStore::open_in_memory().unwrap();
        let config = HttpServerConfig {
            port: 8080,
            ..Default::default()
        };
        let server = HttpServer::new(config, build_schema(Arc::new(store))).unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_malformed_cors_origin_refuses_to_build() {
        let store = SqliteStore::open_in_memory().unwrap();
        let config = HttpServerConfig {
            cors_origins: vec!["https://ok.example.com".into(), "localhost:3000".into()],
            ..Default::default()
        };
        let err = HttpServer::new(config, build_schema(Arc::new(store)))
            .err()
            .unwrap();
        assert_eq!(err, InvalidOrigin("localhost:3000".into()));
    }

    #[tokio::test]
    async fn test_cors_allows_listed_origin_only() {
        let store = SqliteStore::open_in_memory().unwrap();
        let config = HttpServerConfig {
            cors_origins: vec!["https://ok.example.com".into()],
            ..Default::default()
        };
        let router = HttpServer::new(config, build_schema(Arc::new(store)))
            .unwrap()
            .router();

        let allowed = router
            .clone()
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://ok.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://ok.example.com"
        );

        let other = router
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://evil.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(other
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_health() {
        let response = server()
            .await
            .router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_post_graphql() {
        let request = Request::post("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "query": "{ sessionStates { name } }" }).to_string(),
            ))
            .unwrap();
        let response = server().await.router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(
            body["data"]["sessionStates"],
            json!([{ "name": "inactive" }, { "name": "active" }, { "name": "ended" }])
        );
    }

    #[tokio::test]
    async fn test_get_graphql_serves_explorer() {
        let response = server()
            .await
            .router()
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("graphiql"));
    }

    #[tokio::test]
    async fn test_post_graphql_batch() {
        let request = Request::post("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!([
                    { "query": "{ users { name } }" },
                    { "query": "query($id: Int!) { userById(id: $id) { email } }", "variables": { "id": 1 } }
                ])
                .to_string(),
            ))
            .unwrap();
        let response = server().await.router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        let replies = body.as_array().unwrap();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["data"]["users"], json!([]));
        assert_eq!(replies[1]["data"]["userById"], Value::Null);
    }

    #[tokio::test]
    async fn test_get_graphql_with_query_executes() {
        let response = server()
            .await
            .router()
            .oneshot(
                Request::get("/graphql?query=%7BsessionStates%7Bname%7D%7D")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["data"]["sessionStates"][1]["name"], "active");
    }
}
