//! GraphQL HTTP Routes
//!
//! `POST /graphql` executes a single request or a batch. `GET /graphql`
//! executes a query passed in the query string, and serves the GraphiQL
//! explorer when there is none. Field errors travel in the response's
//! `errors` array, not in the HTTP status.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLBatchRequest, GraphQLResponse};
use axum::{
    extract::{FromRequest, Request, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::debug;

use crate::graph::TheatreSchema;

const GRAPHQL_PATH: &str = "/graphql";

pub fn graphql_routes(schema: TheatreSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(get_handler).post(execute_handler))
        .with_state(schema)
}

async fn execute_handler(
    State(schema): State<TheatreSchema>,
    request: GraphQLBatchRequest,
) -> GraphQLResponse {
    let batch = request.into_inner();
    debug!(batch = matches!(batch, async_graphql::BatchRequest::Batch(_)), "graphql request");
    schema.execute_batch(batch).await.into()
}

async fn get_handler(State(schema): State<TheatreSchema>, request: Request) -> Response {
    if request.uri().query().is_none() {
        return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
    }

    match <GraphQLBatchRequest as FromRequest<()>>::from_request(request, &()).await {
        Ok(request) => execute_handler(State(schema), request).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}
