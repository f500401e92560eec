//! Routing for the task API.
//!
//! - `POST /graphql`: GraphQL endpoint
//! - `GET /graphql`: GraphiQL explorer
//! - `GET /health`: liveness probe
//!
//! Unknown routes and malformed GraphQL bodies answer with the structured
//! error payload from [`super::error`].

use async_graphql::http::GraphiQLSource;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::error::{ApiErrorResponse, RequestContext};
use super::graphql::TaskSchema;

/// Path of the GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Creates the API router serving `schema`.
#[must_use]
pub fn create_router(schema: TaskSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(schema)
        .layer(TraceLayer::new_for_http())
}

async fn graphql_handler(
    State(schema): State<TaskSchema>,
    method: Method,
    uri: Uri,
    body: Result<Json<async_graphql::Request>, JsonRejection>,
) -> Response {
    let context = RequestContext::new(uri.path(), method.as_str());
    match body {
        Ok(Json(request)) => {
            let response = schema.execute(request.data(context)).await;
            Json(response).into_response()
        }
        Err(rejection) => {
            ApiErrorResponse::new(StatusCode::BAD_REQUEST, &context, rejection.body_text())
                .into_response()
        }
    }
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found(method: Method, uri: Uri) -> ApiErrorResponse {
    let context = RequestContext::new(uri.path(), method.as_str());
    ApiErrorResponse::new(
        StatusCode::NOT_FOUND,
        &context,
        format!("Cannot {} {}", context.method, context.path),
    )
}
