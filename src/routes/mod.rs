//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Full application router: common probes, `/api/v1`, and the OpenAPI document.
pub fn build_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .nest("/api/v1", api_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
