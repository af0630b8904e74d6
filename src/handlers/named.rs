//! Category and size handlers. Both tables are `(id, name)` lookups backed by
//! [`NamedService`], so each route is a thin wrapper picking the service.

use super::parse_id;
use crate::context::RequestContext;
use crate::dto::{ListParams, NameRequest, NamedResponse};
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::response::{created, success, success_empty};
use crate::service::NamedService;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

async fn list(service: &NamedService, params: ListParams, ctx: RequestContext) -> Result<impl IntoResponse, AppError> {
    Ok(success(service.get_all(&ctx, params).await?))
}

async fn create(service: &NamedService, body: NameRequest, ctx: RequestContext) -> Result<impl IntoResponse, AppError> {
    Ok(created(service.create(&ctx, body).await?))
}

async fn update(
    service: &NamedService,
    id: &str,
    body: NameRequest,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    service.update(&ctx, parse_id(id)?, body).await?;
    Ok(success_empty())
}

async fn delete(service: &NamedService, id: &str, ctx: RequestContext) -> Result<impl IntoResponse, AppError> {
    service.delete(&ctx, parse_id(id)?).await?;
    Ok(success_empty())
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "category",
    params(ListParams),
    responses((status = 200, description = "Categories, in the response envelope", body = [NamedResponse]))
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    list(&state.categories, params, ctx).await
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "category",
    request_body = NameRequest,
    responses((status = 201, description = "Created category", body = NamedResponse), (status = 422, description = "Validation failed"))
)]
pub async fn create_category(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<NameRequest>,
) -> Result<impl IntoResponse, AppError> {
    create(&state.categories, body, ctx).await
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    request_body = NameRequest,
    responses((status = 200, description = "Renamed"), (status = 404, description = "No category with this id"))
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<NameRequest>,
) -> Result<impl IntoResponse, AppError> {
    update(&state.categories, &id, body, ctx).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "No category with this id"))
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    delete(&state.categories, &id, ctx).await
}

#[utoipa::path(
    get,
    path = "/api/v1/sizes",
    tag = "size",
    params(ListParams),
    responses((status = 200, description = "Sizes, in the response envelope", body = [NamedResponse]))
)]
pub async fn list_sizes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    list(&state.sizes, params, ctx).await
}

#[utoipa::path(
    post,
    path = "/api/v1/sizes",
    tag = "size",
    request_body = NameRequest,
    responses((status = 201, description = "Created size", body = NamedResponse), (status = 422, description = "Validation failed"))
)]
pub async fn create_size(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<NameRequest>,
) -> Result<impl IntoResponse, AppError> {
    create(&state.sizes, body, ctx).await
}

#[utoipa::path(
    put,
    path = "/api/v1/sizes/{id}",
    tag = "size",
    params(("id" = i32, Path, description = "Size id")),
    request_body = NameRequest,
    responses((status = 200, description = "Renamed"), (status = 404, description = "No size with this id"))
)]
pub async fn update_size(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<NameRequest>,
) -> Result<impl IntoResponse, AppError> {
    update(&state.sizes, &id, body, ctx).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/sizes/{id}",
    tag = "size",
    params(("id" = i32, Path, description = "Size id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "No size with this id"))
)]
pub async fn delete_size(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    delete(&state.sizes, &id, ctx).await
}
