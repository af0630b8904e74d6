use super::parse_id;
use crate::context::RequestContext;
use crate::dto::{CreateRole, ListParams, RoleResponse};
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::response::{created, success, success_empty};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/roles",
    tag = "role",
    params(ListParams),
    responses((status = 200, description = "Roles, in the response envelope", body = [RoleResponse]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    Ok(success(state.roles.get_all(&ctx, params).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/roles/{id}",
    tag = "role",
    params(("id" = i32, Path, description = "Role id")),
    responses((status = 200, description = "Role", body = RoleResponse), (status = 404, description = "No role with this id"))
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    Ok(success(state.roles.get_by_id(&ctx, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/roles",
    tag = "role",
    request_body = CreateRole,
    responses((status = 201, description = "Created role", body = RoleResponse), (status = 422, description = "Validation failed"))
)]
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<CreateRole>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(state.roles.create(&ctx, body).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/roles/{id}",
    tag = "role",
    params(("id" = i32, Path, description = "Role id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "No role with this id"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    state.roles.delete(&ctx, id).await?;
    Ok(success_empty())
}
