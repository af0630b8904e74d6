use super::parse_uuid;
use crate::context::RequestContext;
use crate::dto::{CreateWarehouse, ListParams, UpdateWarehouse, WarehouseResponse};
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::response::{created, success, success_empty};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/warehouses",
    tag = "warehouse",
    params(ListParams),
    responses((status = 200, description = "Warehouses, in the response envelope", body = [WarehouseResponse]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    Ok(success(state.warehouses.get_all(&ctx, params).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses/{code}",
    tag = "warehouse",
    params(("code" = String, Path, description = "Warehouse code (UUID)")),
    responses(
        (status = 200, description = "Warehouse", body = WarehouseResponse),
        (status = 404, description = "No warehouse with this code")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    let code = parse_uuid(&code)?;
    Ok(success(state.warehouses.get_by_code(&ctx, code).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/warehouses",
    tag = "warehouse",
    request_body = CreateWarehouse,
    responses(
        (status = 201, description = "Created warehouse with its generated code", body = WarehouseResponse),
        (status = 409, description = "Warehouse name already taken"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<CreateWarehouse>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(state.warehouses.create(&ctx, body).await?))
}

#[utoipa::path(
    patch,
    path = "/api/v1/warehouses/{code}",
    tag = "warehouse",
    params(("code" = String, Path, description = "Warehouse code (UUID)")),
    request_body = UpdateWarehouse,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Nothing to update or malformed body"),
        (status = 404, description = "No warehouse with this code")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<UpdateWarehouse>,
) -> Result<impl IntoResponse, AppError> {
    let code = parse_uuid(&code)?;
    state.warehouses.update(&ctx, code, body).await?;
    Ok(success_empty())
}

#[utoipa::path(
    delete,
    path = "/api/v1/warehouses/{code}",
    tag = "warehouse",
    params(("code" = String, Path, description = "Warehouse code (UUID)")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "No warehouse with this code"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    let code = parse_uuid(&code)?;
    state.warehouses.delete(&ctx, code).await?;
    Ok(success_empty())
}
