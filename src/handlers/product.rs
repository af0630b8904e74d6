use super::parse_id;
use crate::context::RequestContext;
use crate::dto::{CreateProduct, ListParams, ProductResponse, UpdateProduct};
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::response::{created, success, success_empty};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "product",
    params(ListParams),
    responses((status = 200, description = "Products, in the response envelope", body = [ProductResponse]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    Ok(success(state.products.get_all(&ctx, params).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ProductResponse),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    Ok(success(state.products.get_by_id(&ctx, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "product",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Created product", body = ProductResponse),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<CreateProduct>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(state.products.create(&ctx, body).await?))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Nothing to update or malformed body"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<UpdateProduct>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    state.products.update(&ctx, id, body).await?;
    Ok(success_empty())
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "No product with this id"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    state.products.delete(&ctx, id).await?;
    Ok(success_empty())
}
