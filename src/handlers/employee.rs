use super::parse_uuid;
use crate::context::RequestContext;
use crate::dto::{CreateEmployee, EmployeeResponse, ListParams, UpdateEmployee};
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::response::{created, success, success_empty};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "employee",
    params(ListParams),
    responses((status = 200, description = "Employees, in the response envelope", body = [EmployeeResponse]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    Ok(success(state.employees.get_all(&ctx, params).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses/{code}/employees",
    tag = "employee",
    params(("code" = String, Path, description = "Warehouse code (UUID)"), ListParams),
    responses((status = 200, description = "Employees assigned to the warehouse", body = [EmployeeResponse]))
)]
pub async fn list_by_warehouse(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<ListParams>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    let code = parse_uuid(&code)?;
    Ok(success(state.employees.get_all_by_warehouse(&ctx, code, params).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{code}",
    tag = "employee",
    params(("code" = String, Path, description = "Employee code")),
    responses(
        (status = 200, description = "Employee", body = EmployeeResponse),
        (status = 404, description = "No employee with this code")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    Ok(success(state.employees.get_by_code(&ctx, &code).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "employee",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Created employee", body = EmployeeResponse),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<CreateEmployee>,
) -> Result<impl IntoResponse, AppError> {
    Ok(created(state.employees.create(&ctx, body).await?))
}

#[utoipa::path(
    patch,
    path = "/api/v1/employees/{code}",
    tag = "employee",
    params(("code" = String, Path, description = "Employee code")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Nothing to update or malformed body"),
        (status = 404, description = "No employee with this code")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ctx: RequestContext,
    ApiJson(body): ApiJson<UpdateEmployee>,
) -> Result<impl IntoResponse, AppError> {
    state.employees.update(&ctx, &code, body).await?;
    Ok(success_empty())
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{code}",
    tag = "employee",
    params(("code" = String, Path, description = "Employee code")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "No employee with this code"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    state.employees.delete(&ctx, &code).await?;
    Ok(success_empty())
}
