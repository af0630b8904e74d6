use super::validation::{FieldRule, RequestValidator};
use crate::context::RequestContext;
use crate::dto::{CreateWarehouse, ListParams, UpdateWarehouse, WarehouseResponse};
use crate::error::AppError;
use crate::models::NewWarehouse;
use crate::repository::WarehouseRepository;
use uuid::Uuid;

const WAREHOUSE_NAME: FieldRule = FieldRule::length(3, 40);
const LOCATION_DESCRIPTION: FieldRule = FieldRule::length(23, 60);
/// Renames only need a minimum; the location is free-form on update.
const UPDATED_NAME: FieldRule = FieldRule::min_length(3);

#[derive(Clone)]
pub struct WarehouseService {
    repo: WarehouseRepository,
}

impl WarehouseService {
    pub fn new(repo: WarehouseRepository) -> Self {
        WarehouseService { repo }
    }

    pub async fn get_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<WarehouseResponse>, AppError> {
        let rows = self.repo.find_all(ctx, params).await?;
        Ok(rows.into_iter().map(WarehouseResponse::from).collect())
    }

    pub async fn get_by_code(&self, ctx: &RequestContext, code: Uuid) -> Result<WarehouseResponse, AppError> {
        Ok(self.repo.find_by_code(ctx, code).await?.into())
    }

    /// The warehouse code is generated here, never taken from the client.
    pub async fn create(&self, ctx: &RequestContext, req: CreateWarehouse) -> Result<WarehouseResponse, AppError> {
        RequestValidator::check("warehouse_name", &req.warehouse_name, &WAREHOUSE_NAME)?;
        RequestValidator::check("location_description", &req.location_description, &LOCATION_DESCRIPTION)?;
        let warehouse = NewWarehouse {
            warehouse_name: req.warehouse_name,
            warehouse_code: Uuid::new_v4(),
            location_description: req.location_description,
        };
        let id = self.repo.save(ctx, &warehouse).await?;
        tracing::info!(entity = "warehouse", id, code = %warehouse.warehouse_code, "created");
        Ok(WarehouseResponse {
            warehouse_code: warehouse.warehouse_code.to_string(),
            warehouse_name: warehouse.warehouse_name,
            location_description: warehouse.location_description,
        })
    }

    pub async fn update(&self, ctx: &RequestContext, code: Uuid, req: UpdateWarehouse) -> Result<(), AppError> {
        RequestValidator::check_optional("warehouse_name", req.warehouse_name.as_deref(), &UPDATED_NAME)?;
        self.repo.update(ctx, code, req.into_fields()).await
    }

    pub async fn delete(&self, ctx: &RequestContext, code: Uuid) -> Result<(), AppError> {
        self.repo.delete(ctx, code).await
    }
}
