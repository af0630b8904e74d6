use super::{decode_first, decode_rows, ensure_affected, returned_id, Page};
use crate::context::RequestContext;
use crate::dto::ListParams;
use crate::error::AppError;
use crate::models::{NewWarehouse, Warehouse};
use crate::sql::{AllowedColumns, FieldSet, PartialUpdate, SqlValue};
use crate::store::SqlExecutor;
use std::sync::Arc;
use uuid::Uuid;

const ENTITY: &str = "warehouse";

const DEFAULT_LIMIT: u32 = 30;

const PARTIAL_UPDATE: PartialUpdate = PartialUpdate {
    table: "warehouse",
    key_column: "warehouse_code",
    allowed: AllowedColumns(&["warehouse_name", "location_description"]),
};

#[derive(Clone)]
pub struct WarehouseRepository {
    db: Arc<dyn SqlExecutor>,
}

impl WarehouseRepository {
    pub fn new(db: Arc<dyn SqlExecutor>) -> Self {
        WarehouseRepository { db }
    }

    pub async fn find_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<Warehouse>, AppError> {
        let page = Page::new(params, DEFAULT_LIMIT);
        let sql = format!(
            "SELECT id, warehouse_name, warehouse_code, location_description FROM warehouse ORDER BY id{}",
            page.sql()
        );
        let rows = self
            .db
            .query(ctx, &sql, &[])
            .await
            .map_err(|e| AppError::store("list", ENTITY, e))?;
        decode_rows(ENTITY, rows)
    }

    pub async fn find_by_code(&self, ctx: &RequestContext, code: Uuid) -> Result<Warehouse, AppError> {
        let rows = self
            .db
            .query(
                ctx,
                "SELECT id, warehouse_name, warehouse_code, location_description FROM warehouse WHERE warehouse_code = $1",
                &[SqlValue::Uuid(code)],
            )
            .await
            .map_err(|e| AppError::store("read", ENTITY, e))?;
        decode_first(ENTITY, rows, code)
    }

    /// Insert and return the generated id.
    pub async fn save(&self, ctx: &RequestContext, warehouse: &NewWarehouse) -> Result<i32, AppError> {
        let rows = self
            .db
            .query(
                ctx,
                "INSERT INTO warehouse (warehouse_name, warehouse_code, location_description) VALUES ($1, $2, $3) RETURNING id",
                &[
                    SqlValue::from(warehouse.warehouse_name.as_str()),
                    SqlValue::Uuid(warehouse.warehouse_code),
                    SqlValue::from(warehouse.location_description.as_str()),
                ],
            )
            .await
            .map_err(|e| AppError::store("save", ENTITY, e))?;
        returned_id(ENTITY, rows)
    }

    /// Partial update keyed by warehouse code. Only `warehouse_name` and
    /// `location_description` may appear in `fields`.
    pub async fn update(&self, ctx: &RequestContext, code: Uuid, fields: FieldSet) -> Result<(), AppError> {
        let (sql, args) = PARTIAL_UPDATE.statement(fields, SqlValue::Uuid(code))?;
        let affected = self
            .db
            .execute(ctx, &sql, &args)
            .await
            .map_err(|e| AppError::store("update", ENTITY, e))?;
        ensure_affected(affected, ENTITY, code)
    }

    pub async fn delete(&self, ctx: &RequestContext, code: Uuid) -> Result<(), AppError> {
        let affected = self
            .db
            .execute(ctx, "DELETE FROM warehouse WHERE warehouse_code = $1", &[SqlValue::Uuid(code)])
            .await
            .map_err(|e| AppError::store("delete", ENTITY, e))?;
        ensure_affected(affected, ENTITY, code)
    }
}
