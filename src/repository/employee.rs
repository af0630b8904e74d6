use super::{decode_first, decode_rows, ensure_affected, returned_id, Page};
use crate::context::RequestContext;
use crate::dto::ListParams;
use crate::error::AppError;
use crate::models::{Employee, NewEmployee};
use crate::sql::{AllowedColumns, FieldSet, PartialUpdate, SqlValue};
use crate::store::SqlExecutor;
use std::sync::Arc;
use uuid::Uuid;

const ENTITY: &str = "employee";

const DEFAULT_LIMIT: u32 = 50;

const COLUMNS: &str = "id, user_id, employee_name, employee_code, id_role, warehouse_code";

/// `password` must already be hashed when it reaches this allow-list.
const PARTIAL_UPDATE: PartialUpdate = PartialUpdate {
    table: "employee",
    key_column: "employee_code",
    allowed: AllowedColumns(&["employee_name", "password", "id_role"]),
};

#[derive(Clone)]
pub struct EmployeeRepository {
    db: Arc<dyn SqlExecutor>,
}

impl EmployeeRepository {
    pub fn new(db: Arc<dyn SqlExecutor>) -> Self {
        EmployeeRepository { db }
    }

    pub async fn find_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<Employee>, AppError> {
        let page = Page::new(params, DEFAULT_LIMIT);
        let sql = format!("SELECT {} FROM employee ORDER BY id{}", COLUMNS, page.sql());
        let rows = self
            .db
            .query(ctx, &sql, &[])
            .await
            .map_err(|e| AppError::store("list", ENTITY, e))?;
        decode_rows(ENTITY, rows)
    }

    pub async fn find_all_by_warehouse(
        &self,
        ctx: &RequestContext,
        warehouse_code: Uuid,
        params: ListParams,
    ) -> Result<Vec<Employee>, AppError> {
        let page = Page::new(params, DEFAULT_LIMIT);
        let sql = format!(
            "SELECT {} FROM employee WHERE warehouse_code = $1 ORDER BY id{}",
            COLUMNS,
            page.sql()
        );
        let rows = self
            .db
            .query(ctx, &sql, &[SqlValue::Uuid(warehouse_code)])
            .await
            .map_err(|e| AppError::store("list by warehouse", ENTITY, e))?;
        decode_rows(ENTITY, rows)
    }

    pub async fn find_by_code(&self, ctx: &RequestContext, employee_code: &str) -> Result<Employee, AppError> {
        let sql = format!("SELECT {} FROM employee WHERE employee_code = $1", COLUMNS);
        let rows = self
            .db
            .query(ctx, &sql, &[SqlValue::from(employee_code)])
            .await
            .map_err(|e| AppError::store("read", ENTITY, e))?;
        decode_first(ENTITY, rows, employee_code)
    }

    pub async fn save(&self, ctx: &RequestContext, employee: &NewEmployee) -> Result<i32, AppError> {
        let rows = self
            .db
            .query(
                ctx,
                "INSERT INTO employee (user_id, employee_name, password, employee_code, id_role, warehouse_code) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
                &[
                    SqlValue::from(employee.user_id.as_str()),
                    SqlValue::from(employee.employee_name.as_str()),
                    SqlValue::from(employee.password_hash.as_str()),
                    SqlValue::from(employee.employee_code.as_str()),
                    SqlValue::from(employee.id_role),
                    SqlValue::Uuid(employee.warehouse_code),
                ],
            )
            .await
            .map_err(|e| AppError::store("save", ENTITY, e))?;
        returned_id(ENTITY, rows)
    }

    pub async fn update(&self, ctx: &RequestContext, employee_code: &str, fields: FieldSet) -> Result<(), AppError> {
        let (sql, args) = PARTIAL_UPDATE.statement(fields, SqlValue::from(employee_code))?;
        let affected = self
            .db
            .execute(ctx, &sql, &args)
            .await
            .map_err(|e| AppError::store("update", ENTITY, e))?;
        ensure_affected(affected, ENTITY, employee_code)
    }

    pub async fn delete(&self, ctx: &RequestContext, employee_code: &str) -> Result<(), AppError> {
        let affected = self
            .db
            .execute(ctx, "DELETE FROM employee WHERE employee_code = $1", &[SqlValue::from(employee_code)])
            .await
            .map_err(|e| AppError::store("delete", ENTITY, e))?;
        ensure_affected(affected, ENTITY, employee_code)
    }
}
