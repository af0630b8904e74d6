use super::{decode_first, decode_rows, ensure_affected, Page};
use crate::context::RequestContext;
use crate::dto::ListParams;
use crate::error::AppError;
use crate::models::Role;
use crate::sql::SqlValue;
use crate::store::SqlExecutor;
use std::sync::Arc;

const DEFAULT_LIMIT: u32 = 100;

const ENTITY: &str = "role";

#[derive(Clone)]
pub struct RoleRepository {
    db: Arc<dyn SqlExecutor>,
}

impl RoleRepository {
    pub fn new(db: Arc<dyn SqlExecutor>) -> Self {
        RoleRepository { db }
    }

    pub async fn find_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<Role>, AppError> {
        let page = Page::new(params, DEFAULT_LIMIT);
        let sql = format!("SELECT id, role_name FROM role ORDER BY id{}", page.sql());
        let rows = self
            .db
            .query(ctx, &sql, &[])
            .await
            .map_err(|e| AppError::store("list", ENTITY, e))?;
        decode_rows(ENTITY, rows)
    }

    pub async fn find_by_id(&self, ctx: &RequestContext, id: i32) -> Result<Role, AppError> {
        let rows = self
            .db
            .query(ctx, "SELECT id, role_name FROM role WHERE id = $1", &[SqlValue::from(id)])
            .await
            .map_err(|e| AppError::store("read", ENTITY, e))?;
        decode_first(ENTITY, rows, id)
    }

    pub async fn save(&self, ctx: &RequestContext, role_name: &str) -> Result<Role, AppError> {
        let rows = self
            .db
            .query(
                ctx,
                "INSERT INTO role (role_name) VALUES ($1) RETURNING id, role_name",
                &[SqlValue::from(role_name)],
            )
            .await
            .map_err(|e| AppError::store("save", ENTITY, e))?;
        decode_first(ENTITY, rows, role_name)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError> {
        let affected = self
            .db
            .execute(ctx, "DELETE FROM role WHERE id = $1", &[SqlValue::from(id)])
            .await
            .map_err(|e| AppError::store("delete", ENTITY, e))?;
        ensure_affected(affected, ENTITY, id)
    }
}
