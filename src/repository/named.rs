use super::{decode_first, decode_rows, ensure_affected, Page};
use crate::context::RequestContext;
use crate::dto::ListParams;
use crate::error::AppError;
use crate::models::Named;
use crate::sql::SqlValue;
use crate::store::SqlExecutor;
use std::sync::Arc;

const DEFAULT_LIMIT: u32 = 100;

/// Lookup tables shaped `(id, name)`: category and size share one implementation.
#[derive(Clone)]
pub struct NamedRepository {
    db: Arc<dyn SqlExecutor>,
    table: &'static str,
}

impl NamedRepository {
    pub fn category(db: Arc<dyn SqlExecutor>) -> Self {
        NamedRepository { db, table: "category" }
    }

    pub fn size(db: Arc<dyn SqlExecutor>) -> Self {
        NamedRepository { db, table: "size" }
    }

    pub fn entity(&self) -> &'static str {
        self.table
    }

    pub async fn find_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<Named>, AppError> {
        let page = Page::new(params, DEFAULT_LIMIT);
        let sql = format!("SELECT id, name FROM {} ORDER BY id{}", self.table, page.sql());
        let rows = self
            .db
            .query(ctx, &sql, &[])
            .await
            .map_err(|e| AppError::store("list", self.table, e))?;
        decode_rows(self.table, rows)
    }

    pub async fn save(&self, ctx: &RequestContext, name: &str) -> Result<Named, AppError> {
        let sql = format!("INSERT INTO {} (name) VALUES ($1) RETURNING id, name", self.table);
        let rows = self
            .db
            .query(ctx, &sql, &[SqlValue::from(name)])
            .await
            .map_err(|e| AppError::store("save", self.table, e))?;
        decode_first(self.table, rows, name)
    }

    pub async fn update(&self, ctx: &RequestContext, id: i32, name: &str) -> Result<(), AppError> {
        let sql = format!("UPDATE {} SET name = $1 WHERE id = $2", self.table);
        let affected = self
            .db
            .execute(ctx, &sql, &[SqlValue::from(name), SqlValue::from(id)])
            .await
            .map_err(|e| AppError::store("update", self.table, e))?;
        ensure_affected(affected, self.table, id)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        let affected = self
            .db
            .execute(ctx, &sql, &[SqlValue::from(id)])
            .await
            .map_err(|e| AppError::store("delete", self.table, e))?;
        ensure_affected(affected, self.table, id)
    }
}
