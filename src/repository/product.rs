use super::{decode_first, decode_rows, ensure_affected, returned_id, Page};
use crate::context::RequestContext;
use crate::dto::ListParams;
use crate::error::AppError;
use crate::models::{NewProduct, Product};
use crate::sql::{AllowedColumns, FieldSet, PartialUpdate, SqlValue};
use crate::store::SqlExecutor;
use std::sync::Arc;

const ENTITY: &str = "product";

const DEFAULT_LIMIT: u32 = 100;

const COLUMNS: &str = "id, product_name, price, description_product, product_code, id_category";

const PARTIAL_UPDATE: PartialUpdate = PartialUpdate {
    table: "product",
    key_column: "id",
    allowed: AllowedColumns(&["product_name", "price", "description_product", "id_category"]),
};

#[derive(Clone)]
pub struct ProductRepository {
    db: Arc<dyn SqlExecutor>,
}

impl ProductRepository {
    pub fn new(db: Arc<dyn SqlExecutor>) -> Self {
        ProductRepository { db }
    }

    pub async fn find_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<Product>, AppError> {
        let page = Page::new(params, DEFAULT_LIMIT);
        let sql = format!("SELECT {} FROM product ORDER BY id{}", COLUMNS, page.sql());
        let rows = self
            .db
            .query(ctx, &sql, &[])
            .await
            .map_err(|e| AppError::store("list", ENTITY, e))?;
        decode_rows(ENTITY, rows)
    }

    pub async fn find_by_id(&self, ctx: &RequestContext, id: i32) -> Result<Product, AppError> {
        let sql = format!("SELECT {} FROM product WHERE id = $1", COLUMNS);
        let rows = self
            .db
            .query(ctx, &sql, &[SqlValue::from(id)])
            .await
            .map_err(|e| AppError::store("read", ENTITY, e))?;
        decode_first(ENTITY, rows, id)
    }

    pub async fn save(&self, ctx: &RequestContext, product: &NewProduct) -> Result<i32, AppError> {
        let description = product
            .description_product
            .as_deref()
            .map_or(SqlValue::Null, SqlValue::from);
        let rows = self
            .db
            .query(
                ctx,
                "INSERT INTO product (product_name, price, description_product, product_code, id_category) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING id",
                &[
                    SqlValue::from(product.product_name.as_str()),
                    SqlValue::from(product.price),
                    description,
                    SqlValue::from(product.product_code.as_str()),
                    SqlValue::from(product.id_category),
                ],
            )
            .await
            .map_err(|e| AppError::store("save", ENTITY, e))?;
        returned_id(ENTITY, rows)
    }

    pub async fn update(&self, ctx: &RequestContext, id: i32, fields: FieldSet) -> Result<(), AppError> {
        let (sql, args) = PARTIAL_UPDATE.statement(fields, SqlValue::from(id))?;
        let affected = self
            .db
            .execute(ctx, &sql, &args)
            .await
            .map_err(|e| AppError::store("update", ENTITY, e))?;
        ensure_affected(affected, ENTITY, id)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError> {
        let affected = self
            .db
            .execute(ctx, "DELETE FROM product WHERE id = $1", &[SqlValue::from(id)])
            .await
            .map_err(|e| AppError::store("delete", ENTITY, e))?;
        ensure_affected(affected, ENTITY, id)
    }
}
