//! Relational execution against PostgreSQL, plus database bootstrap.

use crate::context::RequestContext;
use crate::error::{AppError, ConfigError, StoreError};
use crate::sql::SqlValue;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Parameterized statement execution. Both calls honor the context's
/// cancellation and deadline.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Run a statement and return the number of rows affected.
    async fn execute(&self, ctx: &RequestContext, sql: &str, args: &[SqlValue]) -> Result<u64, StoreError>;

    /// Run a query and return each row as a JSON object keyed by column name.
    async fn query(&self, ctx: &RequestContext, sql: &str, args: &[SqlValue]) -> Result<Vec<Value>, StoreError>;
}

#[derive(Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        PgExecutor { pool }
    }
}

#[async_trait]
impl SqlExecutor for PgExecutor {
    async fn execute(&self, ctx: &RequestContext, sql: &str, args: &[SqlValue]) -> Result<u64, StoreError> {
        tracing::debug!(sql = %sql, params = ?args, "execute");
        let mut query = sqlx::query(sql);
        for a in args {
            query = query.bind(a.clone());
        }
        let result = ctx.run(query.execute(&self.pool)).await?;
        Ok(result.rows_affected())
    }

    async fn query(&self, ctx: &RequestContext, sql: &str, args: &[SqlValue]) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(sql = %sql, params = ?args, "query");
        let mut query = sqlx::query(sql);
        for a in args {
            query = query.bind(a.clone());
        }
        let rows = ctx.run(query.fetch_all(&self.pool)).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}

fn row_to_json(row: &sqlx::postgres::PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        let v = cell_to_value(row, name);
        map.insert(name.to_string(), v);
    }
    Value::Object(map)
}

fn cell_to_value(row: &sqlx::postgres::PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(u)) = row.try_get::<Option<uuid::Uuid>, _>(name) {
        return Value::String(u.to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}

/// Tables served by the API, created only when `BOOTSTRAP_SCHEMA` is set.
const SCHEMA_DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS category (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS size (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS role (
        id SERIAL PRIMARY KEY,
        role_name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS warehouse (
        id SERIAL PRIMARY KEY,
        warehouse_name TEXT NOT NULL UNIQUE,
        warehouse_code UUID NOT NULL UNIQUE,
        location_description TEXT
    )",
    "CREATE TABLE IF NOT EXISTS employee (
        id SERIAL PRIMARY KEY,
        user_id TEXT NOT NULL UNIQUE,
        employee_name TEXT NOT NULL,
        password TEXT NOT NULL,
        employee_code TEXT NOT NULL UNIQUE,
        id_role INTEGER NOT NULL REFERENCES role (id),
        warehouse_code UUID NOT NULL REFERENCES warehouse (warehouse_code) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS product (
        id SERIAL PRIMARY KEY,
        product_name TEXT NOT NULL,
        price BIGINT NOT NULL,
        description_product TEXT,
        product_code TEXT NOT NULL UNIQUE,
        id_category INTEGER NOT NULL REFERENCES category (id)
    )",
];

/// Create the API tables if they do not exist. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(|e| AppError::store("bootstrap", "schema", StoreError::Db(e)))?;
    }
    tracing::info!(tables = SCHEMA_DDL.len(), "schema bootstrap complete");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: database_url.to_string(),
    })?;
    let db_err = |e: sqlx::Error| AppError::store("bootstrap", "database", StoreError::Db(e));
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(db_err)?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await
        .map_err(db_err)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(db_err)?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let invalid = || ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    };
    let path_start = url.rfind('/').ok_or_else(invalid)? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_name_is_split_from_url() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/warehouse?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "warehouse");
    }

    #[test]
    fn url_without_path_is_rejected() {
        assert!(matches!(parse_db_name_from_url("localhost"), Err(AppError::Config(_))));
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("wh\"db"), "\"wh\"\"db\"");
    }
}
