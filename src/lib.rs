//! Warehouse management REST backend: employees, warehouses, products and
//! their lookup tables over PostgreSQL.

pub mod config;
pub mod context;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use context::RequestContext;
pub use error::{AppError, ConfigError, StoreError};
pub use response::{created, success, success_empty, ApiResponse};
pub use routes::build_router;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema, PgExecutor, SqlExecutor};
