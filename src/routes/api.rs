//! Versioned entity routes, nested under `/api/v1`.

use crate::handlers::{employee, named, product, role, warehouse};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(employee::list).post(employee::create))
        .route(
            "/employees/:code",
            get(employee::read).patch(employee::update).delete(employee::delete),
        )
        .route("/warehouses", get(warehouse::list).post(warehouse::create))
        .route(
            "/warehouses/:code",
            get(warehouse::read).patch(warehouse::update).delete(warehouse::delete),
        )
        .route("/warehouses/:code/employees", get(employee::list_by_warehouse))
        .route("/categories", get(named::list_categories).post(named::create_category))
        .route("/categories/:id", put(named::update_category).delete(named::delete_category))
        .route("/sizes", get(named::list_sizes).post(named::create_size))
        .route("/sizes/:id", put(named::update_size).delete(named::delete_size))
        .route("/roles", get(role::list).post(role::create))
        .route("/roles/:id", get(role::read).delete(role::delete))
        .route("/products", get(product::list).post(product::create))
        .route(
            "/products/:id",
            get(product::read).patch(product::update).delete(product::delete),
        )
}
