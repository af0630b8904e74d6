//! Shared application state for all routes.

use crate::repository::{EmployeeRepository, NamedRepository, ProductRepository, RoleRepository, WarehouseRepository};
use crate::service::{EmployeeService, NamedService, ProductService, RoleService, WarehouseService};
use crate::store::SqlExecutor;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
    pub warehouses: WarehouseService,
    pub categories: NamedService,
    pub sizes: NamedService,
    pub roles: RoleService,
    pub products: ProductService,
    /// Used directly only by the readiness probe.
    pub db: Arc<dyn SqlExecutor>,
    pub request_timeout: Duration,
    /// Cancelled on shutdown; every request context is a child of it.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(db: Arc<dyn SqlExecutor>, request_timeout: Duration) -> Self {
        AppState {
            employees: EmployeeService::new(EmployeeRepository::new(db.clone())),
            warehouses: WarehouseService::new(WarehouseRepository::new(db.clone())),
            categories: NamedService::new(NamedRepository::category(db.clone())),
            sizes: NamedService::new(NamedRepository::size(db.clone())),
            roles: RoleService::new(RoleRepository::new(db.clone())),
            products: ProductService::new(ProductRepository::new(db.clone())),
            db,
            request_timeout,
            shutdown: CancellationToken::new(),
        }
    }
}
