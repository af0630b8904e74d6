//! Entity services: validation and business rules between handlers and repositories.

mod employee;
mod named;
mod password;
mod product;
mod role;
mod validation;
mod warehouse;

pub use employee::EmployeeService;
pub use named::NamedService;
pub use password::hash_password;
pub use product::ProductService;
pub use role::RoleService;
pub use validation::{FieldRule, Format, RequestValidator};
pub use warehouse::WarehouseService;
