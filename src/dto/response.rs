use crate::models::{Employee, Named, Product, Role, Warehouse};
use serde::Serialize;
use utoipa::ToSchema;

/// Category or size.
#[derive(Debug, Serialize, ToSchema)]
pub struct NamedResponse {
    pub id: i32,
    pub name: String,
}

impl From<Named> for NamedResponse {
    fn from(n: Named) -> Self {
        NamedResponse { id: n.id, name: n.name }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleResponse {
    pub id: i32,
    pub role_name: String,
}

impl From<Role> for RoleResponse {
    fn from(r: Role) -> Self {
        RoleResponse {
            id: r.id,
            role_name: r.role_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WarehouseResponse {
    pub warehouse_code: String,
    pub warehouse_name: String,
    pub location_description: String,
}

impl From<Warehouse> for WarehouseResponse {
    fn from(w: Warehouse) -> Self {
        WarehouseResponse {
            warehouse_code: w.warehouse_code.to_string(),
            warehouse_name: w.warehouse_name,
            location_description: w.location_description.unwrap_or_default(),
        }
    }
}

/// Never carries the password hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeResponse {
    pub user_id: String,
    pub name: String,
    pub role: i32,
    pub employee_code: String,
    pub warehouse_code: String,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        EmployeeResponse {
            user_id: e.user_id,
            name: e.employee_name,
            role: e.id_role,
            employee_code: e.employee_code,
            warehouse_code: e.warehouse_code.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub product_name: String,
    pub price: i64,
    pub description_product: Option<String>,
    pub product_code: String,
    pub id_category: i32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            product_name: p.product_name,
            price: p.price,
            description_product: p.description_product,
            product_code: p.product_code,
            id_category: p.id_category,
        }
    }
}
