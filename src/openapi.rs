//! OpenAPI document served at `/api-docs/openapi.json`.

use crate::dto::{
    CreateEmployee, CreateProduct, CreateRole, CreateWarehouse, EmployeeResponse, NameRequest, NamedResponse,
    ProductResponse, RoleResponse, UpdateEmployee, UpdateProduct, UpdateWarehouse, WarehouseResponse,
};
use crate::handlers::{employee, named, product, role, warehouse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Warehouse API", description = "Warehouses, employees, products and their lookup tables"),
    paths(
        employee::list,
        employee::list_by_warehouse,
        employee::read,
        employee::create,
        employee::update,
        employee::delete,
        warehouse::list,
        warehouse::read,
        warehouse::create,
        warehouse::update,
        warehouse::delete,
        named::list_categories,
        named::create_category,
        named::update_category,
        named::delete_category,
        named::list_sizes,
        named::create_size,
        named::update_size,
        named::delete_size,
        role::list,
        role::read,
        role::create,
        role::delete,
        product::list,
        product::read,
        product::create,
        product::update,
        product::delete,
    ),
    components(schemas(
        NameRequest,
        NamedResponse,
        CreateRole,
        RoleResponse,
        CreateWarehouse,
        UpdateWarehouse,
        WarehouseResponse,
        CreateEmployee,
        UpdateEmployee,
        EmployeeResponse,
        CreateProduct,
        UpdateProduct,
        ProductResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/v1/employees",
            "/api/v1/employees/{code}",
            "/api/v1/warehouses/{code}/employees",
            "/api/v1/categories/{id}",
            "/api/v1/sizes",
            "/api/v1/roles/{id}",
            "/api/v1/products/{id}",
        ] {
            assert!(paths.iter().any(|p| *p == expected), "missing {expected}");
        }
    }
}
