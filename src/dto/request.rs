use crate::sql::FieldSet;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Body for creating or renaming a category or size.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRole {
    pub role_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWarehouse {
    pub warehouse_name: String,
    pub location_description: String,
}

/// Partial update; omitted, null and empty fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateWarehouse {
    pub warehouse_name: Option<String>,
    pub location_description: Option<String>,
}

impl UpdateWarehouse {
    pub fn into_fields(self) -> FieldSet {
        FieldSet::new()
            .with("warehouse_name", self.warehouse_name)
            .with("location_description", self.location_description)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmployee {
    pub employee_name: String,
    pub password: String,
    pub id_role: i32,
    pub warehouse_code: String,
}

/// Partial update. A role id of 0 counts as not provided.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployee {
    pub employee_name: Option<String>,
    pub password: Option<String>,
    pub id_role: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub product_name: String,
    pub price: i64,
    pub description_product: Option<String>,
    pub id_category: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    pub product_name: Option<String>,
    pub price: Option<i64>,
    pub description_product: Option<String>,
    pub id_category: Option<i32>,
}

impl UpdateProduct {
    pub fn into_fields(self) -> FieldSet {
        FieldSet::new()
            .with("product_name", self.product_name)
            .with("price", self.price)
            .with("description_product", self.description_product)
            .with("id_category", self.id_category)
    }
}

/// `?limit=&offset=` on list endpoints.
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
