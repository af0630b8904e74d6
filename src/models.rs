//! Storage rows, decoded from the JSON objects the executor returns.

use serde::Deserialize;
use uuid::Uuid;

/// Row of a lookup table with an integer id and a name (category, size).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Named {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Role {
    pub id: i32,
    pub role_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Warehouse {
    #[serde(default)]
    pub id: i32,
    pub warehouse_name: String,
    pub warehouse_code: Uuid,
    #[serde(default)]
    pub location_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Employee {
    #[serde(default)]
    pub id: i32,
    pub user_id: String,
    pub employee_name: String,
    pub employee_code: String,
    pub id_role: i32,
    pub warehouse_code: Uuid,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub price: i64,
    #[serde(default)]
    pub description_product: Option<String>,
    pub product_code: String,
    pub id_category: i32,
}

pub struct NewWarehouse {
    pub warehouse_name: String,
    pub warehouse_code: Uuid,
    pub location_description: String,
}

pub struct NewEmployee {
    pub user_id: String,
    pub employee_name: String,
    pub password_hash: String,
    pub employee_code: String,
    pub id_role: i32,
    pub warehouse_code: Uuid,
}

pub struct NewProduct {
    pub product_name: String,
    pub price: i64,
    pub description_product: Option<String>,
    pub product_code: String,
    pub id_category: i32,
}
