//! One repository per entity. Fixed statements for full-row CRUD; the
//! partial-update path goes through [`crate::sql::PartialUpdate`].

mod employee;
mod named;
mod product;
mod role;
mod warehouse;

pub use employee::EmployeeRepository;
pub use named::NamedRepository;
pub use product::ProductRepository;
pub use role::RoleRepository;
pub use warehouse::WarehouseRepository;

use crate::dto::ListParams;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;

const MAX_LIMIT: u32 = 1000;

/// LIMIT/OFFSET for list queries. Rendered inline: both are clamped integers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    pub fn new(params: ListParams, default_limit: u32) -> Self {
        Page {
            limit: params.limit.unwrap_or(default_limit).min(MAX_LIMIT),
            offset: params.offset.unwrap_or(0),
        }
    }

    fn sql(&self) -> String {
        format!(" LIMIT {} OFFSET {}", self.limit, self.offset)
    }
}

fn decode_rows<T: DeserializeOwned>(entity: &'static str, rows: Vec<Value>) -> Result<Vec<T>, AppError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|source| AppError::Decode { entity, source }))
        .collect()
}

/// First row, or `NotFound` naming the key that was looked up.
fn decode_first<T: DeserializeOwned>(entity: &'static str, rows: Vec<Value>, key: impl Display) -> Result<T, AppError> {
    decode_rows(entity, rows)?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("{} '{}'", entity, key)))
}

/// Id from an `INSERT ... RETURNING id` row.
fn returned_id(entity: &'static str, rows: Vec<Value>) -> Result<i32, AppError> {
    #[derive(serde::Deserialize)]
    struct Returned {
        id: i32,
    }
    let row: Returned = decode_first(entity, rows, "returning id")?;
    Ok(row.id)
}

/// Zero rows affected means the targeted row does not exist.
fn ensure_affected(affected: u64, entity: &'static str, key: impl Display) -> Result<(), AppError> {
    if affected == 0 {
        return Err(AppError::NotFound(format!("{} '{}'", entity, key)));
    }
    Ok(())
}
