//! HTTP handlers, one module per entity.

pub mod employee;
pub mod named;
pub mod product;
pub mod role;
pub mod warehouse;

use crate::error::AppError;
use uuid::Uuid;

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

fn parse_uuid(code: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(code).map_err(|_| AppError::BadRequest(format!("invalid uuid '{}'", code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("4x"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id(""), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn codes_must_be_uuids() {
        assert!(parse_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
        assert!(matches!(parse_uuid("warehouse-1"), Err(AppError::BadRequest(_))));
    }
}
