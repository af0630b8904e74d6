//! Field rules for request bodies.

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub enum Format {
    Uuid,
}

/// Constraints on one string field. Lengths count characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
}

impl FieldRule {
    pub const fn length(min: usize, max: usize) -> Self {
        FieldRule {
            min_length: Some(min),
            max_length: Some(max),
            format: None,
        }
    }

    pub const fn min_length(min: usize) -> Self {
        FieldRule {
            min_length: Some(min),
            max_length: None,
            format: None,
        }
    }

    pub const fn uuid() -> Self {
        FieldRule {
            min_length: None,
            max_length: None,
            format: Some(Format::Uuid),
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Required field: must be non-empty and satisfy the rule.
    pub fn check(col: &str, value: &str, rule: &FieldRule) -> Result<(), AppError> {
        if value.is_empty() {
            return Err(AppError::Validation(format!("{} is required", col)));
        }
        validate_field(col, value, rule)
    }

    /// Optional field of a partial update. Absent or empty values are not
    /// validated because the merge policy drops them.
    pub fn check_optional(col: &str, value: Option<&str>, rule: &FieldRule) -> Result<(), AppError> {
        match value {
            Some(v) if !v.is_empty() => validate_field(col, v, rule),
            _ => Ok(()),
        }
    }

    pub fn check_minimum(col: &str, value: i64, min: i64) -> Result<(), AppError> {
        if value < min {
            return Err(AppError::Validation(format!("{} must be at least {}", col, min)));
        }
        Ok(())
    }
}

fn validate_field(col: &str, v: &str, rule: &FieldRule) -> Result<(), AppError> {
    if let Some(format) = rule.format {
        validate_format(col, v, format)?;
    }
    let len = v.chars().count();
    if let Some(max) = rule.max_length {
        if len > max {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                col, max
            )));
        }
    }
    if let Some(min) = rule.min_length {
        if len < min {
            return Err(AppError::Validation(format!(
                "{} must be at least {} characters",
                col, min
            )));
        }
    }
    Ok(())
}

fn validate_format(col: &str, v: &str, format: Format) -> Result<(), AppError> {
    match format {
        Format::Uuid => {
            if uuid::Uuid::parse_str(v).is_err() {
                return Err(AppError::Validation(format!("{} must be a valid UUID", col)));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldRule = FieldRule::length(3, 23);

    #[test]
    fn required_field_rejects_empty() {
        let err = RequestValidator::check("name", "", &NAME).unwrap_err();
        assert_eq!(err.to_string(), "validation: name is required");
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(RequestValidator::check("name", "abc", &NAME).is_ok());
        assert!(RequestValidator::check("name", &"x".repeat(23), &NAME).is_ok());
        assert!(RequestValidator::check("name", "ab", &NAME).is_err());
        assert!(RequestValidator::check("name", &"x".repeat(24), &NAME).is_err());
    }

    #[test]
    fn multibyte_characters_count_once() {
        assert!(RequestValidator::check("name", "äöü", &NAME).is_ok());
    }

    #[test]
    fn optional_empty_is_not_validated() {
        assert!(RequestValidator::check_optional("name", None, &NAME).is_ok());
        assert!(RequestValidator::check_optional("name", Some(""), &NAME).is_ok());
        assert!(RequestValidator::check_optional("name", Some("ab"), &NAME).is_err());
    }

    #[test]
    fn uuid_format() {
        let rule = FieldRule::uuid();
        assert!(RequestValidator::check("warehouse_code", "not-a-uuid", &rule).is_err());
        assert!(RequestValidator::check("warehouse_code", "67e55044-10b1-426f-9247-bb680e5fe0c8", &rule).is_ok());
    }

    #[test]
    fn minimum() {
        assert!(RequestValidator::check_minimum("price", -1, 0).is_err());
        assert!(RequestValidator::check_minimum("price", 0, 0).is_ok());
    }
}
