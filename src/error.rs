//! Typed errors and HTTP mapping.

use crate::response::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for foreign_key_violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failure reported by the relational store, before operation context is attached.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("operation cancelled")]
    Cancelled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("column '{0}' is not allowed to be updated")]
    DisallowedColumn(String),
    #[error("no valid fields to update")]
    NoFieldsToUpdate,
    #[error("{0} not found")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("failed to {operation} {entity}: {source}")]
    Execution {
        operation: &'static str,
        entity: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to decode {entity} row: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("password hashing: {0}")]
    Hash(String),
    #[error("request cancelled")]
    Cancelled,
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

impl AppError {
    /// Attach operation context to a store failure. Cancellation and deadline
    /// keep their identity; unique and foreign-key violations become `Conflict`.
    pub fn store(operation: &'static str, entity: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::Cancelled => AppError::Cancelled,
            StoreError::DeadlineExceeded => AppError::DeadlineExceeded,
            StoreError::Db(source) => {
                let code = source
                    .as_database_error()
                    .and_then(|db| db.code())
                    .map(|code| code.into_owned());
                match code.as_deref() {
                    Some(UNIQUE_VIOLATION) => AppError::Conflict(format!("{} already exists", entity)),
                    Some(FOREIGN_KEY_VIOLATION) => AppError::Conflict(format!(
                        "{} references a missing row or is still referenced",
                        entity
                    )),
                    _ => AppError::Execution {
                        operation,
                        entity,
                        source,
                    },
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DisallowedColumn(_) => StatusCode::BAD_REQUEST,
            AppError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Execution { .. } | AppError::Decode { .. } | AppError::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Cancelled => StatusCode::REQUEST_TIMEOUT,
            AppError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() && status != StatusCode::GATEWAY_TIMEOUT {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        let body: ApiResponse<()> = ApiResponse {
            status: status.as_u16(),
            message,
            data: None,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_and_deadline_keep_identity() {
        assert!(matches!(
            AppError::store("update", "warehouse", StoreError::Cancelled),
            AppError::Cancelled
        ));
        assert!(matches!(
            AppError::store("update", "warehouse", StoreError::DeadlineExceeded),
            AppError::DeadlineExceeded
        ));
    }

    #[test]
    fn driver_failure_becomes_execution_with_context() {
        let err = AppError::store("delete", "size", StoreError::Db(sqlx::Error::PoolTimedOut));
        match &err {
            AppError::Execution { operation, entity, .. } => {
                assert_eq!(*operation, "delete");
                assert_eq!(*entity, "size");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[derive(Debug)]
    struct PgStateError(&'static str);

    impl std::fmt::Display for PgStateError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sqlstate {}", self.0)
        }
    }

    impl std::error::Error for PgStateError {}

    impl sqlx::error::DatabaseError for PgStateError {
        fn message(&self) -> &str {
            "constraint violated"
        }

        fn code(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.0.into())
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    fn db_error(code: &'static str) -> StoreError {
        StoreError::Db(sqlx::Error::Database(Box::new(PgStateError(code))))
    }

    #[test]
    fn constraint_violations_become_conflict() {
        let unique = AppError::store("save", "warehouse", db_error(UNIQUE_VIOLATION));
        assert!(matches!(unique, AppError::Conflict(_)));

        let missing_parent = AppError::store("save", "employee", db_error(FOREIGN_KEY_VIOLATION));
        assert!(matches!(missing_parent, AppError::Conflict(_)));
        assert_eq!(missing_parent.status(), StatusCode::CONFLICT);

        let other = AppError::store("save", "product", db_error("23502"));
        assert!(matches!(other, AppError::Execution { .. }));
    }

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::NotFound("warehouse".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NoFieldsToUpdate.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::DisallowedColumn("extra".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Cancelled.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(AppError::DeadlineExceeded.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(AppError::Validation("x".into()).status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
