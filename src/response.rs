//! Standard response envelope helpers: `{status, message, data}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

fn envelope<T: Serialize>(status: StatusCode, data: Option<T>) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse {
            status: status.as_u16(),
            message: "success".to_string(),
            data,
        }),
    )
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    envelope(StatusCode::OK, Some(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    envelope(StatusCode::CREATED, Some(data))
}

/// Success without a payload (`data: null`), used after update and delete.
pub fn success_empty() -> (StatusCode, Json<ApiResponse<()>>) {
    envelope(StatusCode::OK, None)
}
