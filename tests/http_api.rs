mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use common::{state_with, RecordingExecutor};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;
use uuid::Uuid;
use warehouse_api::build_router;

const TIMEOUT: Duration = Duration::from_secs(5);
const BODY_LIMIT: usize = 64 * 1024;

async fn send(app: axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn patch_warehouse_returns_success_envelope() {
    let db = RecordingExecutor::new();
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let uri = format!("/api/v1/warehouses/{}", Uuid::new_v4());
    let (status, body) = send(app, Method::PATCH, &uri, Some(json!({ "warehouse_name": "North" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "success");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn patch_missing_warehouse_is_404() {
    let db = RecordingExecutor::new();
    db.push_execute(Ok(0));
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let uri = format!("/api/v1/warehouses/{}", Uuid::new_v4());
    let (status, body) = send(app, Method::PATCH, &uri, Some(json!({ "warehouse_name": "North" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn patch_with_unknown_field_is_400() {
    let db = RecordingExecutor::new();
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let uri = format!("/api/v1/warehouses/{}", Uuid::new_v4());
    let (status, _) = send(app, Method::PATCH, &uri, Some(json!({ "warehouse_code": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn patch_with_nothing_to_update_is_400() {
    let db = RecordingExecutor::new();
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let uri = format!("/api/v1/warehouses/{}", Uuid::new_v4());
    let (status, body) = send(app, Method::PATCH, &uri, Some(json!({ "warehouse_name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "no valid fields to update");
}

#[tokio::test]
async fn malformed_warehouse_code_is_400() {
    let db = RecordingExecutor::new();
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let (status, _) = send(app, Method::GET, "/api/v1/warehouses/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_categories_applies_paging() {
    let db = RecordingExecutor::new();
    db.push_rows(vec![json!({ "id": 1, "name": "Shoes" }), json!({ "id": 2, "name": "Shirts" })]);
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let (status, body) = send(app, Method::GET, "/api/v1/categories?limit=2&offset=4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][1]["name"], "Shirts");
    assert_eq!(db.last_call().sql, "SELECT id, name FROM category ORDER BY id LIMIT 2 OFFSET 4");
}

#[tokio::test]
async fn create_category_validates_length() {
    let db = RecordingExecutor::new();
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let (status, body) = send(app, Method::POST, "/api/v1/categories", Some(json!({ "name": "ab" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn create_warehouse_returns_201_with_generated_code() {
    let db = RecordingExecutor::new();
    db.push_rows(vec![json!({ "id": 5 })]);
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let body = json!({
        "warehouse_name": "Central",
        "location_description": "Industrial park, building 7, gate B"
    });
    let (status, body) = send(app, Method::POST, "/api/v1/warehouses", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let code = body["data"]["warehouse_code"].as_str().unwrap();
    assert!(Uuid::parse_str(code).is_ok());
}

#[tokio::test]
async fn employee_response_has_no_password() {
    let db = RecordingExecutor::new();
    db.push_rows(vec![json!({
        "id": 1,
        "user_id": "u-1",
        "employee_name": "Dana",
        "employee_code": "EMP-1",
        "id_role": 2,
        "warehouse_code": Uuid::new_v4().to_string()
    })]);
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let (status, body) = send(app, Method::GET, "/api/v1/employees/EMP-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Dana");
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn zero_timeout_maps_to_504() {
    let db = RecordingExecutor::new();
    let app = build_router(state_with(&db, Duration::ZERO), BODY_LIMIT);
    let (status, body) = send(app, Method::DELETE, "/api/v1/products/3", None).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["status"], 504);
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn shutdown_cancels_requests_with_408() {
    let db = RecordingExecutor::new();
    let state = state_with(&db, TIMEOUT);
    state.shutdown.cancel();
    let app = build_router(state, BODY_LIMIT);
    let (status, _) = send(app, Method::GET, "/api/v1/roles", None).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn database_failure_hides_details() {
    let db = RecordingExecutor::new();
    db.push_query_error(sqlx::Error::PoolTimedOut);
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let (status, body) = send(app, Method::GET, "/api/v1/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
}

#[tokio::test]
async fn health_and_ready() {
    let db = RecordingExecutor::new();
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let (status, body) = send(app.clone(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _) = send(app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(db.last_call().sql, "SELECT 1");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let db = RecordingExecutor::new();
    let app = build_router(state_with(&db, TIMEOUT), BODY_LIMIT);
    let (status, body) = send(app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/warehouses/{code}"].is_object());
}
