//! Tests for `PageError` / `ApiError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly and need no database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use marquee_api::error::{ApiError, AppError, PageError};
use marquee_core::error::CoreError;

async fn to_parts(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Fyyur pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_record_renders_404_page() {
    let err = PageError(AppError::Core(CoreError::NotFound {
        entity: "Venue",
        id: 42,
    }));

    let (status, json) = to_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["template"], "errors/404.html");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn row_not_found_counts_as_not_found() {
    let err = PageError::from(sqlx::Error::RowNotFound);
    let (status, _) = to_parts(err.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_submission_renders_422_page() {
    let err = PageError(AppError::Unprocessable("bad form".into()));
    let (status, json) = to_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["template"], "errors/422.html");
}

#[tokio::test]
async fn internal_failure_renders_500_page() {
    let err = PageError(AppError::InternalError("no path parameters for route".into()));
    let (status, json) = to_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["template"], "errors/500.html");
    assert!(!json.to_string().contains("path parameters"));
}

// ---------------------------------------------------------------------------
// Trivia API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_not_found_body() {
    let (status, json) = to_parts(ApiError::not_found("question 7").into_response()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        serde_json::json!({ "success": false, "error": 404, "message": "resource not found" })
    );
}

#[tokio::test]
async fn api_validation_error_is_unprocessable() {
    let err = ApiError::from(CoreError::Validation("difficulty out of range".into()));
    let (status, json) = to_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
}

#[tokio::test]
async fn api_database_failure_is_unprocessable() {
    let err = ApiError::from(sqlx::Error::PoolTimedOut);
    let (status, json) = to_parts(err.into_response()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn api_method_not_allowed_body() {
    let (status, json) = to_parts(ApiError::MethodNotAllowed.into_response()).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], 405);
    assert_eq!(json["message"], "method not allowed");
}
