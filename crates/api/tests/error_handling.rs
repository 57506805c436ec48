//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server or
//! a database -- they call `IntoResponse` directly on `AppError` values.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use sakila_api::error::AppError;
use sakila_core::error::CoreError;
use sakila_core::validation::FieldError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Film", 42));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Film with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::InvalidParams maps to 400 with the field list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_params_returns_400_with_field_errors() {
    let err = AppError::Core(CoreError::InvalidParams(vec![
        FieldError::query("q", None, "q is required (1–100 chars)"),
        FieldError::query("limit", Some("500"), "limit 1–100"),
    ]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let errors = json["errors"].as_array().expect("errors should be an array");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["type"], "field");
    assert_eq!(errors[0]["path"], "q");
    assert_eq!(errors[0]["location"], "query");
    assert!(errors[0]["value"].is_null());
    assert_eq!(errors[1]["value"], "500");
    assert_eq!(errors[1]["msg"], "limit 1–100");
}

// ---------------------------------------------------------------------------
// Test: sqlx RowNotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: pool exhaustion maps to 503
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pool_timeout_returns_503() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Test: other database errors map to 500 and sanitize the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::Protocol(
        "access denied for user 'root'@'10.0.0.3'".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json["error"].as_str().unwrap().contains("root"));
}

// ---------------------------------------------------------------------------
// Test: From conversions let handlers use `?`
// ---------------------------------------------------------------------------

#[test]
fn core_and_sqlx_errors_convert_into_app_error() {
    let from_core: AppError = CoreError::not_found("Actor", "abc").into();
    assert_matches!(from_core, AppError::Core(CoreError::NotFound { entity: "Actor", .. }));

    let from_sqlx: AppError = sqlx::Error::PoolClosed.into();
    assert_matches!(from_sqlx, AppError::Database(sqlx::Error::PoolClosed));
}
