use crate::ApiError;

use bm_auth::AuthError;
use bm_core::CoreError;
use bm_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("bookmark not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "bookmark not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "bookmark URL is required".into(),
        field: Some("bookmarkURL".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "bookmarkURL");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, json) = body_json(ApiError::bad_request("invalid request")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "invalid request");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_db_error_converts_to_internal_without_details() {
    let db_error = DbError::Decode {
        column: "bm_bookmarks.id",
        message: "invalid uuid".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn test_core_validation_error_keeps_field() {
    let core_error = CoreError::Validation {
        message: "bookmark URL is required".into(),
        field: Some("bookmarkURL".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = core_error.into();

    assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(
        api_error,
        ApiError::Validation { field: Some(ref f), .. } if f == "bookmarkURL"
    ));
}

#[test]
fn test_auth_error_converts_to_unauthorized() {
    let auth_error = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = auth_error.into();

    assert_eq!(api_error.status(), StatusCode::UNAUTHORIZED);
}
