use crate::{ApiError, AppState, CurrentUser};

use bm_auth::JwtValidator;
use bm_core::{NamePolicy, User, UserId};
use bm_db::UserRepository;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

const SECRET: &[u8] = b"extractor-test-secret-with-32-bytes!";

async fn create_test_state(jwt_validator: Option<Arc<JwtValidator>>) -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test pool");

    bm_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        jwt_validator,
        dev_user: User::new(UserId(1), "developer"),
        name_policy: NamePolicy::default(),
    }
}

async fn extract(state: &AppState, request: Request<Body>) -> Result<CurrentUser, ApiError> {
    let (mut parts, _body) = request.into_parts();
    CurrentUser::from_request_parts(&mut parts, state).await
}

fn token(sub: &str, name: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = json!({ "sub": sub, "name": name, "iat": now, "exp": now + 3600 });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "42")
        .header("X-Username", "alice")
        .body(Body::empty())
        .unwrap();

    let CurrentUser(user) = extract(&state, request).await.unwrap();

    assert_eq!(user, User::new(UserId(42), "alice"));
}

#[tokio::test]
async fn test_extractor_defaults_username_from_id() {
    let state = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "42")
        .body(Body::empty())
        .unwrap();

    let CurrentUser(user) = extract(&state, request).await.unwrap();

    assert_eq!(user.username, "user-42");
}

#[tokio::test]
async fn test_extractor_falls_back_to_dev_user_when_missing() {
    let state = create_test_state(None).await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let CurrentUser(user) = extract(&state, request).await.unwrap();

    assert_eq!(user, state.dev_user);
}

#[tokio::test]
async fn test_extractor_falls_back_when_header_invalid() {
    let state = create_test_state(None).await;

    for value in ["not-a-number", "0", "-5"] {
        let request = Request::builder()
            .header("X-User-Id", value)
            .body(Body::empty())
            .unwrap();

        let CurrentUser(user) = extract(&state, request).await.unwrap();

        assert_eq!(user, state.dev_user);
    }
}

#[tokio::test]
async fn test_extractor_upserts_user() {
    let state = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "42")
        .header("X-Username", "alice")
        .body(Body::empty())
        .unwrap();

    extract(&state, request).await.unwrap();

    let stored = UserRepository::new(state.pool.clone())
        .find_by_id(UserId(42))
        .await
        .unwrap();
    assert_eq!(stored, Some(User::new(UserId(42), "alice")));
}

#[tokio::test]
async fn test_extractor_without_username_keeps_stored_name() {
    let state = create_test_state(None).await;
    UserRepository::new(state.pool.clone())
        .upsert(&User::new(UserId(42), "alice"))
        .await
        .unwrap();
    let request = Request::builder()
        .header("X-User-Id", "42")
        .body(Body::empty())
        .unwrap();

    let CurrentUser(user) = extract(&state, request).await.unwrap();

    assert_eq!(user, User::new(UserId(42), "alice"));
    let stored = UserRepository::new(state.pool.clone())
        .find_by_id(UserId(42))
        .await
        .unwrap();
    assert_eq!(stored, Some(User::new(UserId(42), "alice")));
}

#[tokio::test]
async fn test_extractor_with_username_renames_stored_user() {
    let state = create_test_state(None).await;
    UserRepository::new(state.pool.clone())
        .upsert(&User::new(UserId(42), "alice"))
        .await
        .unwrap();
    let request = Request::builder()
        .header("X-User-Id", "42")
        .header("X-Username", "alice2")
        .body(Body::empty())
        .unwrap();

    let CurrentUser(user) = extract(&state, request).await.unwrap();

    assert_eq!(user.username, "alice2");
}

#[tokio::test]
async fn test_extractor_with_valid_jwt() {
    let state = create_test_state(Some(Arc::new(JwtValidator::with_hs256(SECRET)))).await;
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token("7", "alice")))
        .body(Body::empty())
        .unwrap();

    let CurrentUser(user) = extract(&state, request).await.unwrap();

    assert_eq!(user, User::new(UserId(7), "alice"));
}

#[tokio::test]
async fn test_extractor_ignores_dev_headers_when_jwt_enabled() {
    let state = create_test_state(Some(Arc::new(JwtValidator::with_hs256(SECRET)))).await;
    let request = Request::builder()
        .header("X-User-Id", "42")
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_jwt_with_wrong_secret() {
    let state = create_test_state(Some(Arc::new(JwtValidator::with_hs256(
        b"a-completely-different-secret-of-32b",
    ))))
    .await;
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token("7", "alice")))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_jwt_with_non_numeric_subject() {
    let state = create_test_state(Some(Arc::new(JwtValidator::with_hs256(SECRET)))).await;
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token("alice", "alice")))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
