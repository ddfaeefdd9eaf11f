//! Axum extractor for the authenticated user

use crate::{ApiError, AppState};

use bm_auth::{JwtValidator, extract_bearer_token};
use bm_core::{User, UserId};
use bm_db::UserRepository;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

const USER_ID_HEADER: &str = "X-User-Id";
const USERNAME_HEADER: &str = "X-Username";

/// The user a request is made on behalf of.
///
/// With a JWT validator configured, a valid `Authorization: Bearer` token is
/// required and the request is rejected with 401 otherwise. Without one
/// (development mode) the `X-User-Id` / `X-Username` headers are trusted,
/// falling back to the configured development user.
///
/// The user row is written so bookmark lookups can join on it. A username
/// only overwrites the stored one when the request actually supplied it.
pub struct CurrentUser(pub User);

/// Identity resolved from the request, before it is persisted
enum Identity {
    /// Username came from the token, a header or configuration
    Named(User),
    /// Only the id is known; the stored username is kept
    IdOnly(User),
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let identity = match &state.jwt_validator {
                Some(validator) => {
                    Identity::Named(authenticate_bearer(&parts.headers, validator)?)
                }
                None => development_identity(&parts.headers, &state.dev_user),
            };

            let repo = UserRepository::new(state.pool.clone());
            let user = match identity {
                Identity::Named(user) => {
                    repo.upsert(&user).await?;
                    user
                }
                Identity::IdOnly(user) => repo.ensure_exists(&user).await?,
            };

            Ok(CurrentUser(user))
        }
    }
}

fn authenticate_bearer(headers: &HeaderMap, validator: &JwtValidator) -> Result<User, ApiError> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = extract_bearer_token(header_value)?;
    let claims = validator.validate(token)?;
    let user = claims.user()?;

    log::debug!("Authenticated user {} via JWT", user.id);
    Ok(user)
}

fn development_identity(headers: &HeaderMap, fallback: &User) -> Identity {
    let Some(raw_id) = headers.get(USER_ID_HEADER).and_then(|h| h.to_str().ok()) else {
        log::debug!("Using development user {}", fallback.id);
        return Identity::Named(fallback.clone());
    };

    let id = match raw_id.parse::<UserId>() {
        Ok(id) => id,
        Err(_) => {
            log::warn!("Invalid user id in {} header: {}", USER_ID_HEADER, raw_id);
            return Identity::Named(fallback.clone());
        }
    };

    log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, id);

    let username = headers
        .get(USERNAME_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty());

    match username {
        Some(name) => Identity::Named(User::new(id, name)),
        None => Identity::IdOnly(User::new(id, format!("user-{}", id))),
    }
}
