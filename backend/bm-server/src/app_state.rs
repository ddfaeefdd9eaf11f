use bm_auth::JwtValidator;
use bm_core::{NamePolicy, User};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` runs the server in development mode (no JWT required)
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// User assumed in development mode when no X-User-Id header is sent
    pub dev_user: User,
    pub name_policy: NamePolicy,
}
