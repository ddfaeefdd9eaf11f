use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_USER_ID,
    DEFAULT_DEV_USERNAME, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require a Bearer JWT on every bookmark route
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// User assumed when auth is disabled and no X-User-Id header is sent
    pub dev_user_id: i64,
    pub dev_username: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            dev_user_id: DEFAULT_DEV_USER_ID,
            dev_username: String::from(DEFAULT_DEV_USERNAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled {
            match &self.jwt_secret {
                None => {
                    return Err(ConfigError::auth(
                        "auth.enabled requires auth.jwt_secret to be set",
                    ));
                }
                Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
                Some(_) => {}
            }
        }

        if self.dev_user_id <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.dev_user_id must be positive, got {}",
                self.dev_user_id
            )));
        }

        if self.dev_username.trim().is_empty() {
            return Err(ConfigError::auth("auth.dev_username cannot be empty"));
        }

        Ok(())
    }
}
