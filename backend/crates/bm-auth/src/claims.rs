use crate::{AuthError, Result as AuthErrorResult};

use bm_core::{User, UserId};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims issued by the login service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: numeric user id
    pub sub: String,
    /// Username shown next to bookmarks
    pub name: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id()?;

        if self.name.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "name".to_string(),
                message: "name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<UserId> {
        self.sub.parse().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub must be a positive integer user id, got '{}'", self.sub),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// The authenticated user these claims describe
    #[track_caller]
    pub fn user(&self) -> AuthErrorResult<User> {
        Ok(User::new(self.user_id()?, self.name.trim()))
    }
}
