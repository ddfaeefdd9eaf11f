use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

/// Fields a user submits when creating or replacing a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkInput {
    pub name: Option<String>,
    pub url: String,
    pub memo: Option<String>,
}

impl BookmarkInput {
    /// Build an input, rejecting a missing or empty url.
    #[track_caller]
    pub fn new(
        name: Option<String>,
        url: Option<String>,
        memo: Option<String>,
    ) -> CoreErrorResult<Self> {
        let url = match url {
            Some(url) if !url.is_empty() => url,
            _ => {
                return Err(CoreError::Validation {
                    message: "bookmark URL is required".to_string(),
                    field: Some("bookmarkURL".to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(Self { name, url, memo })
    }
}
