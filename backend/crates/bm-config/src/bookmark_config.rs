use crate::{ConfigError, ConfigErrorResult};

use bm_core::{DEFAULT_UNTITLED_NAME, MAX_NAME_LENGTH, NamePolicy};

use serde::Deserialize;

/// How submitted bookmark names are stored
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookmarkConfig {
    pub untitled_name: String,
    pub max_name_length: usize,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            untitled_name: String::from(DEFAULT_UNTITLED_NAME),
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

impl BookmarkConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_name_length == 0 || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::bookmarks(format!(
                "bookmarks.max_name_length must be 1-{}, got {}",
                MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if self.untitled_name.is_empty() {
            return Err(ConfigError::bookmarks(
                "bookmarks.untitled_name cannot be empty",
            ));
        }

        if self.untitled_name.chars().count() > self.max_name_length {
            return Err(ConfigError::bookmarks(format!(
                "bookmarks.untitled_name must fit in {} characters",
                self.max_name_length
            )));
        }

        Ok(())
    }

    pub fn name_policy(&self) -> NamePolicy {
        NamePolicy::new(self.max_name_length, self.untitled_name.clone())
    }
}
