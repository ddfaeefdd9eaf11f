use bm_core::{BookmarkInput, Result as CoreErrorResult};

use serde::Deserialize;

/// Form body submitted by the create and edit pages
#[derive(Debug, Default, Deserialize)]
pub struct BookmarkForm {
    #[serde(rename = "bookmarkName")]
    pub bookmark_name: Option<String>,
    #[serde(rename = "bookmarkURL")]
    pub bookmark_url: Option<String>,
    pub memo: Option<String>,
}

impl BookmarkForm {
    #[track_caller]
    pub fn into_input(self) -> CoreErrorResult<BookmarkInput> {
        BookmarkInput::new(self.bookmark_name, self.bookmark_url, self.memo)
    }
}
