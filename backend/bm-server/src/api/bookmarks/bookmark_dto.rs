use bm_core::Bookmark;

use serde::Serialize;

/// Wire shape of a stored bookmark
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkDto {
    pub bookmark_id: String,
    pub bookmark_name: String,
    #[serde(rename = "bookmarkURL")]
    pub bookmark_url: String,
    pub memo: Option<String>,
    pub created_by: i64,
    /// Unix milliseconds
    pub updated_at: i64,
}

impl From<Bookmark> for BookmarkDto {
    fn from(b: Bookmark) -> Self {
        Self {
            bookmark_id: b.id.to_string(),
            bookmark_name: b.name,
            bookmark_url: b.url,
            memo: b.memo,
            created_by: b.created_by.as_i64(),
            updated_at: b.updated_at.timestamp_millis(),
        }
    }
}
