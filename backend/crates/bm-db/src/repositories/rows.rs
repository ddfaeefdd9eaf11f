//! Raw row shapes and their conversion into domain types

use crate::{DbError, Result as DbErrorResult};

use bm_core::{Bookmark, BookmarkWithCreator, User, UserId};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BookmarkRow {
    pub id: String,
    pub name: String,
    pub url: String,
    pub memo: Option<String>,
    pub created_by: i64,
    pub updated_at: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BookmarkWithCreatorRow {
    #[sqlx(flatten)]
    pub bookmark: BookmarkRow,
    pub creator_username: String,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: String,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: BookmarkRow) -> DbErrorResult<Self> {
        let id = Uuid::parse_str(&row.id).map_err(|e| DbError::Decode {
            column: "bm_bookmarks.id",
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            id,
            name: row.name,
            url: row.url,
            memo: row.memo,
            created_by: UserId(row.created_by),
            updated_at: decode_millis(row.updated_at)?,
        })
    }
}

impl TryFrom<BookmarkWithCreatorRow> for BookmarkWithCreator {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: BookmarkWithCreatorRow) -> DbErrorResult<Self> {
        let bookmark = Bookmark::try_from(row.bookmark)?;
        let creator = User::new(bookmark.created_by, row.creator_username);

        Ok(Self { bookmark, creator })
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId(row.id), row.username)
    }
}

#[track_caller]
fn decode_millis(millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Decode {
        column: "bm_bookmarks.updated_at",
        message: format!("timestamp {} out of range", millis),
        location: ErrorLocation::from(Location::caller()),
    })
}
