use crate::Result as DbErrorResult;
use crate::repositories::rows::{BookmarkRow, BookmarkWithCreatorRow};

use bm_core::{Bookmark, BookmarkWithCreator, UserId};

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct BookmarkRepository {
    pool: SqlitePool,
}

impl BookmarkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, bookmark: &Bookmark) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO bm_bookmarks (
                  id, name, url, memo, created_by, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(bookmark.id.to_string())
        .bind(&bookmark.name)
        .bind(&bookmark.url)
        .bind(&bookmark.memo)
        .bind(bookmark.created_by.as_i64())
        .bind(bookmark.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Bookmark>> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
              SELECT id, name, url, memo, created_by, updated_at
              FROM bm_bookmarks
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Bookmark::try_from).transpose()
    }

    /// Look up a bookmark together with its creator.
    ///
    /// Newest `updated_at` wins should the lookup ever match more than one row.
    pub async fn find_with_creator(&self, id: Uuid) -> DbErrorResult<Option<BookmarkWithCreator>> {
        let row = sqlx::query_as::<_, BookmarkWithCreatorRow>(
            r#"
              SELECT b.id, b.name, b.url, b.memo, b.created_by, b.updated_at,
                     u.username AS creator_username
              FROM bm_bookmarks b
              INNER JOIN users u ON u.id = b.created_by
              WHERE b.id = ?
              ORDER BY b.updated_at DESC
              LIMIT 1
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(BookmarkWithCreator::try_from).transpose()
    }

    pub async fn find_by_creator(&self, user_id: UserId) -> DbErrorResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            r#"
              SELECT id, name, url, memo, created_by, updated_at
              FROM bm_bookmarks
              WHERE created_by = ?
              ORDER BY updated_at DESC
              "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Bookmark::try_from).collect()
    }

    /// Overwrite the mutable columns. No version check: the last write wins.
    pub async fn update(&self, bookmark: &Bookmark) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE bm_bookmarks
              SET name = ?, url = ?, memo = ?, created_by = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&bookmark.name)
        .bind(&bookmark.url)
        .bind(&bookmark.memo)
        .bind(bookmark.created_by.as_i64())
        .bind(bookmark.updated_at.timestamp_millis())
        .bind(bookmark.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
