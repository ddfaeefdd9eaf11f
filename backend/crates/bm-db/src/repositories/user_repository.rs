use crate::Result as DbErrorResult;
use crate::repositories::rows::UserRow;

use bm_core::{User, UserId};

use sqlx::SqlitePool;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the user, or refresh the username if the id is already known.
    pub async fn upsert(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, username) VALUES (?, ?)
              ON CONFLICT(id) DO UPDATE SET username = excluded.username
              "#,
        )
        .bind(user.id.as_i64())
        .bind(&user.username)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert the user unless the id is already known, then return the stored row.
    ///
    /// An existing username is never overwritten.
    pub async fn ensure_exists(&self, user: &User) -> DbErrorResult<User> {
        sqlx::query(
            r#"
              INSERT INTO users (id, username) VALUES (?, ?)
              ON CONFLICT(id) DO NOTHING
              "#,
        )
        .bind(user.id.as_i64())
        .bind(&user.username)
        .execute(&self.pool)
        .await?;

        Ok(self
            .find_by_id(user.id)
            .await?
            .unwrap_or_else(|| user.clone()))
    }

    pub async fn find_by_id(&self, id: UserId) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, username FROM users WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(User::from))
    }
}
