pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::bookmark_repository::BookmarkRepository;
pub use repositories::user_repository::UserRepository;

use sqlx::SqlitePool;

/// Embedded schema migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Bring the schema up to date
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
