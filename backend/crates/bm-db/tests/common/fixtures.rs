use bm_core::{Bookmark, BookmarkInput, NamePolicy, User, UserId};
use bm_db::UserRepository;

use sqlx::SqlitePool;

/// Inserts a user so bookmark foreign keys resolve
pub async fn create_test_user(pool: &SqlitePool, id: i64, username: &str) -> User {
    let user = User::new(UserId(id), username);
    UserRepository::new(pool.clone())
        .upsert(&user)
        .await
        .expect("Failed to create test user");
    user
}

/// Creates an unsaved Bookmark with sensible defaults
pub fn create_test_bookmark(created_by: UserId) -> Bookmark {
    let input = BookmarkInput::new(
        Some("Test Bookmark".to_string()),
        Some("https://example.com".to_string()),
        Some("Test memo".to_string()),
    )
    .expect("valid input");

    Bookmark::new(input, created_by, &NamePolicy::default())
}
