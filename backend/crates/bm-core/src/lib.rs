pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::bookmark::{Bookmark, is_mine};
pub use models::bookmark_input::BookmarkInput;
pub use models::bookmark_with_creator::BookmarkWithCreator;
pub use models::name_policy::{DEFAULT_UNTITLED_NAME, MAX_NAME_LENGTH, NamePolicy};
pub use models::user::User;
pub use models::user_id::UserId;
