pub mod bookmark;
pub mod bookmark_input;
pub mod bookmark_with_creator;
pub mod name_policy;
pub mod user;
pub mod user_id;
