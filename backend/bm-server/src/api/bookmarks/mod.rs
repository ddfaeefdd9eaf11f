pub mod bookmark_dto;
pub mod bookmark_form;
pub mod bookmark_view;
pub mod bookmarks;
pub mod edit_bookmark_view;
pub mod new_bookmark_view;
pub mod update_bookmark_query;
pub mod user_dto;
