pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    bookmarks::{
        bookmark_dto::BookmarkDto,
        bookmark_form::BookmarkForm,
        bookmark_view::BookmarkView,
        bookmarks::{
            create_bookmark, show_bookmark, show_create_form, show_edit_form, update_bookmark,
        },
        edit_bookmark_view::EditBookmarkView,
        new_bookmark_view::NewBookmarkView,
        update_bookmark_query::UpdateBookmarkQuery,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    index::{index::index, index_view::IndexView},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
