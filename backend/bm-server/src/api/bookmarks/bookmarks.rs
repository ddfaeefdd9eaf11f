//! Bookmark handlers
//!
//! Reads answer with JSON view models, writes answer with a 302 redirect.

use crate::{
    ApiError, ApiResult, AppState, BookmarkForm, BookmarkView, CurrentUser, EditBookmarkView,
    NewBookmarkView, UpdateBookmarkQuery, UserDto, api::redirect,
};

use bm_core::{Bookmark, UserId, is_mine};
use bm_db::BookmarkRepository;

use axum::{
    Json,
    extract::{
        Form, Path, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::Response,
};
use uuid::Uuid;

const NOT_FOUND_MESSAGE: &str = "bookmark not found";
const NOT_EDITABLE_MESSAGE: &str = "bookmark missing or not permitted to edit";
const INVALID_REQUEST_MESSAGE: &str = "invalid request";

/// GET /bookmarks/new
pub async fn show_create_form(CurrentUser(user): CurrentUser) -> Json<NewBookmarkView> {
    Json(NewBookmarkView::new(user.into()))
}

/// POST /bookmarks
pub async fn create_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    form: Result<Form<BookmarkForm>, FormRejection>,
) -> ApiResult<Response> {
    let Form(form) = form?;
    let input = form.into_input()?;

    let bookmark = Bookmark::new(input, user.id, &state.name_policy);
    BookmarkRepository::new(state.pool.clone())
        .create(&bookmark)
        .await?;

    log::info!("User {} created bookmark {}", user.id, bookmark.id);
    Ok(redirect::found(format!("/bookmarks/{}", bookmark.id)))
}

/// GET /bookmarks/{bookmark_id}
pub async fn show_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(bookmark_id): Path<String>,
) -> ApiResult<Json<BookmarkView>> {
    let id = parse_bookmark_id(&bookmark_id, NOT_FOUND_MESSAGE)?;

    let found = BookmarkRepository::new(state.pool.clone())
        .find_with_creator(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(BookmarkView::new(user, found)))
}

/// GET /bookmarks/{bookmark_id}/edit
pub async fn show_edit_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(bookmark_id): Path<String>,
) -> ApiResult<Json<EditBookmarkView>> {
    let repo = BookmarkRepository::new(state.pool.clone());
    let bookmark = find_owned(&repo, &bookmark_id, user.id).await?;

    Ok(Json(EditBookmarkView::new(
        UserDto::from(user),
        bookmark.into(),
    )))
}

/// POST /bookmarks/{bookmark_id}?edit=1
///
/// Ownership is checked before the edit flag and the body, so a caller
/// who does not own the bookmark always sees 404.
pub async fn update_bookmark(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(bookmark_id): Path<String>,
    query: Result<Query<UpdateBookmarkQuery>, QueryRejection>,
    form: Result<Form<BookmarkForm>, FormRejection>,
) -> ApiResult<Response> {
    let repo = BookmarkRepository::new(state.pool.clone());
    let mut bookmark = find_owned(&repo, &bookmark_id, user.id).await?;

    let query = query.map(|Query(q)| q).unwrap_or_default();
    if !query.is_edit_intent() {
        log::warn!("Update of bookmark {} without edit intent", bookmark.id);
        return Err(ApiError::bad_request(INVALID_REQUEST_MESSAGE));
    }

    let Form(form) = form?;
    let input = form.into_input()?;

    bookmark.apply_update(input, user.id, &state.name_policy);
    repo.update(&bookmark).await?;

    log::info!("User {} updated bookmark {}", user.id, bookmark.id);
    Ok(redirect::found("/"))
}

/// Load a bookmark the caller may edit. Missing and foreign bookmarks are
/// indistinguishable to the caller.
async fn find_owned(
    repo: &BookmarkRepository,
    bookmark_id: &str,
    user_id: UserId,
) -> ApiResult<Bookmark> {
    let id = parse_bookmark_id(bookmark_id, NOT_EDITABLE_MESSAGE)?;
    let bookmark = repo.find_by_id(id).await?;

    if !is_mine(user_id, bookmark.as_ref()) {
        log::warn!("User {} cannot edit bookmark {}", user_id, id);
        return Err(ApiError::not_found(NOT_EDITABLE_MESSAGE));
    }

    bookmark.ok_or_else(|| ApiError::not_found(NOT_EDITABLE_MESSAGE))
}

/// A malformed id can never match a stored bookmark
#[track_caller]
fn parse_bookmark_id(raw: &str, not_found_message: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(not_found_message))
}
