//! Application root

use crate::{ApiResult, AppState, BookmarkDto, CurrentUser, IndexView};

use bm_db::BookmarkRepository;

use axum::{Json, extract::State};

/// GET /
pub async fn index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<IndexView>> {
    let bookmarks = BookmarkRepository::new(state.pool.clone())
        .find_by_creator(user.id)
        .await?;

    Ok(Json(IndexView {
        view: "index",
        user: user.into(),
        bookmarks: bookmarks.into_iter().map(BookmarkDto::from).collect(),
    }))
}
