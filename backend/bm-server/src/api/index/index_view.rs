use crate::{BookmarkDto, UserDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IndexView {
    pub view: &'static str,
    pub user: UserDto,
    /// Newest `updatedAt` first
    pub bookmarks: Vec<BookmarkDto>,
}
