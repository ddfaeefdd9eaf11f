use crate::{BookmarkDto, UserDto};

use serde::Serialize;

/// Model for the edit form, pre-populated with the stored bookmark
#[derive(Debug, Serialize)]
pub struct EditBookmarkView {
    pub view: &'static str,
    pub user: UserDto,
    pub bookmark: BookmarkDto,
}

impl EditBookmarkView {
    pub fn new(user: UserDto, bookmark: BookmarkDto) -> Self {
        Self {
            view: "edit",
            user,
            bookmark,
        }
    }
}
