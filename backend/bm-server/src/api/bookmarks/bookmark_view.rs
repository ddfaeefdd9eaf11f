use crate::{BookmarkDto, UserDto};

use bm_core::{BookmarkWithCreator, User};

use serde::Serialize;

/// Model for the detail page
#[derive(Debug, Serialize)]
pub struct BookmarkView {
    pub view: &'static str,
    pub user: UserDto,
    pub bookmark: BookmarkDto,
    pub creator: UserDto,
    /// Users listed on the page; currently just the viewer
    pub users: Vec<UserDto>,
}

impl BookmarkView {
    pub fn new(viewer: User, found: BookmarkWithCreator) -> Self {
        let user = UserDto::from(viewer);

        Self {
            view: "bookmark",
            users: vec![user.clone()],
            user,
            bookmark: found.bookmark.into(),
            creator: found.creator.into(),
        }
    }
}
