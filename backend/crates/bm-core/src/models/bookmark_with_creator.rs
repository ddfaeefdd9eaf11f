use crate::{Bookmark, User};

/// A bookmark joined with the user that created it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkWithCreator {
    pub bookmark: Bookmark,
    pub creator: User,
}
