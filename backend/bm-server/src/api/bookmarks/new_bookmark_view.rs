use crate::UserDto;

use serde::Serialize;

/// Model for the create form
#[derive(Debug, Serialize)]
pub struct NewBookmarkView {
    pub view: &'static str,
    pub user: UserDto,
}

impl NewBookmarkView {
    pub fn new(user: UserDto) -> Self {
        Self { view: "new", user }
    }
}
