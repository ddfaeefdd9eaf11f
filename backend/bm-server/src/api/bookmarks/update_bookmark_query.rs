use serde::Deserialize;

/// Query string of the update route: `?edit=1`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookmarkQuery {
    pub edit: Option<String>,
}

impl UpdateBookmarkQuery {
    /// True only when `edit` parses as the integer 1
    pub fn is_edit_intent(&self) -> bool {
        self.edit
            .as_deref()
            .is_some_and(|value| value.trim().parse::<i64>() == Ok(1))
    }
}
