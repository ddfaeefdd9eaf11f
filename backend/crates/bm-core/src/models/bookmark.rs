use crate::{BookmarkInput, NamePolicy, UserId};

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: Uuid,

    pub name: String,
    pub url: String,
    pub memo: Option<String>,

    // Audit
    pub created_by: UserId,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(input: BookmarkInput, created_by: UserId, policy: &NamePolicy) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: policy.apply(input.name.as_deref()),
            url: input.url,
            memo: input.memo,
            created_by,
            updated_at: Utc::now(),
        }
    }

    /// Replace name/url/memo and stamp `updated_at`.
    ///
    /// `created_by` is re-asserted to `editor`. Callers only get here after
    /// `is_owned_by(editor)` held, so the creator does not change.
    pub fn apply_update(&mut self, input: BookmarkInput, editor: UserId, policy: &NamePolicy) {
        self.name = policy.apply(input.name.as_deref());
        self.url = input.url;
        self.memo = input.memo;
        self.created_by = editor;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.created_by == user_id
    }
}

/// True iff the bookmark exists and was created by `user_id`.
pub fn is_mine(user_id: UserId, bookmark: Option<&Bookmark>) -> bool {
    bookmark.is_some_and(|b| b.is_owned_by(user_id))
}
