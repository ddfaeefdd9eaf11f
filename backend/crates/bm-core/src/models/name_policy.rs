/// Upper bound of the stored name column
pub const MAX_NAME_LENGTH: usize = 255;
/// Name stored when the submitted one is absent or empty
pub const DEFAULT_UNTITLED_NAME: &str = "(untitled)";

/// How a submitted bookmark name becomes the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePolicy {
    /// Maximum number of characters kept
    pub max_length: usize,
    /// Placeholder used when nothing is left after truncation
    pub untitled: String,
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            max_length: MAX_NAME_LENGTH,
            untitled: DEFAULT_UNTITLED_NAME.to_string(),
        }
    }
}

impl NamePolicy {
    pub fn new(max_length: usize, untitled: impl Into<String>) -> Self {
        Self {
            max_length,
            untitled: untitled.into(),
        }
    }

    /// Truncate to `max_length` characters, then fall back to the placeholder if empty.
    pub fn apply(&self, raw: Option<&str>) -> String {
        let truncated: String = raw
            .unwrap_or_default()
            .chars()
            .take(self.max_length)
            .collect();

        if truncated.is_empty() {
            self.untitled.clone()
        } else {
            truncated
        }
    }
}
