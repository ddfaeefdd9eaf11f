use crate::{DEFAULT_UNTITLED_NAME, MAX_NAME_LENGTH, NamePolicy};

#[test]
fn test_default_policy_limits() {
    let policy = NamePolicy::default();

    assert_eq!(policy.max_length, MAX_NAME_LENGTH);
    assert_eq!(policy.untitled, DEFAULT_UNTITLED_NAME);
}

#[test]
fn test_long_name_keeps_first_255_characters() {
    let policy = NamePolicy::default();
    let raw = format!("{}{}", "a".repeat(255), "b".repeat(45));

    let name = policy.apply(Some(&raw));

    assert_eq!(name.chars().count(), 255);
    assert_eq!(name, "a".repeat(255));
}

#[test]
fn test_name_at_limit_is_unchanged() {
    let policy = NamePolicy::default();
    let raw = "x".repeat(255);

    assert_eq!(policy.apply(Some(&raw)), raw);
}

#[test]
fn test_truncation_counts_characters_not_bytes() {
    let policy = NamePolicy::new(3, "(untitled)");

    assert_eq!(policy.apply(Some("ブックマーク")), "ブック");
}

#[test]
fn test_empty_name_uses_placeholder() {
    let policy = NamePolicy::default();

    assert_eq!(policy.apply(Some("")), "(untitled)");
}

#[test]
fn test_absent_name_uses_placeholder() {
    let policy = NamePolicy::default();

    assert_eq!(policy.apply(None), "(untitled)");
}

#[test]
fn test_configured_placeholder_is_used() {
    let policy = NamePolicy::new(255, "no name");

    assert_eq!(policy.apply(None), "no name");
}

#[test]
fn test_whitespace_name_is_kept() {
    let policy = NamePolicy::default();

    assert_eq!(policy.apply(Some("  ")), "  ");
}
