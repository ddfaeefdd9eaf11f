use crate::{Bookmark, BookmarkInput, NamePolicy, UserId, is_mine};

fn input(name: Option<&str>, url: &str, memo: Option<&str>) -> BookmarkInput {
    BookmarkInput::new(
        name.map(str::to_string),
        Some(url.to_string()),
        memo.map(str::to_string),
    )
    .unwrap()
}

#[test]
fn test_bookmark_new() {
    let policy = NamePolicy::default();
    let bookmark = Bookmark::new(
        input(Some("Rust"), "https://rust-lang.org", Some("m")),
        UserId(7),
        &policy,
    );

    assert_eq!(bookmark.name, "Rust");
    assert_eq!(bookmark.url, "https://rust-lang.org");
    assert_eq!(bookmark.memo.as_deref(), Some("m"));
    assert_eq!(bookmark.created_by, UserId(7));
    assert!(bookmark.is_owned_by(UserId(7)));
}

#[test]
fn test_bookmark_new_with_empty_name_uses_placeholder() {
    let policy = NamePolicy::default();
    let bookmark = Bookmark::new(input(Some(""), "http://x", None), UserId(7), &policy);

    assert_eq!(bookmark.name, "(untitled)");
    assert_eq!(bookmark.url, "http://x");
}

#[test]
fn test_bookmark_new_generates_distinct_ids() {
    let policy = NamePolicy::default();
    let first = Bookmark::new(input(None, "http://x", None), UserId(1), &policy);
    let second = Bookmark::new(input(None, "http://x", None), UserId(1), &policy);

    assert_ne!(first.id, second.id);
}

#[test]
fn test_apply_update_keeps_id() {
    let policy = NamePolicy::default();
    let mut bookmark = Bookmark::new(input(Some("old"), "http://x", None), UserId(7), &policy);
    let id = bookmark.id;

    for n in 0..3 {
        bookmark.apply_update(
            input(Some(&format!("name {n}")), "http://y", Some("m")),
            UserId(7),
            &policy,
        );
        assert_eq!(bookmark.id, id);
    }

    assert_eq!(bookmark.name, "name 2");
    assert_eq!(bookmark.url, "http://y");
    assert_eq!(bookmark.memo.as_deref(), Some("m"));
    assert_eq!(bookmark.created_by, UserId(7));
}

#[test]
fn test_apply_update_moves_updated_at_forward() {
    let policy = NamePolicy::default();
    let mut bookmark = Bookmark::new(input(None, "http://x", None), UserId(7), &policy);
    let before = bookmark.updated_at;

    bookmark.apply_update(input(None, "http://y", None), UserId(7), &policy);

    assert!(bookmark.updated_at >= before);
}

#[test]
fn test_apply_update_truncates_name() {
    let policy = NamePolicy::default();
    let mut bookmark = Bookmark::new(input(None, "http://x", None), UserId(7), &policy);
    let long = "n".repeat(300);

    bookmark.apply_update(input(Some(&long), "http://x", None), UserId(7), &policy);

    assert_eq!(bookmark.name, "n".repeat(255));
}

#[test]
fn test_is_owned_by_other_user_is_false() {
    let policy = NamePolicy::default();
    let bookmark = Bookmark::new(input(None, "http://x", None), UserId(7), &policy);

    assert!(!bookmark.is_owned_by(UserId(9)));
}

#[test]
fn test_is_mine() {
    let policy = NamePolicy::default();
    let bookmark = Bookmark::new(input(None, "http://x", None), UserId(7), &policy);

    assert!(is_mine(UserId(7), Some(&bookmark)));
    assert!(!is_mine(UserId(9), Some(&bookmark)));
    assert!(!is_mine(UserId(7), None));
}
