use crate::{BookmarkInput, CoreError};

#[test]
fn test_input_with_url_is_accepted() {
    let input = BookmarkInput::new(None, Some("http://x".to_string()), None).unwrap();

    assert_eq!(input.url, "http://x");
    assert_eq!(input.name, None);
}

#[test]
fn test_missing_url_is_rejected() {
    let result = BookmarkInput::new(Some("name".to_string()), None, None);

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("bookmarkURL"));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_empty_url_is_rejected() {
    let result = BookmarkInput::new(None, Some(String::new()), None);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn test_url_is_not_otherwise_validated() {
    let input = BookmarkInput::new(None, Some("not really a url".to_string()), None).unwrap();

    assert_eq!(input.url, "not really a url");
}
