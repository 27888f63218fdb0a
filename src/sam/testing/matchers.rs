//! Text comparison helper for assertions

/// Assert `actual == expected`, naming the element at `context` on failure
pub fn assert_text(actual: &str, expected: &str, context: &str) {
    assert_eq!(
        actual, expected,
        "{}: expected '{}', got '{}'",
        context, expected, actual
    );
}
