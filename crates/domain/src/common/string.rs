//! String conversion utilities.

/// Converts an empty or whitespace-only string to `None`, otherwise returns
/// `Some(value)`.
///
/// Manifest authors often leave optional fields as `""` instead of omitting
/// them; both are treated as absent.
///
/// # Examples
///
/// ```
/// use reelfolio_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("hello"), Some("hello"));
/// assert_eq!(none_if_blank(""), None);
/// assert_eq!(none_if_blank("  "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Owned version of [`none_if_blank`] for optional manifest fields.
///
/// # Examples
///
/// ```
/// use reelfolio_domain::common::some_if_present;
///
/// assert_eq!(some_if_present(Some("a".to_string())), Some("a".to_string()));
/// assert_eq!(some_if_present(Some(String::new())), None);
/// assert_eq!(some_if_present(None), None);
/// ```
pub fn some_if_present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns `true` when `value` starts with `prefix`, ignoring ASCII case.
pub fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_if_blank_with_content() {
        assert_eq!(none_if_blank("hello"), Some("hello"));
        assert_eq!(none_if_blank(" padded "), Some(" padded "));
    }

    #[test]
    fn test_none_if_blank_empty() {
        assert_eq!(none_if_blank(""), None);
        assert_eq!(none_if_blank("\t\n"), None);
    }

    #[test]
    fn test_some_if_present() {
        assert_eq!(some_if_present(Some("x".into())), Some("x".into()));
        assert_eq!(some_if_present(Some("   ".into())), None);
        assert_eq!(some_if_present(None), None);
    }

    #[test]
    fn test_starts_with_ignore_ascii_case() {
        assert!(starts_with_ignore_ascii_case("MAILTO:a@b.c", "mailto:"));
        assert!(starts_with_ignore_ascii_case("tel:123", "TEL:"));
        assert!(!starts_with_ignore_ascii_case("te", "tel:"));
        assert!(!starts_with_ignore_ascii_case("data", "data:"));
    }

    #[test]
    fn test_starts_with_non_ascii_boundary() {
        // Slicing inside a multi-byte char must not panic
        assert!(!starts_with_ignore_ascii_case("é:xyz", "ab"));
    }
}
