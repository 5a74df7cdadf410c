// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;
pub mod url;

/// Make a string safe for use as a filename component.
///
/// Replaces whitespace runs with underscores. Keeps everything else verbatim,
/// matching the portal-facing naming convention.
pub fn sanitize_component(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Truncate a string to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_component() {
        assert_eq!(sanitize_component("Patiala House"), "Patiala_House");
        assert_eq!(sanitize_component("  a  b "), "a_b");
        assert_eq!(sanitize_component("plain"), "plain");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 10), "ab");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        // Must count characters, not bytes
        let truncated = truncate_chars("दिल्ली जिला", 6);
        assert_eq!(truncated.chars().count(), 6);
        assert!(String::from_utf8(truncated.into_bytes()).is_ok());
    }
}
