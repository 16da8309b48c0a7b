//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Show a placeholder for optional free-text fields
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => "-",
    }
}

/// Trim an optional input and drop it when nothing is left
pub fn normalize_optional(input: Option<String>) -> Option<String> {
    input.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// "1 Comment", "3 Comments"; zero keeps the singular form
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count > 1 {
        format!("{} {}", count, plural)
    } else {
        format!("{} {}", count, singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
        assert_eq!(truncate_text("Übernachtung am See", 8), "Übern...");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(Some("Yosemite")), "Yosemite");
        assert_eq!(or_placeholder(Some("  ")), "-");
        assert_eq!(or_placeholder(None), "-");
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  Lake  ".to_string())), Some("Lake".to_string()));
        assert_eq!(normalize_optional(Some("   ".to_string())), None);
        assert_eq!(normalize_optional(None), None);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "Comment", "Comments"), "0 Comment");
        assert_eq!(count_label(1, "Comment", "Comments"), "1 Comment");
        assert_eq!(count_label(4, "Comment", "Comments"), "4 Comments");
    }
}
