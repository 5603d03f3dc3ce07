//! Utility functions for matching operations.

/// Normalizes text for comparison by lowercasing and replacing separators with spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_separators_and_case() {
        assert_eq!(normalize_text("  First_Name "), "first name");
        assert_eq!(normalize_text("e-mail/Address"), "e mail address");
        assert_eq!(normalize_text("A  .  B"), "a b");
        assert_eq!(normalize_text(""), "");
    }
}
