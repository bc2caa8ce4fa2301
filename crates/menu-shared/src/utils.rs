//! Utility functions

use unicode_normalization::UnicodeNormalization;

/// Converts a display label into a URL-safe identifier.
///
/// Decomposes to NFKD and drops anything non-ASCII, keeps word characters,
/// whitespace and hyphens, lowercases, then collapses every run of whitespace
/// or hyphens into a single `-`. Leading/trailing `-` and `_` are stripped.
pub fn slugify(value: &str) -> String {
    let ascii: String = value
        .nfkd()
        .filter(char::is_ascii)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || is_separator(*c))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut slug = String::with_capacity(ascii.len());
    let mut in_separator = false;
    for c in ascii.chars() {
        if is_separator(c) {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
        } else {
            slug.push(c);
            in_separator = false;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Hyphen or ASCII whitespace, including vertical tab and the `\x1c`..=`\x1f`
/// separators that `char::is_ascii_whitespace` leaves out.
fn is_separator(c: char) -> bool {
    matches!(c, '-' | ' ' | '\t'..='\r' | '\x1c'..='\x1f')
}

/// Trims and maps blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("About Us"), "about-us");
        assert_eq!(slugify("  Products & Services  "), "products-services");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a -- b\t\tc"), "a-b-c");
        assert_eq!(slugify("--edge--"), "edge");
        assert_eq!(slugify("_under_"), "under");
    }

    #[test]
    fn test_slugify_control_separators() {
        assert_eq!(slugify("a\u{b}b"), "a-b");
        assert_eq!(slugify("a\u{1c}b\u{1f}c"), "a-b-c");
        assert_eq!(slugify("a\u{0}b"), "ab");
    }

    #[test]
    fn test_slugify_folds_accents_and_drops_non_ascii() {
        assert_eq!(slugify("Café Crème"), "cafe-creme");
        assert_eq!(slugify("Главная"), "");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" /a/ ".into())), Some("/a/".into()));
        assert_eq!(non_blank(None), None);
    }
}
