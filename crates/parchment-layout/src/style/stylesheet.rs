//! Static tag-name lookups. Both functions are total: unknown names get
//! the plain style.

use super::values::{BlockStyle, TextStyle};

/// Block style for a paragraph-producing element.
///
/// `h1`..`h6` are headers, `blockquote` is a quote, everything else is plain.
/// Names match ASCII case-insensitively.
#[must_use]
pub fn style_for_tag(name: &str) -> BlockStyle {
    match name.to_ascii_lowercase().as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => BlockStyle::HEADER,
        "blockquote" => BlockStyle::QUOTE,
        _ => BlockStyle::PLAIN,
    }
}

/// Text style for an inline element inside a paragraph.
#[must_use]
pub fn text_style_for_tag(name: &str) -> TextStyle {
    match name.to_ascii_lowercase().as_str() {
        "b" | "strong" => TextStyle::BOLD,
        "a" => TextStyle::LINK,
        "u" => TextStyle::UNDERLINE,
        _ => TextStyle::PLAIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_and_default() {
        assert_eq!(style_for_tag("h1"), BlockStyle::HEADER);
        assert_eq!(style_for_tag("H6"), BlockStyle::HEADER);
        assert_eq!(style_for_tag("h7"), BlockStyle::PLAIN);
        assert_eq!(style_for_tag("blockquote"), BlockStyle::QUOTE);
        assert_eq!(style_for_tag(""), BlockStyle::PLAIN);
    }

    #[test]
    fn test_inline_styles() {
        assert_eq!(text_style_for_tag("strong").font_key(), "bold");
        assert!(text_style_for_tag("a").underline);
        assert_eq!(text_style_for_tag("span"), TextStyle::PLAIN);
        assert_eq!(TextStyle::PLAIN.font_key(), "base");
    }
}
