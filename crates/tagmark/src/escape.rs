//! HTML entity escaping applied before any rule runs.

/// Signature of the escaper an [`Engine`](crate::Engine) runs over raw input.
pub type EscapeFn = fn(&str) -> String;

/// Escapes `&`, `<`, `>`, `"` and `'` using HTML5 named entities.
///
/// Existing entities are not detected, so `&amp;` becomes `&amp;amp;`.
///
/// ```
/// use tagmark::escape_html;
///
/// assert_eq!(escape_html("<i>it's</i>"), "&lt;i&gt;it&apos;s&lt;/i&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&apos;s");
    }

    #[test]
    fn encodes_existing_entities_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn leaves_tag_markup_alone() {
        assert_eq!(escape_html("[b]x[/b] [*]y"), "[b]x[/b] [*]y");
    }

    #[test]
    fn multibyte_text_unchanged() {
        assert_eq!(escape_html("héllo wörld ✓"), "héllo wörld ✓");
    }
}
