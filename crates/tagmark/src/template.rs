//! Replacement templates for substitution rules.
//!
//! A template is plain text with positional placeholders that reference
//! capture groups of the rule's pattern:
//!
//! | Form | Meaning |
//! |------|---------|
//! | `$N` | group `N`, where `N` is one or two digits (`$12` is group 12) |
//! | `${N}` | group `N`, delimited (`${1}2` is group 1 followed by `2`) |
//! | `\N` | same as `$N` |
//!
//! `$0` is the whole match. A reference to a group that does not exist or
//! did not participate in the match expands to the empty string. Any other
//! `$` or `\` is copied literally.
//!
//! Placeholder names never extend past the digits, so `width: $1px` expands
//! group 1 followed by `px`.

use regex::Captures;

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Text copied verbatim.
    Literal(String),
    /// Reference to a capture group by index.
    Group(usize),
}

/// A parsed replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template string. Parsing never fails; anything that is not
    /// a placeholder is literal text.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = parse_segments(&source);
        Self { source, segments }
    }

    /// Returns the template source as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Appends the expansion of this template for `caps` to `output`.
    pub fn expand(&self, caps: &Captures<'_>, output: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Group(n) => {
                    if let Some(m) = caps.get(*n) {
                        output.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::parse(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template::parse(source)
    }
}

fn parse_segments(source: &str) -> Vec<Segment> {
    let bytes = source.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match placeholder_at(&bytes[pos..]) {
            Some((group, len)) => {
                if literal_start < pos {
                    segments.push(Segment::Literal(source[literal_start..pos].to_string()));
                }
                segments.push(Segment::Group(group));
                pos += len;
                literal_start = pos;
            }
            None => pos += 1,
        }
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(source[literal_start..].to_string()));
    }

    segments
}

/// Recognizes a placeholder at the start of `bytes`, returning the group
/// index and the placeholder's length in bytes.
fn placeholder_at(bytes: &[u8]) -> Option<(usize, usize)> {
    let (&sigil, rest) = bytes.split_first()?;
    match sigil {
        b'$' if rest.first() == Some(&b'{') => {
            let digits = leading_digits(&rest[1..]);
            if digits == 0 || rest.get(1 + digits) != Some(&b'}') {
                return None;
            }
            Some((parse_digits(&rest[1..1 + digits]), digits + 3))
        }
        b'$' | b'\\' => {
            let digits = leading_digits(rest);
            if digits == 0 {
                return None;
            }
            Some((parse_digits(&rest[..digits]), digits + 1))
        }
        _ => None,
    }
}

/// Counts up to two leading ASCII digits.
fn leading_digits(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take(2)
        .take_while(|b| b.is_ascii_digit())
        .count()
}

fn parse_digits(digits: &[u8]) -> usize {
    digits
        .iter()
        .fold(0, |acc, b| acc * 10 + usize::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn expand(template: &str, pattern: &str, input: &str) -> String {
        let re = Regex::new(pattern).unwrap();
        let caps = re.captures(input).unwrap();
        let mut out = String::new();
        Template::parse(template).expand(&caps, &mut out);
        out
    }

    // ==================== Parsing ====================

    mod parsing {
        use super::*;

        #[test]
        fn plain_text_is_one_literal() {
            let t = Template::parse("<hr>");
            assert_eq!(t.segments, vec![Segment::Literal("<hr>".to_string())]);
        }

        #[test]
        fn dollar_placeholders() {
            let t = Template::parse("<b>$1</b>");
            assert_eq!(
                t.segments,
                vec![
                    Segment::Literal("<b>".to_string()),
                    Segment::Group(1),
                    Segment::Literal("</b>".to_string()),
                ]
            );
        }

        #[test]
        fn two_digit_placeholder_is_greedy() {
            let t = Template::parse("$123");
            assert_eq!(
                t.segments,
                vec![Segment::Group(12), Segment::Literal("3".to_string())]
            );
        }

        #[test]
        fn braced_placeholder() {
            let t = Template::parse("${1}2");
            assert_eq!(
                t.segments,
                vec![Segment::Group(1), Segment::Literal("2".to_string())]
            );
        }

        #[test]
        fn backslash_placeholder() {
            let t = Template::parse(r"\2-\1");
            assert_eq!(
                t.segments,
                vec![
                    Segment::Group(2),
                    Segment::Literal("-".to_string()),
                    Segment::Group(1),
                ]
            );
        }

        #[test]
        fn lone_sigils_are_literal() {
            let t = Template::parse("cost: $ and ${x} and \\n");
            assert_eq!(
                t.segments,
                vec![Segment::Literal("cost: $ and ${x} and \\n".to_string())]
            );
        }

        #[test]
        fn unterminated_brace_is_literal() {
            let t = Template::parse("${1");
            assert_eq!(t.segments, vec![Segment::Literal("${1".to_string())]);
        }

        #[test]
        fn keeps_source() {
            let t = Template::from("<u>$1</u>");
            assert_eq!(t.as_str(), "<u>$1</u>");
        }
    }

    // ==================== Expansion ====================

    mod expansion {
        use super::*;

        #[test]
        fn digits_followed_by_letters() {
            assert_eq!(
                expand("width: $1px;", r"w=(\d+)", "w=20"),
                "width: 20px;"
            );
        }

        #[test]
        fn whole_match_group() {
            assert_eq!(expand("[$0]", r"b+", "abbc"), "[bb]");
        }

        #[test]
        fn missing_group_is_empty() {
            assert_eq!(expand("<$1|$2|$9>", r"(a)(b)?", "a"), "<a||>");
        }

        #[test]
        fn multibyte_literals() {
            assert_eq!(expand("→$1←", r"(x)", "x"), "→x←");
        }
    }
}
