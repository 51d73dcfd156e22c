//! The default rule set.
//!
//! Rules are listed in application order. The order is load-bearing: list
//! containers (`[ol]`, `[ul]`, `[list]`) reach their fixpoint before
//! `[li]` items are converted, which is what lets nested lists of the same
//! kind resolve one layer per pass.

use crate::rule::Rule;

/// `(name, pattern, template)` triples of the default rule set.
pub const DEFAULT_RULES: &[(&str, &str, &str)] = &[
    // Text styling
    ("bold", r"\[b\](.*)\[\/b\]", "<b>$1</b>"),
    ("italic", r"\[i\](.*)\[\/i\]", "<i>$1</i>"),
    ("underline", r"\[u\](.*)\[\/u\]", "<u>$1</u>"),
    ("strikethrough", r"\[s\](.*)\[\/s\]", "<s>$1</s>"),
    ("subscript", r"\[sub\](.*)\[\/sub\]", "<sub>$1</sub>"),
    ("superscript", r"\[sup\](.*)\[\/sup\]", "<sup>$1</sup>"),
    // Images
    ("image", r"\[img\](.*)\[\/img\]", r#"<img src="$1">"#),
    (
        "image-resized",
        r"\[img width=(.*) height=(.*)\](.*)\[\/img\]",
        r#"<img src="$3" style="width: $1px; height: $2px;">"#,
    ),
    (
        "image-resized-alt-1",
        r"\[img height=(.*) width=(.*)\](.*)\[\/img\]",
        r#"<img src="$3" style="width: $2px; height: $1px;">"#,
    ),
    (
        "image-resized-alt-2",
        r"\[img=(.*)x(.*)\](.*)\[\/img\]",
        r#"<img src="$3" style="width: $1px; height: $2px;">"#,
    ),
    // Links
    ("url-without-text", r"\[url\](.*)\[\/url\]", r#"<a href="$1">$1</a>"#),
    ("url-with-text", r"\[url=(.*)\](.*)\[\/url\]", r#"<a href="$1">$2</a>"#),
    // Lists
    ("ordered-list", r"\[ol\](.*)\[\/ol\]", "<ol>$1</ol>"),
    ("unordered-list", r"\[ul\](.*)\[\/ul\]", "<ul>$1</ul>"),
    ("unordered-list-alt", r"\[list\](.*)\[\/list\]", "<ul>$1</ul>"),
    ("list-item", r"\[li\](.*)\[\/li\]", "<li>$1</li>"),
    ("list-item-alt", r"\[\*\](.*)\n", "<li>$1</li>"),
    // Video embeds
    (
        "youtube",
        r"\[youtube\](.*)\[\/youtube\]",
        r#"<iframe width="560" height="315" src="https://www.youtube.com/embed/$1" frameborder="0" allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
    ),
    (
        "youtube-resized",
        r"\[youtube width=(.*) height=(.*)\](.*)\[\/youtube\]",
        r#"<iframe width="$1" height="$2" src="https://www.youtube.com/embed/$3" frameborder="0" allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
    ),
    (
        "youtube-resized-alt-1",
        r"\[youtube height=(.*) width=(.*)\](.*)\[\/youtube\]",
        r#"<iframe width="$2" height="$1" src="https://www.youtube.com/embed/$3" frameborder="0" allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
    ),
    (
        "youtube-resized-alt-2",
        r"\[youtube=(.*)x(.*)\](.*)\[\/youtube\]",
        r#"<iframe width="$1" height="$2" src="https://www.youtube.com/embed/$3" frameborder="0" allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
    ),
    // Code
    ("code", r"\[code\](.*)\[\/code\]", "<pre><code>$1</code></pre>"),
];

/// Builds the default rules in application order.
pub fn default_rules() -> impl Iterator<Item = Rule> {
    DEFAULT_RULES
        .iter()
        .map(|&(name, pattern, template)| Rule::template(name, pattern, template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = DEFAULT_RULES.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names.len(), DEFAULT_RULES.len());
    }

    #[test]
    fn declared_order() {
        let names: Vec<_> = default_rules().map(|r| r.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "bold",
                "italic",
                "underline",
                "strikethrough",
                "subscript",
                "superscript",
                "image",
                "image-resized",
                "image-resized-alt-1",
                "image-resized-alt-2",
                "url-without-text",
                "url-with-text",
                "ordered-list",
                "unordered-list",
                "unordered-list-alt",
                "list-item",
                "list-item-alt",
                "youtube",
                "youtube-resized",
                "youtube-resized-alt-1",
                "youtube-resized-alt-2",
                "code",
            ]
        );
    }

    #[test]
    fn every_default_pattern_compiles() {
        for rule in default_rules() {
            assert!(rule.regex().is_ok(), "rule '{}' failed to compile", rule.name());
        }
    }

    #[test]
    fn containers_precede_items() {
        let position = |name: &str| DEFAULT_RULES.iter().position(|(n, _, _)| *n == name);
        let item = position("list-item");
        assert!(position("ordered-list") < item);
        assert!(position("unordered-list") < item);
        assert!(position("unordered-list-alt") < item);
    }
}
