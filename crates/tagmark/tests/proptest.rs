//! Property-based tests for the render pipeline.

use proptest::prelude::*;
use tagmark::{escape_html, Engine, RuleTable};

// ============================================================================
// Strategies
// ============================================================================

/// Text that can never contain tag markup.
fn markup_free_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?:;&<>'\"\n-]{0,60}"
}

/// Text safe to place between tags: no brackets, no escapable characters,
/// no newlines.
fn plain_content() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?:;-]{0,40}"
}

fn styling_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["b", "i", "u", "s", "sub", "sup"])
}

fn list_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["ul", "ol"])
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Without markup, rendering is exactly HTML escaping.
    #[test]
    fn markup_free_text_is_only_escaped(text in markup_free_text()) {
        let engine = Engine::new();
        prop_assert_eq!(engine.render(&text).unwrap(), escape_html(&text));
    }

    /// Without markup and without escaping, rendering is the identity.
    #[test]
    fn markup_free_text_unchanged_when_not_escaping(text in markup_free_text()) {
        let engine = Engine::new();
        prop_assert_eq!(engine.render_with(&text, false).unwrap(), text);
    }

    /// Every styling tag maps to the element of the same name.
    #[test]
    fn styling_tag_wraps_content(tag in styling_tag(), content in plain_content()) {
        let engine = Engine::new();
        let input = format!("[{tag}]{content}[/{tag}]");
        prop_assert_eq!(
            engine.render(&input).unwrap(),
            format!("<{tag}>{content}</{tag}>")
        );
    }

    /// Same-tag list nesting of any depth resolves fully.
    #[test]
    fn nested_lists_resolve(tag in list_tag(), depth in 1usize..8, content in plain_content()) {
        let engine = Engine::new();
        let input = format!(
            "{}{}{}",
            format!("[{tag}]").repeat(depth),
            content,
            format!("[/{tag}]").repeat(depth)
        );
        let expected = format!(
            "{}{}{}",
            format!("<{tag}>").repeat(depth),
            content,
            format!("</{tag}>").repeat(depth)
        );
        prop_assert_eq!(engine.render(&input).unwrap(), expected);
    }

    /// Adjacent items are converted independently.
    #[test]
    fn list_items_convert_independently(items in prop::collection::vec(plain_content(), 1..6)) {
        let engine = Engine::new();
        let input: String = items.iter().map(|i| format!("[li]{i}[/li]")).collect();
        let expected: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
        prop_assert_eq!(engine.render(&input).unwrap(), expected);
    }

    /// An empty table only escapes.
    #[test]
    fn empty_table_only_escapes(text in "\\PC{0,40}") {
        let engine = Engine::with_table(RuleTable::new());
        prop_assert_eq!(engine.render(&text).unwrap(), escape_html(&text));
    }

    /// Overriding a rule never changes the number or order of rules.
    #[test]
    fn override_keeps_table_shape(template in "[a-z<>/ ]{0,10}") {
        let mut engine = Engine::new();
        let before: Vec<String> = engine
            .rules()
            .template_rules()
            .names()
            .map(str::to_string)
            .collect();
        engine.register_template_rule("list-item", r"\[li\](.*)\[\/li\]", &template);
        let after: Vec<String> = engine
            .rules()
            .template_rules()
            .names()
            .map(str::to_string)
            .collect();
        prop_assert_eq!(before, after);
    }
}
