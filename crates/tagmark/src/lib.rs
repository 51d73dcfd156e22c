//! Rule-based BBCode-style tag markup to HTML converter.
//!
//! This crate converts `[tag]content[/tag]` markup into HTML by applying an
//! ordered table of pattern/replacement rules. It is meant to sit inside a
//! larger template-rendering pipeline: the host hands over a text fragment
//! and gets HTML back.
//!
//! # Example
//!
//! ```rust
//! use tagmark::Engine;
//!
//! let mut engine = Engine::new();
//!
//! // Raw HTML is escaped before any rule runs
//! assert_eq!(
//!     engine.render("<b>[b]hi[/b]</b>").unwrap(),
//!     "&lt;b&gt;<b>hi</b>&lt;/b&gt;"
//! );
//!
//! // Nested lists of the same kind resolve
//! assert_eq!(
//!     engine.render("[ul][li]a[/li][ul][li]b[/li][/ul][/ul]").unwrap(),
//!     "<ul><li>a</li><ul><li>b</li></ul></ul>"
//! );
//!
//! // Rules are added or overridden by name
//! engine.register_template_rule(
//!     "spoiler",
//!     r"\[spoiler\](.*)\[\/spoiler\]",
//!     "<details>$1</details>",
//! );
//! assert_eq!(engine.render("[spoiler]x[/spoiler]").unwrap(), "<details>x</details>");
//!
//! // Transform rules compute their replacement
//! engine.register_transform_rule("shout", r"\[shout\](.*)\[\/shout\]", |groups: &[&str]| {
//!     Ok(groups[1].to_uppercase())
//! });
//! assert_eq!(engine.render("[shout]hey[/shout]").unwrap(), "HEY");
//! ```
//!
//! # How Rules Apply
//!
//! Rules live in two ordered groups, template rules and transform rules.
//! A render escapes the input, then takes each template rule in order and
//! runs substitution passes until a pass finds nothing, then does the same
//! for each transform rule.
//!
//! Patterns are compiled with `.` matching newlines and greediness swapped,
//! so a bare `(.*)` is lazy and stops at the nearest closing tag. Repeating
//! the pass peels one layer of same-tag nesting at a time. This is not a
//! balanced-bracket parser: it relies on the default rule order (list
//! containers before list items) and on templates never reintroducing the
//! delimiters their own pattern matches.
//!
//! # Default Tags
//!
//! | Markup | HTML |
//! |--------|------|
//! | `[b]`, `[i]`, `[u]`, `[s]`, `[sub]`, `[sup]` | matching inline element |
//! | `[img]url[/img]` | `<img src="url">` |
//! | `[img width=W height=H]`, `[img height=H width=W]`, `[img=WxH]` | sized `<img>` |
//! | `[url]u[/url]`, `[url=u]text[/url]` | `<a href="u">` |
//! | `[ol]`, `[ul]`, `[list]` | `<ol>` / `<ul>` |
//! | `[li]x[/li]`, `[*]x` + newline | `<li>x</li>` |
//! | `[youtube]id[/youtube]` and sized variants | embedded player `<iframe>` |
//! | `[code]` | `<pre><code>` |
//!
//! [`Preset`]s add opt-in rules: language-tagged code blocks and line breaks.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (rule overrides, passes, fixpoints)
//! and never installs a subscriber.

mod config;
mod defaults;
mod engine;
mod error;
mod escape;
mod pass;
mod presets;
mod rule;
mod table;
mod template;

// Re-export public API
pub use config::{EngineOptions, FileOptions, RuleDef, RuleFile};
pub use defaults::DEFAULT_RULES;
pub use engine::Engine;
pub use error::{BoxError, Result, TagmarkError};
pub use escape::{escape_html, EscapeFn};
pub use pass::{substitute, PassOutput};
pub use presets::{Preset, HIGHLIGHTED_CODE_RULE, LINE_BREAK_RULE};
pub use rule::{Pattern, Replacement, Rule, TransformFn};
pub use table::{Insertion, RuleGroup, RuleTable};
pub use template::Template;
