//! Opt-in rule presets.
//!
//! A preset is nothing more than a set of template rules registered through
//! the regular registration path. None of them is part of the default table.

use serde::Deserialize;

use crate::rule::Rule;

/// Name of the rule registered by [`Preset::HighlightedCode`].
pub const HIGHLIGHTED_CODE_RULE: &str = "prism";

/// Name of the rule registered by [`Preset::LineBreaks`].
pub const LINE_BREAK_RULE: &str = "linebreak";

/// A named bundle of extra rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// `[code language=rust]...[/code]` to a language-tagged code block,
    /// as expected by client-side highlighters such as Prism.
    HighlightedCode,

    /// Every line terminator (`\r\n`, `\r` or `\n`) to `<br/>`.
    LineBreaks,
}

impl Preset {
    /// Returns the rules this preset registers, in registration order.
    pub fn rules(self) -> Vec<Rule> {
        match self {
            Preset::HighlightedCode => vec![Rule::template(
                HIGHLIGHTED_CODE_RULE,
                r"\[code language=(.*)\](.*)\[\/code\]",
                r#"<pre><code class="language-$1">$2</code></pre>"#,
            )],
            Preset::LineBreaks => vec![Rule::template(LINE_BREAK_RULE, r"(\r\n|\r|\n)", "<br/>")],
        }
    }

    /// Returns the preset's configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::HighlightedCode => "highlighted-code",
            Preset::LineBreaks => "line-breaks",
        }
    }
}
