//! The rule engine: registry owner and render pipeline.

use std::fmt;

use crate::config::{EngineOptions, RuleFile};
use crate::error::{BoxError, Result, TagmarkError};
use crate::escape::{escape_html, EscapeFn};
use crate::pass;
use crate::presets::Preset;
use crate::rule::Rule;
use crate::table::{Insertion, RuleGroup, RuleTable};

/// Converts tag markup to HTML by applying an ordered table of rules.
///
/// An engine is built once, optionally extended, and then used for any
/// number of renders. Registration takes `&mut self` and rendering takes
/// `&self`, so all registration happens before the engine is shared.
///
/// # Pipeline
///
/// 1. Escape raw HTML (`&`, `<`, `>`, `"`, `'`) unless disabled.
/// 2. For each template rule in order, repeat substitution passes until a
///    pass finds no match.
/// 3. Do the same for each transform rule.
///
/// ```
/// use tagmark::Engine;
///
/// let engine = Engine::new();
/// let html = engine.render("[b]bold [i]and italic[/i][/b]").unwrap();
/// assert_eq!(html, "<b>bold <i>and italic</i></b>");
/// ```
#[derive(Clone)]
pub struct Engine {
    table: RuleTable,
    options: EngineOptions,
    escaper: EscapeFn,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("table", &self.table)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine loaded with the default rule set.
    pub fn new() -> Self {
        Self::with_table(RuleTable::default_rules())
    }

    /// Creates an engine over an explicit rule table.
    pub fn with_table(table: RuleTable) -> Self {
        Self {
            table,
            options: EngineOptions::default(),
            escaper: escape_html,
        }
    }

    /// Creates a default engine and loads a rule file into it.
    pub fn from_rule_file(file: &RuleFile) -> Self {
        let mut engine = Self::new();
        engine.load_rules(file);
        engine
    }

    /// Applies options, enabling any presets they list.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.apply_options(options);
        self
    }

    /// Replaces the function used to escape raw input.
    pub fn with_escaper(mut self, escaper: EscapeFn) -> Self {
        self.escaper = escaper;
        self
    }

    /// Returns the current options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Returns the rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.table
    }

    // ==================== Registration ====================

    /// Registers a template rule, overriding any rule with the same name
    /// in place.
    ///
    /// The pattern is not validated here. An invalid pattern makes every
    /// later render fail with [`TagmarkError::Pattern`].
    pub fn register_template_rule(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
        template: &str,
    ) -> &mut Self {
        self.register(Rule::template(name, pattern, template))
    }

    /// Registers a transform rule, overriding any transform rule with the
    /// same name in place.
    ///
    /// `transform` receives every capture group, group 0 being the whole
    /// match. Returning an error aborts the render with
    /// [`TagmarkError::RuleEvaluation`].
    pub fn register_transform_rule<F>(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<String>,
        transform: F,
    ) -> &mut Self
    where
        F: Fn(&[&str]) -> std::result::Result<String, BoxError> + Send + Sync + 'static,
    {
        self.register(Rule::transform(name, pattern, transform))
    }

    /// Registers a prebuilt rule into the group matching its kind.
    pub fn register(&mut self, rule: Rule) -> &mut Self {
        let name = rule.name().to_string();
        match self.table.insert(rule) {
            Insertion::Replaced(position) => {
                tracing::debug!(rule = %name, position, "rule overridden");
            }
            Insertion::Appended(position) => {
                tracing::trace!(rule = %name, position, "rule registered");
            }
        }
        self
    }

    /// Enables a preset by registering its rules.
    pub fn enable(&mut self, preset: Preset) -> &mut Self {
        tracing::debug!(preset = preset.name(), "enabling preset");
        for rule in preset.rules() {
            self.register(rule);
        }
        self
    }

    /// Enables `[code language=...]` blocks.
    pub fn enable_highlighted_code(&mut self) -> &mut Self {
        self.enable(Preset::HighlightedCode)
    }

    /// Enables conversion of line terminators to `<br/>`.
    pub fn enable_line_breaks(&mut self) -> &mut Self {
        self.enable(Preset::LineBreaks)
    }

    /// Loads a rule file: lays its options over the current ones, enables
    /// its presets, then registers its rules in file order.
    pub fn load_rules(&mut self, file: &RuleFile) -> &mut Self {
        if let Some(overrides) = &file.options {
            let mut options = self.options.clone();
            overrides.overlay(&mut options);
            self.apply_options(options);
        }
        for def in &file.rules {
            self.register(def.to_rule());
        }
        self
    }

    fn apply_options(&mut self, options: EngineOptions) {
        for &preset in &options.presets {
            if !self.options.presets.contains(&preset) {
                self.enable(preset);
            }
        }
        self.options = options;
    }

    // ==================== Rendering ====================

    /// Renders `text`, escaping raw HTML according to
    /// [`EngineOptions::escape_raw_markup`] (on by default).
    pub fn render(&self, text: &str) -> Result<String> {
        self.render_with(text, self.options.escape_raw_markup)
    }

    /// Renders `text`, escaping raw HTML first if `escape_raw_markup` is set.
    ///
    /// Any error aborts the whole render; no partial output is returned.
    pub fn render_with(&self, text: &str, escape_raw_markup: bool) -> Result<String> {
        let mut working = if escape_raw_markup {
            (self.escaper)(text)
        } else {
            text.to_owned()
        };

        working = self.apply_group(self.table.template_rules(), working)?;
        working = self.apply_group(self.table.transform_rules(), working)?;
        Ok(working)
    }

    fn apply_group(&self, group: &RuleGroup, mut working: String) -> Result<String> {
        for rule in group {
            working = self.apply_to_fixpoint(rule, working)?;
        }
        Ok(working)
    }

    /// Repeats passes of `rule` until one finds no match.
    fn apply_to_fixpoint(&self, rule: &Rule, mut working: String) -> Result<String> {
        let regex = rule.regex()?;
        let mut passes = 0usize;

        while let Some(output) = pass::substitute(rule, regex, &working)? {
            passes += 1;
            if let Some(limit) = self.options.max_passes {
                if passes > limit {
                    return Err(TagmarkError::LoopLimitExceeded {
                        rule: rule.name().to_string(),
                        limit,
                    });
                }
            }
            tracing::trace!(
                rule = %rule.name(),
                pass = passes,
                replacements = output.replacements,
                "substitution pass"
            );
            working = output.text;
        }

        if passes > 0 {
            tracing::debug!(rule = %rule.name(), passes, "rule reached fixpoint");
        }
        Ok(working)
    }
}
