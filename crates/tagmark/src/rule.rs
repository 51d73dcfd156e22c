//! Rules: a named pattern plus a replacement strategy.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use regex::{Captures, Regex};

use crate::error::{BoxError, Result, TagmarkError};
use crate::template::Template;

/// Flags prepended to every rule pattern: `.` matches newlines and
/// quantifier greediness is swapped, so `(.*)` matches lazily.
const PATTERN_FLAGS: &str = "(?sU)";

/// Closure that computes a replacement from the captured groups of a match.
///
/// The slice holds every group in order, with group 0 being the full match.
/// Groups that did not participate in the match are passed as `""`.
pub type TransformFn =
    Arc<dyn Fn(&[&str]) -> std::result::Result<String, BoxError> + Send + Sync>;

/// A rule pattern, compiled on first use.
///
/// Registration never validates the pattern. The first render that needs it
/// compiles it and caches the outcome, including a failure.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    compiled: OnceCell<std::result::Result<Regex, regex::Error>>,
}

impl Pattern {
    /// Creates an uncompiled pattern.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            compiled: OnceCell::new(),
        }
    }

    /// Returns the pattern as registered, without the implicit flags.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the compiled regex, compiling it on first call.
    pub fn regex(&self) -> std::result::Result<&Regex, &regex::Error> {
        self.compiled
            .get_or_init(|| Regex::new(&format!("{PATTERN_FLAGS}{}", self.source)))
            .as_ref()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

/// How a rule turns a match into replacement text.
#[derive(Clone)]
pub enum Replacement {
    /// Templated replacement with positional group references.
    Template(Template),
    /// Replacement computed by a closure over the captured groups.
    Transform(TransformFn),
}

impl Replacement {
    /// Appends the replacement for one match to `output`.
    ///
    /// `rule` is only used to attribute a closure failure.
    pub(crate) fn apply(
        &self,
        rule: &str,
        caps: &Captures<'_>,
        output: &mut String,
    ) -> Result<()> {
        match self {
            Replacement::Template(template) => {
                template.expand(caps, output);
                Ok(())
            }
            Replacement::Transform(transform) => {
                let groups: Vec<&str> = caps
                    .iter()
                    .map(|m| m.map_or("", |m| m.as_str()))
                    .collect();
                let text = transform(groups.as_slice()).map_err(|source| {
                    TagmarkError::RuleEvaluation {
                        rule: rule.to_string(),
                        source,
                    }
                })?;
                output.push_str(&text);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Replacement::Transform(_) => f.write_str("Transform(<fn>)"),
        }
    }
}

/// A named pattern with its replacement.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Pattern,
    replacement: Replacement,
}

impl Rule {
    /// Creates a rule with a templated replacement.
    pub fn template(
        name: impl Into<String>,
        pattern: impl Into<String>,
        template: impl Into<Template>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: Pattern::new(pattern),
            replacement: Replacement::Template(template.into()),
        }
    }

    /// Creates a rule whose replacement is computed by `transform`.
    pub fn transform<F>(name: impl Into<String>, pattern: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&[&str]) -> std::result::Result<String, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            pattern: Pattern::new(pattern),
            replacement: Replacement::Transform(Arc::new(transform)),
        }
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rule pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the replacement strategy.
    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }

    /// Returns the compiled pattern, attributing a compile failure to this rule.
    pub fn regex(&self) -> Result<&Regex> {
        self.pattern.regex().map_err(|source| TagmarkError::Pattern {
            rule: self.name.clone(),
            source: source.clone(),
        })
    }
}
