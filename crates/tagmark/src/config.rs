//! Engine options and YAML rule files.
//!
//! Hosts that prefer configuration over code can describe extra template
//! rules, presets and options in a YAML document:
//!
//! ```yaml
//! options:
//!   escape_raw_markup: true
//!   max_passes: 64
//!   presets: [highlighted-code, line-breaks]
//! rules:
//!   - name: spoiler
//!     pattern: '\[spoiler\](.*)\[\/spoiler\]'
//!     template: '<details>$1</details>'
//! ```
//!
//! Every key is optional. Options the file sets are laid over the engine's
//! current options; keys it leaves out keep their value, and listed presets
//! are enabled in addition to any already on. Rules are registered in file
//! order with the usual override semantics, so a file can redefine a default
//! rule by name. Transform rules need a closure and can only be registered
//! from code.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TagmarkError};
use crate::presets::Preset;
use crate::rule::Rule;

/// Render-time options of an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOptions {
    /// Whether [`Engine::render`](crate::Engine::render) escapes raw HTML
    /// before applying rules. Defaults to `true`.
    pub escape_raw_markup: bool,

    /// Maximum passes a single rule may perform before the render fails
    /// with [`TagmarkError::LoopLimitExceeded`]. `None` (the default) never
    /// gives up.
    pub max_passes: Option<usize>,

    /// Presets to enable when the options are applied to an engine.
    pub presets: Vec<Preset>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            escape_raw_markup: true,
            max_passes: None,
            presets: Vec::new(),
        }
    }
}

impl EngineOptions {
    /// Sets whether raw HTML is escaped by default.
    pub fn escape_raw_markup(mut self, escape: bool) -> Self {
        self.escape_raw_markup = escape;
        self
    }

    /// Caps the number of passes per rule.
    pub fn max_passes(mut self, limit: usize) -> Self {
        self.max_passes = Some(limit);
        self
    }

    /// Adds a preset to enable.
    pub fn preset(mut self, preset: Preset) -> Self {
        if !self.presets.contains(&preset) {
            self.presets.push(preset);
        }
        self
    }
}

/// The `options` section of a rule file. Every field is an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileOptions {
    pub escape_raw_markup: Option<bool>,
    pub max_passes: Option<usize>,
    pub presets: Vec<Preset>,
}

impl FileOptions {
    /// Lays the keys this section sets over `options`.
    pub fn overlay(&self, options: &mut EngineOptions) {
        if let Some(escape) = self.escape_raw_markup {
            options.escape_raw_markup = escape;
        }
        if let Some(limit) = self.max_passes {
            options.max_passes = Some(limit);
        }
        for &preset in &self.presets {
            if !options.presets.contains(&preset) {
                options.presets.push(preset);
            }
        }
    }
}

/// A template rule as written in a rule file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDef {
    /// Rule name; an existing name is overridden in place.
    pub name: String,
    /// Regular expression, compiled lazily with `.*` being lazy.
    pub pattern: String,
    /// Replacement template.
    pub template: String,
}

impl RuleDef {
    /// Converts the definition into a template rule.
    pub fn to_rule(&self) -> Rule {
        Rule::template(&self.name, &self.pattern, self.template.as_str())
    }
}

/// A parsed YAML rule file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleFile {
    /// Options laid over those of the engine that loads this file.
    pub options: Option<FileOptions>,
    /// Template rules, in registration order.
    pub rules: Vec<RuleDef>,
}

impl RuleFile {
    /// Parses a rule file from a YAML string.
    ///
    /// ```
    /// use tagmark::RuleFile;
    ///
    /// let file = RuleFile::from_yaml(r#"
    /// rules:
    ///   - name: spoiler
    ///     pattern: '\[spoiler\](.*)\[\/spoiler\]'
    ///     template: '<details>$1</details>'
    /// "#).unwrap();
    /// assert_eq!(file.rules[0].name, "spoiler");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse(yaml, None)
    }

    /// Reads and parses a rule file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TagmarkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content, Some(path.to_path_buf()))
    }
}

fn parse(yaml: &str, path: Option<PathBuf>) -> Result<RuleFile> {
    if yaml.trim().is_empty() {
        return Ok(RuleFile::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| TagmarkError::RuleFile {
        path,
        message: e.to_string(),
    })
}
