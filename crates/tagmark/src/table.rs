//! Ordered rule registry.
//!
//! A [`RuleTable`] holds two [`RuleGroup`]s: template rules and transform
//! rules. Each group is an insertion-ordered map from rule name to rule, and
//! its iteration order is the order the rules are applied in.
//!
//! # Override Semantics
//!
//! Inserting a rule whose name already exists replaces the pattern and the
//! replacement in place. The rule keeps its original position, so
//! overriding a default rule never changes when it runs relative to the
//! others. New names are appended.
//!
//! There is no removal operation. A rule can be neutralized by overriding it
//! with a pattern that never matches, but the table itself only grows.

use std::collections::HashMap;

use crate::defaults;
use crate::rule::{Replacement, Rule};

/// Outcome of inserting a rule into a [`RuleGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The name was new; the rule was appended at this position.
    Appended(usize),
    /// The name existed; the rule at this position was replaced.
    Replaced(usize),
}

/// An insertion-ordered map from rule name to rule.
#[derive(Debug, Clone, Default)]
pub struct RuleGroup {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a rule by name.
    pub fn insert(&mut self, rule: Rule) -> Insertion {
        match self.index.get(rule.name()) {
            Some(&position) => {
                self.rules[position] = rule;
                Insertion::Replaced(position)
            }
            None => {
                let position = self.rules.len();
                self.index.insert(rule.name().to_string(), position);
                self.rules.push(rule);
                Insertion::Appended(position)
            }
        }
    }

    /// Returns the rule registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&position| &self.rules[position])
    }

    /// Returns true if a rule is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the position at which `name` is applied.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterates over rules in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Iterates over rule names in application order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the group has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleGroup {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The two rule groups an engine applies, template rules first.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    templates: RuleGroup,
    transforms: RuleGroup,
}

impl RuleTable {
    /// Creates a table with no rules at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the default rule set.
    pub fn default_rules() -> Self {
        let mut table = Self::new();
        for rule in defaults::default_rules() {
            table.templates.insert(rule);
        }
        table
    }

    /// Inserts or overwrites a rule in the group matching its replacement kind.
    pub fn insert(&mut self, rule: Rule) -> Insertion {
        match rule.replacement() {
            Replacement::Template(_) => self.templates.insert(rule),
            Replacement::Transform(_) => self.transforms.insert(rule),
        }
    }

    /// Returns the template rules in application order.
    pub fn template_rules(&self) -> &RuleGroup {
        &self.templates
    }

    /// Returns the transform rules in application order.
    pub fn transform_rules(&self) -> &RuleGroup {
        &self.transforms
    }

    /// Iterates over every rule in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.templates.iter().chain(self.transforms.iter())
    }

    /// Returns the total number of rules.
    pub fn len(&self) -> usize {
        self.templates.len() + self.transforms.len()
    }

    /// Returns true if neither group has rules.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.transforms.is_empty()
    }
}
