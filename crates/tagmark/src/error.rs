//! Error types for the tagmark crate.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by transform-rule closures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while rendering or loading rules.
///
/// A failed render never produces partial output and never modifies the
/// rule table.
#[derive(Debug, Error)]
pub enum TagmarkError {
    /// A rule's pattern could not be compiled.
    #[error("invalid pattern for rule '{rule}': {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// A transform rule's closure failed while computing a replacement.
    #[error("rule '{rule}' failed to compute a replacement: {source}")]
    RuleEvaluation {
        rule: String,
        #[source]
        source: BoxError,
    },

    /// A rule kept matching after the configured number of passes.
    #[error("rule '{rule}' did not reach a fixpoint within {limit} passes")]
    LoopLimitExceeded { rule: String, limit: usize },

    /// A YAML rule file could not be parsed.
    #[error("failed to parse rule file{}: {message}", display_path(.path))]
    RuleFile {
        path: Option<PathBuf>,
        message: String,
    },

    /// A rule file could not be read from disk.
    #[error("failed to read rule file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TagmarkError {
    /// Returns the name of the rule the error is attributed to, if any.
    pub fn rule(&self) -> Option<&str> {
        match self {
            TagmarkError::Pattern { rule, .. }
            | TagmarkError::RuleEvaluation { rule, .. }
            | TagmarkError::LoopLimitExceeded { rule, .. } => Some(rule),
            TagmarkError::RuleFile { .. } | TagmarkError::Io { .. } => None,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for tagmark operations.
pub type Result<T> = std::result::Result<T, TagmarkError>;
