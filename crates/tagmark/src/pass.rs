//! A single substitution pass of one rule over the working string.
//!
//! The pass scans left to right and replaces every non-overlapping match,
//! resuming right after each one. Wildcard spans are lazy, so a capture that
//! runs up to a closing delimiter stops at the nearest one.
//!
//! For a container that nests inside itself, this pairs the outer opening
//! tag with the innermost closing tag:
//!
//! ```text
//! [ul]a[ul]b[/ul][/ul]
//! pass 1: <ul>a[ul]b</ul>[/ul]     inner opening tag consumed as content
//! pass 2: <ul>a<ul>b</ul></ul>     inner opening tag pairs with the rest
//! pass 3: no match, fixpoint
//! ```
//!
//! Callers repeat passes until one reports no match.

use regex::Regex;

use crate::error::Result;
use crate::rule::Rule;

/// Output of a pass that replaced at least one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutput {
    /// The rewritten string.
    pub text: String,
    /// Number of matches replaced.
    pub replacements: usize,
}

/// Runs one pass of `rule` (compiled as `regex`) over `input`.
///
/// Returns `Ok(None)` when nothing matched, which is the fixpoint condition.
pub fn substitute(rule: &Rule, regex: &Regex, input: &str) -> Result<Option<PassOutput>> {
    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;
    let mut replacements = 0;

    for caps in regex.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&input[last_end..whole.start()]);
        rule.replacement().apply(rule.name(), &caps, &mut output)?;
        last_end = whole.end();
        replacements += 1;
    }

    if replacements == 0 {
        return Ok(None);
    }

    output.push_str(&input[last_end..]);
    Ok(Some(PassOutput {
        text: output,
        replacements,
    }))
}
