use regex_automata::meta::{self, Regex};
use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Hir, Look};

use crate::config::{Configuration, MatchMode};
use crate::error::PatternError;

/// Comparison applied to each value of the inspected header.
#[derive(Debug)]
pub(crate) enum Operation<'a> {
    /// Exact, case-sensitive equality.
    Eq(&'a str),
    /// Full-string match against a pattern compiled by [`compile_pattern`].
    Regex(Regex),
}

impl<'a> Operation<'a> {
    /// Builds the operation for `config`. Compiles the pattern in regex mode.
    pub(crate) fn from_config(config: &'a Configuration) -> Result<Self, PatternError> {
        match config.mode() {
            MatchMode::Exact => Ok(Operation::Eq(config.header_value())),
            MatchMode::Regex => compile_pattern(config.header_value()).map(Operation::Regex),
        }
    }

    /// True when any of `values` satisfies the operation.
    pub(crate) fn check<'v>(&self, mut values: impl Iterator<Item = &'v str>) -> bool {
        match self {
            Operation::Eq(expected) => values.any(|value| value == *expected),
            Operation::Regex(regex) => values.any(|value| regex.is_match(value)),
        }
    }
}

/// Compiles a header value pattern for full-string matching.
///
/// `.` matches any character including `\n`, and the pattern must cover the
/// whole value: `prod` does not match `prod-42`.
///
/// ```
/// use header_condition::compile_pattern;
///
/// let regex = compile_pattern("a.b").unwrap();
/// assert!(regex.is_match("a\nb"));
/// assert!(!regex.is_match("xa\nb"));
///
/// assert!(compile_pattern("[unclosed").is_err());
/// ```
pub fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
    let hir = ParserBuilder::new()
        .dot_matches_new_line(true)
        .build()
        .parse(pattern)
        .map_err(|e| PatternError::new(pattern, e))?;

    // Anchor the parsed expression, so the pattern's own flags and comments
    // cannot reach the anchors.
    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);

    meta::Builder::new()
        .build_from_hir(&anchored)
        .map_err(|e| PatternError::new(pattern, e))
}
