//! Error type for header condition evaluation.

/// A configured header value pattern failed to compile.
///
/// This is the only failure [`evaluate`](crate::evaluate) can report. It is a
/// configuration problem, not a property of the request: the same pattern
/// fails on every call, so callers should abort the flow step and surface it
/// to an operator instead of treating it as a non-match.
#[derive(Debug, thiserror::Error)]
#[error("invalid header value pattern `{pattern}`: {source}")]
pub struct PatternError {
    pattern: String,
    source: PatternErrorKind,
}

impl PatternError {
    pub(crate) fn new(pattern: impl Into<String>, source: impl Into<PatternErrorKind>) -> Self {
        Self {
            pattern: pattern.into(),
            source: source.into(),
        }
    }

    /// The pattern text as configured.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> &PatternErrorKind {
        &self.source
    }
}

/// Stage at which the pattern was rejected.
#[derive(Debug, thiserror::Error)]
pub enum PatternErrorKind {
    /// The pattern is not valid regex syntax.
    #[error(transparent)]
    Syntax(#[from] regex_syntax::Error),
    /// The pattern parsed but the matcher could not be built, e.g. it
    /// exceeds the size limit.
    #[error(transparent)]
    Build(#[from] regex_automata::meta::BuildError),
}
