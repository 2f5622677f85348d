//! Typed condition configuration.

use std::fmt;

/// How the expected header value is compared with the request values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Case-sensitive string equality.
    #[default]
    Exact,
    /// Full-string regular expression match, `.` matching newlines.
    Regex,
}

impl MatchMode {
    /// Picks [`Regex`](Self::Regex) when `use_regex` is set.
    pub fn from_flag(use_regex: bool) -> Self {
        if use_regex { Self::Regex } else { Self::Exact }
    }

    pub fn is_regex(self) -> bool {
        matches!(self, Self::Regex)
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::Regex => f.write_str("regex"),
        }
    }
}

/// Resolved configuration for a single header condition.
///
/// The header name is used as given: no case normalization happens here, the
/// [`HeaderSource`](crate::HeaderSource) decides how names are compared.
///
/// An empty `header_value` is accepted and never matches.
///
/// # Examples
///
/// ```
/// use header_condition::{Configuration, MatchMode};
///
/// let config = Configuration::regex("X-Env", r"prod-\d+").negated(true);
///
/// assert_eq!(config.header_name(), "X-Env");
/// assert_eq!(config.mode(), MatchMode::Regex);
/// assert!(config.negate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
    header_name: String,
    header_value: String,
    negate: bool,
    mode: MatchMode,
}

impl Configuration {
    pub fn new(
        header_name: impl Into<String>,
        header_value: impl Into<String>,
        mode: MatchMode,
    ) -> Self {
        Self {
            header_name: header_name.into(),
            header_value: header_value.into(),
            negate: false,
            mode,
        }
    }

    /// Matches when any value equals `header_value` exactly.
    pub fn exact(header_name: impl Into<String>, header_value: impl Into<String>) -> Self {
        Self::new(header_name, header_value, MatchMode::Exact)
    }

    /// Matches when any value fully matches `pattern`.
    pub fn regex(header_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(header_name, pattern, MatchMode::Regex)
    }

    /// Sets the negation flag, inverting the final result.
    pub fn negated(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    /// Expected value, or the pattern in [`MatchMode::Regex`].
    pub fn header_value(&self) -> &str {
        &self.header_value
    }

    pub fn negate(&self) -> bool {
        self.negate
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn use_regex(&self) -> bool {
        self.mode.is_regex()
    }
}
