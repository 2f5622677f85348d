//! Condition seam consumed by the host flow engine.

use std::sync::Arc;

use crate::config::Configuration;
use crate::error::PatternError;
use crate::evaluator::evaluate;
use crate::headers::HeaderSource;

/// A branching condition evaluated against a subject of the host flow.
///
/// Implementations hold no mutable state, so one instance can be shared by
/// every request.
pub trait Condition<S: ?Sized> {
    /// Decides whether the branch guarded by this condition runs.
    fn matches(&self, subject: &S) -> Result<bool, PatternError>;
}

impl<S, T> Condition<S> for Box<T>
where
    S: ?Sized,
    T: Condition<S> + ?Sized,
{
    fn matches(&self, subject: &S) -> Result<bool, PatternError> {
        self.as_ref().matches(subject)
    }
}

impl<S, T> Condition<S> for Arc<T>
where
    S: ?Sized,
    T: Condition<S> + ?Sized,
{
    fn matches(&self, subject: &S) -> Result<bool, PatternError> {
        self.as_ref().matches(subject)
    }
}

/// Header condition bound to its configuration.
///
/// ```
/// use header_condition::{Condition, Configuration, HeaderCondition};
/// use http::HeaderMap;
///
/// let condition = HeaderCondition::new(Configuration::exact("X-Env", "prod"));
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-env", "prod".parse().unwrap());
///
/// assert!(condition.matches(&headers).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCondition {
    config: Configuration,
}

impl HeaderCondition {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn into_config(self) -> Configuration {
        self.config
    }
}

impl From<Configuration> for HeaderCondition {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}

impl<S> Condition<S> for HeaderCondition
where
    S: HeaderSource + ?Sized,
{
    fn matches(&self, subject: &S) -> Result<bool, PatternError> {
        evaluate(&self.config, subject)
    }
}
