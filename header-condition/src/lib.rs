//! Conditional request-header predicate.
//!
//! Decides a single boolean from the inbound request headers and a small
//! [`Configuration`]: a header name, an expected value (literal or pattern),
//! a [`MatchMode`] and a negation flag. The host authentication flow uses the
//! outcome to pick which branch to execute next.
//!
//! # Overview
//!
//! - [`evaluate`] is the stateless entry point.
//! - [`HeaderCondition`] bundles a configuration and implements [`Condition`]
//!   for any subject exposing headers through [`HeaderSource`].
//! - [`RequestHeaders`] is an ordered, case-sensitive header map. `http::HeaderMap`
//!   also implements [`HeaderSource`] with its own case-insensitive lookup.
//!
//! # Example
//!
//! ```
//! use header_condition::{Configuration, RequestHeaders, evaluate};
//!
//! let config = Configuration::exact("X-Env", "prod");
//! let headers = RequestHeaders::from([("X-Env", "prod")]);
//!
//! assert!(evaluate(&config, &headers).unwrap());
//! assert!(!evaluate(&config.clone().negated(true), &headers).unwrap());
//! ```
//!
//! Invalid patterns are only reported in [`MatchMode::Regex`], and only when
//! the header is present:
//!
//! ```
//! use header_condition::{Configuration, RequestHeaders, evaluate};
//!
//! let config = Configuration::regex("X-Env", "prod-(");
//! let headers = RequestHeaders::from([("X-Env", "prod-42")]);
//!
//! assert!(evaluate(&config, &headers).is_err());
//! assert!(!evaluate(&config, &RequestHeaders::new()).unwrap());
//! ```

mod condition;
mod config;
mod error;
mod evaluator;
pub mod headers;
mod operation;

pub use condition::{Condition, HeaderCondition};
pub use config::{Configuration, MatchMode};
pub use error::{PatternError, PatternErrorKind};
pub use evaluator::evaluate;
pub use headers::{HeaderSource, RequestHeaders};
pub use operation::compile_pattern;
