//! Configuration support for the conditional header predicate.
//!
//! Loads [`ConditionConfig`] from YAML, JSON or a flat option map, validates
//! it once and converts it into a [`header_condition::Configuration`]. The
//! [`schema`] module describes the recognized options for the host UI.
//!
//! ```
//! use header_condition::{Condition, RequestHeaders};
//! use header_condition_configuration::ConditionConfig;
//!
//! let config = ConditionConfig::from_yaml(
//!     r#"
//! headerName: X-Env
//! headerValue: "prod-\\d+"
//! regex: true
//! "#,
//! )
//! .unwrap();
//!
//! let condition = config.into_condition().unwrap();
//! let headers = RequestHeaders::from([("X-Env", "prod-42")]);
//! assert!(condition.matches(&headers).unwrap());
//! ```

mod condition;
mod error;
pub mod schema;

pub use condition::ConditionConfig;
pub use error::ConfigError;
pub use schema::{
    CONFIG_PROPERTIES, ConfigProperty, PROVIDER, PropertyType, ProviderDescriptor, Requirement,
};
