//! Declarative description of the condition's options and provider metadata.
//!
//! Nothing here is evaluated. The host configuration UI and store read these
//! tables to render and persist the condition; [`ConditionConfig`] parses what
//! they hand back.
//!
//! [`ConditionConfig`]: crate::ConditionConfig

use serde::Serialize;

/// Header key to inspect.
pub const HEADER_NAME: &str = "headerName";
/// Literal value or pattern to match.
pub const HEADER_VALUE: &str = "headerValue";
/// Flips the final result.
pub const NEGATE: &str = "negate";
/// Switches to full-pattern matching.
pub const REGEX: &str = "regex";
/// Older stores keep the negation flag under this key.
pub const LEGACY_NEGATE: &str = "not";

/// Value type of an option, as the host store understands it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    #[serde(rename = "String")]
    String,
    #[serde(rename = "boolean")]
    Boolean,
}

/// One recognized configuration option.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProperty {
    pub name: &'static str,
    pub label: &'static str,
    pub help_text: &'static str,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<bool>,
}

/// The four options, in display order.
pub const CONFIG_PROPERTIES: [ConfigProperty; 4] = [
    ConfigProperty {
        name: HEADER_NAME,
        label: "Header name",
        help_text: "HTTP request header name that must match to execute this flow.",
        kind: PropertyType::String,
        required: true,
        default_value: None,
    },
    ConfigProperty {
        name: HEADER_VALUE,
        label: "Expected header value",
        help_text: "Expected value in the HTTP request header",
        kind: PropertyType::String,
        required: true,
        default_value: None,
    },
    ConfigProperty {
        name: NEGATE,
        label: "Negate output",
        help_text: "Apply a NOT to the check result. When this is true, then the condition will \
                    evaluate to true just if request headers do NOT match. When this is false, \
                    the condition will evaluate to true just if request headers do match",
        kind: PropertyType::Boolean,
        required: false,
        default_value: Some(false),
    },
    ConfigProperty {
        name: REGEX,
        label: "Regex",
        help_text: "Check equality with regex",
        kind: PropertyType::Boolean,
        required: false,
        default_value: Some(false),
    },
];

pub fn config_properties() -> &'static [ConfigProperty] {
    &CONFIG_PROPERTIES
}

/// Looks up an option by key. The legacy negation key is not listed.
pub fn property(name: &str) -> Option<&'static ConfigProperty> {
    CONFIG_PROPERTIES.iter().find(|property| property.name == name)
}

/// Requirement levels the flow editor may assign to this condition.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Requirement {
    Required,
    Disabled,
}

/// Static metadata the host registry shows for this condition.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    pub id: &'static str,
    pub display_type: &'static str,
    pub help_text: &'static str,
    pub reference_category: &'static str,
    pub configurable: bool,
    pub user_setup_allowed: bool,
    pub requirement_choices: &'static [Requirement],
    pub properties: &'static [ConfigProperty],
}

pub const PROVIDER: ProviderDescriptor = ProviderDescriptor {
    id: "conditional-header",
    display_type: "Condition - Request Headers",
    help_text: "Conditional authenticator which matches request headers.",
    reference_category: "condition",
    configurable: true,
    user_setup_allowed: false,
    requirement_choices: &[Requirement::Required, Requirement::Disabled],
    properties: &CONFIG_PROPERTIES,
};
