//! Typed header condition configuration.
//!
//! The host store keeps options as a flat key/value bag. [`ConditionConfig`]
//! is the typed form, loaded from that bag, from YAML or from JSON and
//! validated once:
//!
//! ```yaml
//! headerName: X-Env
//! headerValue: "prod-\\d+"
//! regex: true
//! negate: "false"   # strings are accepted for boolean options
//! ```

use std::fmt;

use header_condition::{Configuration, HeaderCondition, MatchMode, compile_pattern};
use indexmap::IndexMap;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::schema::{HEADER_NAME, HEADER_VALUE, LEGACY_NEGATE, NEGATE, REGEX};

/// Configuration of one header condition, as stored by the host.
///
/// Deserializing goes through the same resolution as the loaders: missing
/// required options, the legacy `not` key and boolean strings are handled
/// identically for YAML, JSON and the flat option bag.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "RawConditionConfig")]
pub struct ConditionConfig {
    pub header_name: String,
    pub header_value: String,
    pub negate: bool,
    pub regex: bool,
}

/// Options as found in the store, before defaults and precedence apply.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct RawConditionConfig {
    #[serde(default)]
    header_name: Option<String>,
    #[serde(default)]
    header_value: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    negate: Option<bool>,
    #[serde(default, rename = "not", deserialize_with = "deserialize_flag")]
    legacy_negate: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    regex: Option<bool>,
}

impl TryFrom<RawConditionConfig> for ConditionConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConditionConfig) -> Result<Self, Self::Error> {
        let config = Self {
            header_name: raw
                .header_name
                .ok_or(ConfigError::MissingOption(HEADER_NAME))?,
            header_value: raw
                .header_value
                .ok_or(ConfigError::MissingOption(HEADER_VALUE))?,
            negate: raw.negate.or(raw.legacy_negate).unwrap_or_default(),
            regex: raw.regex.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl ConditionConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        let raw: RawConditionConfig = serde_saphyr::from_str(input)?;
        Self::try_from(raw)
    }

    /// Parses and validates a JSON document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let raw: RawConditionConfig = serde_json::from_str(input)?;
        Self::try_from(raw)
    }

    /// Builds the configuration from the host's flat option bag.
    ///
    /// Unknown keys are ignored. `negate` takes precedence over the legacy
    /// `not` key when both are present.
    ///
    /// ```
    /// use header_condition_configuration::ConditionConfig;
    ///
    /// let config = ConditionConfig::from_options([
    ///     ("headerName", "X-Env"),
    ///     ("headerValue", "prod"),
    ///     ("negate", "TRUE"),
    /// ])
    /// .unwrap();
    ///
    /// assert!(config.negate);
    /// assert!(!config.regex);
    /// ```
    pub fn from_options<I, K, V>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw = RawConditionConfig::default();

        for (key, value) in options {
            let value = value.as_ref();
            match key.as_ref() {
                HEADER_NAME => raw.header_name = Some(value.to_owned()),
                HEADER_VALUE => raw.header_value = Some(value.to_owned()),
                NEGATE => raw.negate = Some(parse_option(NEGATE, value)?),
                LEGACY_NEGATE => raw.legacy_negate = Some(parse_option(NEGATE, value)?),
                REGEX => raw.regex = Some(parse_option(REGEX, value)?),
                other => debug!(option = other, "ignoring unknown condition option"),
            }
        }

        Self::try_from(raw)
    }

    /// Flat option bag for the host store. Booleans are written as
    /// `"true"`/`"false"`.
    pub fn to_options(&self) -> IndexMap<&'static str, String> {
        IndexMap::from([
            (HEADER_NAME, self.header_name.clone()),
            (HEADER_VALUE, self.header_value.clone()),
            (NEGATE, self.negate.to_string()),
            (REGEX, self.regex.to_string()),
        ])
    }

    /// Checks the pattern in regex mode.
    ///
    /// Empty required options are accepted with a warning: the condition then
    /// never matches before negation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_name.is_empty() {
            warn!(option = HEADER_NAME, "header condition option is empty");
        }
        if self.header_value.is_empty() {
            warn!(option = HEADER_VALUE, "header condition option is empty");
        } else if self.regex {
            compile_pattern(&self.header_value)?;
        }
        Ok(())
    }

    pub fn mode(&self) -> MatchMode {
        MatchMode::from_flag(self.regex)
    }

    /// Validates and converts into the evaluator's configuration.
    pub fn into_configuration(self) -> Result<Configuration, ConfigError> {
        self.validate()?;
        let mode = self.mode();
        Ok(Configuration::new(self.header_name, self.header_value, mode).negated(self.negate))
    }

    pub fn into_condition(self) -> Result<HeaderCondition, ConfigError> {
        self.into_configuration().map(HeaderCondition::new)
    }
}

impl TryFrom<ConditionConfig> for Configuration {
    type Error = ConfigError;

    fn try_from(config: ConditionConfig) -> Result<Self, Self::Error> {
        config.into_configuration()
    }
}

impl From<&Configuration> for ConditionConfig {
    fn from(config: &Configuration) -> Self {
        Self {
            header_name: config.header_name().to_owned(),
            header_value: config.header_value().to_owned(),
            negate: config.negate(),
            regex: config.use_regex(),
        }
    }
}

/// Parses a boolean option. ASCII case is ignored; an empty value means unset.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else {
        None
    }
}

fn parse_option(option: &'static str, value: &str) -> Result<bool, ConfigError> {
    parse_flag(value).ok_or_else(|| ConfigError::InvalidBoolean {
        option,
        value: value.to_owned(),
    })
}

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = Option<bool>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("`true` or `false`")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_flag(value)
            .map(Some)
            .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlagVisitor)
    }
}

/// Boolean option that also accepts `"true"`/`"false"` strings. `null` counts
/// as unset, like an absent key.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(FlagVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_any_ascii_case() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag(" true "), Some(true));
    }

    #[test]
    fn parse_flag_treats_empty_as_false() {
        assert_eq!(parse_flag(""), Some(false));
    }

    #[test]
    fn parse_flag_rejects_other_text() {
        assert_eq!(parse_flag("yes"), None);
        assert_eq!(parse_flag("1"), None);
    }

    #[test]
    fn legacy_negate_is_overridden_by_negate() {
        let config = ConditionConfig::from_options([
            ("headerName", "X-Env"),
            ("headerValue", "prod"),
            ("not", "true"),
            ("negate", "false"),
        ])
        .unwrap();
        assert!(!config.negate);
    }

    #[test]
    fn legacy_negate_alone_is_honored() {
        let config = ConditionConfig::from_options([
            ("headerName", "X-Env"),
            ("headerValue", "prod"),
            ("not", "true"),
        ])
        .unwrap();
        assert!(config.negate);
    }

    #[test]
    fn into_configuration_keeps_every_field() {
        let config = ConditionConfig {
            header_name: "X-Env".into(),
            header_value: r"prod-\d+".into(),
            negate: true,
            regex: true,
        };

        let configuration = config.into_configuration().unwrap();
        assert_eq!(configuration.header_name(), "X-Env");
        assert_eq!(configuration.header_value(), r"prod-\d+");
        assert!(configuration.negate());
        assert_eq!(configuration.mode(), MatchMode::Regex);
    }

    #[test]
    fn into_configuration_rejects_invalid_pattern() {
        let config = ConditionConfig {
            header_name: "X-Env".into(),
            header_value: "prod-(".into(),
            negate: false,
            regex: true,
        };

        let err = Configuration::try_from(config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern(_)), "{err:?}");
    }

    #[test]
    fn to_options_writes_booleans_as_strings() {
        let config = ConditionConfig {
            header_name: "X-Env".into(),
            header_value: "prod".into(),
            negate: true,
            regex: false,
        };
        let options = config.to_options();

        assert_eq!(options[NEGATE], "true");
        assert_eq!(options[REGEX], "false");
        assert_eq!(ConditionConfig::from_options(&options).unwrap(), config);
    }
}
