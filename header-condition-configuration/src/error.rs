use header_condition::PatternError;

/// Errors raised while loading a header condition configuration.
///
/// All of these are detected once, at load time. A configuration that loads
/// successfully can only fail evaluation through a pattern error, and only if
/// it was built without going through this crate.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required option is absent.
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),

    /// A boolean option holds something other than `true` or `false`.
    #[error("option `{option}` expects `true` or `false`, got `{value}`")]
    InvalidBoolean {
        option: &'static str,
        value: String,
    },

    /// Regex mode is enabled and the header value does not compile.
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_saphyr::Error),
}
