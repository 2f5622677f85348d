use tracing::{debug, trace, warn};

use crate::config::Configuration;
use crate::error::PatternError;
use crate::headers::HeaderSource;
use crate::operation::Operation;

/// Evaluates a header condition against the current request headers.
///
/// Returns the raw match XOR [`Configuration::negate`]. The raw match is
/// `false` without looking at the mode when the expected value is empty or the
/// header has no values; in that case the pattern is not compiled either.
///
/// # Errors
///
/// Returns [`PatternError`] in [`MatchMode::Regex`](crate::MatchMode::Regex)
/// when the header is present and the configured pattern does not compile.
/// The pattern is compiled on every call.
///
/// # Examples
///
/// ```
/// use header_condition::{Configuration, RequestHeaders, evaluate};
///
/// let headers = RequestHeaders::from([("X-Env", "prod-42")]);
///
/// assert!(evaluate(&Configuration::regex("X-Env", r"prod-\d+"), &headers).unwrap());
/// assert!(!evaluate(&Configuration::regex("X-Env", "prod"), &headers).unwrap());
/// ```
pub fn evaluate<H>(config: &Configuration, headers: &H) -> Result<bool, PatternError>
where
    H: HeaderSource + ?Sized,
{
    let raw_match = raw_match(config, headers)?;
    let result = raw_match ^ config.negate();

    debug!(
        header = config.header_name(),
        mode = %config.mode(),
        raw_match,
        negate = config.negate(),
        result,
        "header condition evaluated"
    );

    Ok(result)
}

fn raw_match<H>(config: &Configuration, headers: &H) -> Result<bool, PatternError>
where
    H: HeaderSource + ?Sized,
{
    if config.header_value().is_empty() {
        trace!(
            header = config.header_name(),
            "empty expected value, no match"
        );
        return Ok(false);
    }

    let mut values = headers.header_values(config.header_name()).peekable();
    if values.peek().is_none() {
        trace!(header = config.header_name(), "header absent, no match");
        return Ok(false);
    }

    let operation = Operation::from_config(config).inspect_err(|error| {
        warn!(header = config.header_name(), %error, "header condition pattern rejected");
    })?;

    Ok(operation.check(values))
}
