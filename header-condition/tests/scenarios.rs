use header_condition::{Condition, Configuration, HeaderCondition, RequestHeaders, evaluate};
use http::{HeaderMap, HeaderValue};
use pretty_assertions::assert_eq;

fn env_headers(values: &[&str]) -> RequestHeaders {
    values.iter().map(|value| ("X-Env", *value)).collect()
}

#[test]
fn test_exact_value_matches() {
    let config = Configuration::exact("X-Env", "prod");
    assert_eq!(evaluate(&config, &env_headers(&["prod"])).unwrap(), true);
}

#[test]
fn test_exact_value_mismatch() {
    let config = Configuration::exact("X-Env", "prod");
    assert_eq!(evaluate(&config, &env_headers(&["staging"])).unwrap(), false);
}

#[test]
fn test_regex_value_matches() {
    let config = Configuration::regex("X-Env", r"^prod-\d+$");
    assert_eq!(evaluate(&config, &env_headers(&["prod-42"])).unwrap(), true);
}

#[test]
fn test_negated_match_is_false() {
    let config = Configuration::exact("X-Env", "prod").negated(true);
    assert_eq!(evaluate(&config, &env_headers(&["prod"])).unwrap(), false);
}

#[test]
fn test_negated_absent_header_is_true() {
    let config = Configuration::exact("X-Env", "prod").negated(true);
    assert_eq!(evaluate(&config, &RequestHeaders::new()).unwrap(), true);
}

#[test]
fn test_any_value_of_repeated_header_matches() {
    let config = Configuration::exact("X-Env", "prod");
    assert_eq!(evaluate(&config, &env_headers(&["dev", "prod"])).unwrap(), true);
}

#[test]
fn test_regex_any_value_of_repeated_header_matches() {
    let config = Configuration::regex("X-Env", r"prod-\d+");
    assert_eq!(
        evaluate(&config, &env_headers(&["dev", "prod-x", "prod-7"])).unwrap(),
        true
    );
}

#[test]
fn test_regex_is_full_string_match() {
    let config = Configuration::regex("X-Env", "prod");
    assert_eq!(evaluate(&config, &env_headers(&["prod-42"])).unwrap(), false);
    assert_eq!(evaluate(&config, &env_headers(&["preprod"])).unwrap(), false);
}

#[test]
fn test_regex_dot_matches_newline() {
    let config = Configuration::regex("X-Env", "a.b");
    assert_eq!(evaluate(&config, &env_headers(&["a\nb"])).unwrap(), true);
}

#[test]
fn test_exact_mode_does_not_interpret_pattern() {
    let config = Configuration::exact("X-Env", "prod.*");
    assert_eq!(evaluate(&config, &env_headers(&["prod-42"])).unwrap(), false);
    assert_eq!(evaluate(&config, &env_headers(&["prod.*"])).unwrap(), true);
}

#[test]
fn test_negation_inverts_every_outcome() {
    let header_sets = [
        RequestHeaders::new(),
        env_headers(&["prod"]),
        env_headers(&["staging"]),
        env_headers(&["dev", "prod-42"]),
        env_headers(&[""]),
    ];
    let configs = [
        Configuration::exact("X-Env", "prod"),
        Configuration::exact("X-Env", ""),
        Configuration::regex("X-Env", r"prod(-\d+)?"),
        Configuration::regex("X-Other", ".*"),
    ];

    for config in &configs {
        for headers in &header_sets {
            let plain = evaluate(config, headers).unwrap();
            let negated = evaluate(&config.clone().negated(true), headers).unwrap();
            assert_eq!(negated, !plain, "config {config:?}, headers {headers:?}");
        }
    }
}

#[test]
fn test_absent_header_never_matches_in_either_mode() {
    let headers = RequestHeaders::from([("X-Other", "prod")]);

    assert_eq!(evaluate(&Configuration::exact("X-Env", "prod"), &headers).unwrap(), false);
    assert_eq!(evaluate(&Configuration::regex("X-Env", ".*"), &headers).unwrap(), false);
}

#[test]
fn test_invalid_pattern_is_an_error_not_a_mismatch() {
    let config = Configuration::regex("X-Env", "prod-[");
    let err = evaluate(&config, &env_headers(&["prod-1"])).unwrap_err();

    assert_eq!(err.pattern(), "prod-[");
    assert!(err.to_string().starts_with("invalid header value pattern `prod-[`"));
}

#[test]
fn test_request_headers_name_lookup_is_case_sensitive() {
    let config = Configuration::exact("x-env", "prod");
    assert_eq!(evaluate(&config, &env_headers(&["prod"])).unwrap(), false);
}

#[test]
fn test_http_header_map_name_lookup_is_case_insensitive() {
    let mut headers = HeaderMap::new();
    headers.append("x-env", HeaderValue::from_static("dev"));
    headers.append("x-env", HeaderValue::from_static("prod"));

    let condition = HeaderCondition::new(Configuration::exact("X-Env", "prod"));
    assert_eq!(condition.matches(&headers).unwrap(), true);
}

#[test]
fn test_http_header_map_values_are_case_sensitive() {
    let mut headers = HeaderMap::new();
    headers.insert("x-env", HeaderValue::from_static("PROD"));

    let condition = HeaderCondition::new(Configuration::exact("x-env", "prod"));
    assert_eq!(condition.matches(&headers).unwrap(), false);
}

#[test]
fn test_verbose_pattern_ending_in_comment_matches() {
    let config = Configuration::regex("X-Env", "(?x)prod # environment");
    assert_eq!(evaluate(&config, &env_headers(&["prod"])).unwrap(), true);
    assert_eq!(evaluate(&config, &env_headers(&["prod-42"])).unwrap(), false);
}
