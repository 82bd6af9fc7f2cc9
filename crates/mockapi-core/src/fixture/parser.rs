//! Fixture content parsing.

use crate::fixture::error::FixtureError;
use crate::types::fixture::{FixtureResponse, DEFAULT_STATUS, DEFAULT_TIMEOUT_MS};
use serde_json::{Map, Value};

const STATUS_KEY: &str = "status";
const TIMEOUT_KEY: &str = "timeout";

/// Parse fixture text into a response.
///
/// For a top-level object, `status` and `timeout` are taken out and every
/// other key becomes the body. Any other JSON value is replayed verbatim with
/// the default status and delay.
pub fn parse_fixture(content: &str) -> Result<FixtureResponse, FixtureError> {
    let value: Value = serde_json::from_str(content)?;

    let Value::Object(mut map) = value else {
        return Ok(FixtureResponse {
            body: value,
            ..FixtureResponse::default()
        });
    };

    let status = take_status(&mut map)?;
    let timeout_ms = take_timeout(&mut map)?;

    Ok(FixtureResponse {
        status,
        timeout_ms,
        body: Value::Object(map),
    })
}

fn take_status(map: &mut Map<String, Value>) -> Result<u16, FixtureError> {
    let Some(value) = map.remove(STATUS_KEY) else {
        return Ok(DEFAULT_STATUS);
    };

    value
        .as_u64()
        .and_then(|s| u16::try_from(s).ok())
        .ok_or(FixtureError::InvalidField {
            field: STATUS_KEY,
            value,
        })
}

fn take_timeout(map: &mut Map<String, Value>) -> Result<u64, FixtureError> {
    let Some(value) = map.remove(TIMEOUT_KEY) else {
        return Ok(DEFAULT_TIMEOUT_MS);
    };

    let timeout = match &value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        _ => None,
    };

    timeout.ok_or(FixtureError::InvalidField {
        field: TIMEOUT_KEY,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_parse_fixture_defaults() {
        let response = parse_fixture(r#"{"ok": true}"#).expect("Should parse");
        assert_eq!(response.status, 200);
        assert_eq!(response.timeout_ms, 1);
        assert_eq!(response.body, json!({"ok": true}));
    }

    #[rstest]
    fn test_parse_fixture_strips_control_fields() {
        let response = parse_fixture(r#"{"status": 404, "timeout": 50, "error": "not found"}"#)
            .expect("Should parse");
        assert_eq!(response.status, 404);
        assert_eq!(response.timeout_ms, 50);
        assert_eq!(response.body, json!({"error": "not found"}));
    }

    #[rstest]
    fn test_parse_fixture_only_control_fields() {
        let response = parse_fixture(r#"{"status": 204}"#).expect("Should parse");
        assert_eq!(response.status, 204);
        assert_eq!(response.body, json!({}));
    }

    #[rstest]
    #[case("[1, 2, 3]", json!([1, 2, 3]))]
    #[case("\"text\"", json!("text"))]
    #[case("null", json!(null))]
    fn test_parse_fixture_non_object_is_verbatim(#[case] content: &str, #[case] body: Value) {
        let response = parse_fixture(content).expect("Should parse");
        assert_eq!(response.status, 200);
        assert_eq!(response.timeout_ms, 1);
        assert_eq!(response.body, body);
    }

    #[rstest]
    #[case(r#"{"status": 42}"#, 42)]
    #[case(r#"{"status": 1000}"#, 1000)]
    fn test_parse_fixture_keeps_status_for_the_http_layer(
        #[case] content: &str,
        #[case] expected: u16,
    ) {
        let response = parse_fixture(content).expect("Should parse");
        assert_eq!(response.status, expected);
    }

    #[rstest]
    #[case(r#"{"timeout": 12.9}"#, 12)]
    #[case(r#"{"timeout": 0}"#, 0)]
    fn test_parse_fixture_timeout_values(#[case] content: &str, #[case] expected: u64) {
        let response = parse_fixture(content).expect("Should parse");
        assert_eq!(response.timeout_ms, expected);
    }

    #[rstest]
    #[case(r#"{"status": "200"}"#, "status")]
    #[case(r#"{"status": 70000}"#, "status")]
    #[case(r#"{"status": 200.5}"#, "status")]
    #[case(r#"{"status": null}"#, "status")]
    #[case(r#"{"timeout": -1}"#, "timeout")]
    #[case(r#"{"timeout": "10"}"#, "timeout")]
    fn test_parse_fixture_invalid_field(#[case] content: &str, #[case] expected_field: &str) {
        let err = parse_fixture(content).unwrap_err();
        match err {
            FixtureError::InvalidField { field, .. } => assert_eq!(field, expected_field),
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[rstest]
    #[case("")]
    #[case("{\"ok\": }")]
    #[case("not json")]
    fn test_parse_fixture_malformed(#[case] content: &str) {
        assert!(matches!(
            parse_fixture(content).unwrap_err(),
            FixtureError::Parse(_)
        ));
    }
}
