//! Error types for fixture loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a fixture file into a response
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The file could not be read
    #[error("Failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    /// `status` or `timeout` has an unusable value
    #[error("Invalid `{field}` in fixture: {value}")]
    InvalidField {
        field: &'static str,
        value: serde_json::Value,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_fixture_error_read_display() {
        let error = FixtureError::Read {
            path: PathBuf::from("mock-api/users/get.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let display = error.to_string();
        assert!(display.contains("Failed to read fixture"));
        assert!(display.contains("mock-api/users/get.json"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_fixture_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let error: FixtureError = json_err.into();
        assert!(matches!(error, FixtureError::Parse(_)));
        assert!(error.to_string().contains("JSON parsing error"));
    }

    #[rstest]
    #[case("status", serde_json::json!("ok"))]
    #[case("timeout", serde_json::json!(-5))]
    fn test_fixture_error_invalid_field_display(
        #[case] field: &'static str,
        #[case] value: serde_json::Value,
    ) {
        let display = FixtureError::InvalidField {
            field,
            value: value.clone(),
        }
        .to_string();
        assert!(display.contains(field));
        assert!(display.contains(&value.to_string()));
    }
}
