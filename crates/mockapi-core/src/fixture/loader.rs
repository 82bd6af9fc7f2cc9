//! Fixture file reading.

use crate::fixture::error::FixtureError;
use crate::fixture::parser::parse_fixture;
use crate::types::fixture::FixtureResponse;
use std::path::Path;

/// Read and parse a fixture file.
///
/// The file is read on every call, so edits to a fixture's body show up
/// without restarting the server.
pub async fn load_fixture(path: &Path) -> Result<FixtureResponse, FixtureError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_fixture(&content)
}
