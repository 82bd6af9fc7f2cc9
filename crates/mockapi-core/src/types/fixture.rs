//! Canned response described by a fixture file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_STATUS: u16 = 200;
pub const DEFAULT_TIMEOUT_MS: u64 = 1;

/// Response replayed for a matched request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureResponse {
    /// HTTP status code as written in the fixture; values outside 100-999
    /// are rejected when the response is built
    pub status: u16,
    /// Delay in milliseconds before the response is written
    pub timeout_ms: u64,
    /// Response body (every fixture key except `status` and `timeout`)
    pub body: Value,
}

impl Default for FixtureResponse {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            body: Value::Object(Default::default()),
        }
    }
}
