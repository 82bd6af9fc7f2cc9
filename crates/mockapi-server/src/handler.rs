//! Fixture request handler.

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use mockapi_core::fixture::{load_fixture, FixtureError};
use mockapi_core::mocks::{Request, RouteRegistry};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors turned into HTTP responses by the fixture handler
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("No fixture registered for {method} {path}")]
    NotFound { method: Method, path: String },
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error("Fixture status {0} is not a valid HTTP status")]
    InvalidStatus(u16),
}

impl HandlerError {
    fn status(&self) -> StatusCode {
        match self {
            HandlerError::NotFound { .. } => StatusCode::NOT_FOUND,
            HandlerError::Fixture(_) | HandlerError::InvalidStatus(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Failed to serve fixture");
        } else {
            tracing::debug!(error = %self, "Unmatched request");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Answer a request from the fixture of the first matching route.
///
/// The fixture is read on every request, then the response is held back for
/// the fixture's `timeout` without blocking other requests.
pub async fn serve_fixture(
    State(registry): State<Arc<RouteRegistry>>,
    method: Method,
    uri: Uri,
) -> Result<Response, HandlerError> {
    let request = Request::from_parts(method.as_str(), uri.path(), uri.query());

    let Some(route) = registry.find_route(&request) else {
        return Err(HandlerError::NotFound {
            method,
            path: uri.to_string(),
        });
    };

    tracing::debug!(
        request = %uri,
        fixture = %route.fixture.absolute.display(),
        "Resolving request"
    );

    let fixture = load_fixture(&route.fixture.absolute).await?;
    let status = StatusCode::from_u16(fixture.status)
        .map_err(|_| HandlerError::InvalidStatus(fixture.status))?;

    tokio::time::sleep(Duration::from_millis(fixture.timeout_ms)).await;

    Ok((status, Json(fixture.body)).into_response())
}
