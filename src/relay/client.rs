//! HTTP client for the backend service.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use url::Url;

/// Errors on the outbound leg of a relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The backend could not be reached or the call timed out.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered but its body was not JSON.
    #[error("upstream body was not JSON (status {status}): {source}")]
    Decode {
        status: StatusCode,
        source: reqwest::Error,
    },

    /// The configured base address cannot be extended with the call path.
    #[error("invalid upstream endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "relay failure");
        (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
    }
}

/// Result of a delete relayed to the backend.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// Backend returned 2xx; payload is its JSON body.
    Deleted(Value),
    /// Backend returned non-2xx; payload is its JSON error body.
    Rejected { status: StatusCode, body: Value },
}

/// Client for the backend API.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base: Url,
}

impl BackendClient {
    pub fn new(base: Url, connect_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(connect_secs))
            .build()?;
        Ok(Self { client, base })
    }

    /// Relay a coffee deletion to `POST {base}/deletecoffee/{id}`.
    ///
    /// When a session token is present it is forwarded verbatim as
    /// `Cookie: session_token=<value>`; absent tokens send no Cookie header.
    pub async fn delete_coffee(
        &self,
        id: i64,
        session_token: Option<&str>,
    ) -> Result<DeleteOutcome, RelayError> {
        let url = self.base.join(&format!("deletecoffee/{id}"))?;

        let mut request = self.client.post(url);
        if let Some(token) = session_token {
            request = request.header("Cookie", format!("session_token={token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        let ok = status.is_success();

        let body: Value = response
            .json()
            .await
            .map_err(|source| RelayError::Decode { status, source })?;

        if ok {
            Ok(DeleteOutcome::Deleted(body))
        } else {
            Ok(DeleteOutcome::Rejected { status, body })
        }
    }
}
