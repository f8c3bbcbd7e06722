//! Delete-coffee relay.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::http::session::SessionToken;
use crate::observability::metrics;
use crate::relay::{DeleteOutcome, RelayError};

/// Inbound payload: the backend's field name is uppercase.
#[derive(Debug, Deserialize)]
pub struct DeleteCoffeeRequest {
    #[serde(rename = "ID")]
    pub id: i64,
}

/// `POST /api/deletecoffee`
///
/// Relays the deletion to the backend, forwarding the session cookie. Every
/// upstream rejection collapses to 400; the upstream status survives only in
/// the logs and in the forwarded error body.
pub async fn delete_coffee(
    State(state): State<AppState>,
    session: SessionToken,
    Json(request): Json<DeleteCoffeeRequest>,
) -> Result<Response, RelayError> {
    let start = Instant::now();

    tracing::debug!(coffee_id = request.id, "relaying coffee deletion");

    let outcome = match state
        .backend
        .delete_coffee(request.id, session.value())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            metrics::record_request("deletecoffee", "POST", 502, start);
            return Err(e);
        }
    };

    match outcome {
        DeleteOutcome::Deleted(body) => {
            metrics::record_request("deletecoffee", "POST", 200, start);
            Ok((
                StatusCode::OK,
                Json(Envelope::with_body("Coffee deleted successfully!", body)),
            )
                .into_response())
        }
        DeleteOutcome::Rejected { status, body } => {
            tracing::warn!(
                coffee_id = request.id,
                upstream_status = %status,
                "backend rejected coffee deletion"
            );
            metrics::record_request("deletecoffee", "POST", 400, start);
            Ok((
                StatusCode::BAD_REQUEST,
                Json(Envelope::with_body("Error in deleting coffee", body)),
            )
                .into_response())
        }
    }
}
