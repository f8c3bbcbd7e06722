//! List-orders relay.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::Order;
use crate::http::response::{upstream_data_error, Envelope};
use crate::http::server::AppState;
use crate::http::session::SessionToken;
use crate::observability::metrics;

#[derive(Serialize)]
struct OrdersResponse {
    orders: Vec<Order>,
}

/// `GET /api/getorders`
///
/// Asks the data-access collaborator for the session's orders. A failed
/// lookup (including a missing session cookie) answers 520: the
/// data-layer-error marker clients already depend on.
pub async fn get_orders(State(state): State<AppState>, session: SessionToken) -> Response {
    let start = Instant::now();

    let orders = match session.value() {
        Some(token) => state.db.get_orders(token).await,
        None => None,
    };

    match orders {
        Some(orders) => {
            metrics::record_request("getorders", "GET", 200, start);
            (StatusCode::OK, Json(OrdersResponse { orders })).into_response()
        }
        None => {
            tracing::warn!("order lookup failed");
            metrics::record_request("getorders", "GET", 520, start);
            (
                upstream_data_error(),
                Json(Envelope::message_only("Error in getting orders")),
            )
                .into_response()
        }
    }
}
