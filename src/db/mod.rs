//! Data-access collaborator seam.
//!
//! # Design Decisions
//! - The frontend owns no storage; `Database` is the boundary to whatever
//!   supplies order and coffee rows
//! - `get_orders` returns `Option`: `None` is the collaborator's failure
//!   signal and the orders route maps it to status 520
//! - `get_coffees` returns `Result`: the page loader propagates its failure

pub mod backend;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

pub use backend::BackendDatabase;

/// An order row as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A coffee inventory row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Errors from the data-access collaborator.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The collaborator could not be reached.
    #[error("data-access request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The collaborator rejected the request outright.
    #[error("data-access request rejected with status {0}")]
    Status(StatusCode),

    /// The collaborator answered with an unexpected payload.
    #[error("data-access response malformed: {0}")]
    Decode(String),
}

impl IntoResponse for DbError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "data-access failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "Data access failed").into_response()
    }
}

/// Data-access collaborator used by the relays.
#[async_trait]
pub trait Database: Send + Sync {
    /// Fetch the orders visible to the holder of `session_token`.
    /// `None` means the collaborator failed to produce a list.
    async fn get_orders(&self, session_token: &str) -> Option<Vec<Order>>;

    /// Fetch the coffee inventory for the main page.
    async fn get_coffees(&self) -> Result<Vec<Coffee>, DbError>;
}
