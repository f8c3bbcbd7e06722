//! Main-page data loader.
//!
//! Render-time data, not an API endpoint: the payload is handed to the page
//! as-is, with no `{message, body}` envelope. Collaborator failure
//! propagates through `DbError`'s response mapping.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::db::{Coffee, DbError};
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Serialize)]
pub struct MainPageData {
    coffees: Vec<Coffee>,
}

/// `GET /main`: data for the storefront page.
pub async fn load_main(State(state): State<AppState>) -> Result<Json<MainPageData>, DbError> {
    let start = Instant::now();

    match state.db.get_coffees().await {
        Ok(coffees) => {
            metrics::record_request("main", "GET", 200, start);
            Ok(Json(MainPageData { coffees }))
        }
        Err(e) => {
            metrics::record_request("main", "GET", 500, start);
            Err(e)
        }
    }
}
