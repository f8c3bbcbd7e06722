//! `Database` implementation backed by the remote coffee-shop API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::db::{Coffee, Database, DbError, Order};

/// Fetches order and coffee rows from the backend's read endpoints.
pub struct BackendDatabase {
    client: reqwest::Client,
    base: Url,
}

#[derive(Deserialize)]
struct OrdersPayload {
    orders: Vec<Order>,
}

#[derive(Deserialize)]
struct CoffeesPayload {
    coffees: Vec<Coffee>,
}

impl BackendDatabase {
    /// `base` is the backend's base address; `connect_secs` bounds connection
    /// establishment.
    pub fn new(base: Url, connect_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(connect_secs))
            .build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, DbError> {
        self.base
            .join(path)
            .map_err(|e| DbError::Decode(format!("bad endpoint '{path}': {e}")))
    }
}

#[async_trait]
impl Database for BackendDatabase {
    async fn get_orders(&self, session_token: &str) -> Option<Vec<Order>> {
        let url = match self.endpoint("getorders") {
            Ok(u) => u,
            Err(e) => {
                tracing::error!(error = %e, "invalid orders endpoint");
                return None;
            }
        };

        let response = self
            .client
            .get(url)
            .header("Cookie", format!("session_token={session_token}"))
            .send()
            .await;

        match response {
            Ok(r) if r.status().is_success() => {
                r.json::<OrdersPayload>().await.ok().map(|p| p.orders)
            }
            Ok(r) => {
                tracing::warn!(status = %r.status(), "backend rejected orders fetch");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "orders fetch failed");
                None
            }
        }
    }

    async fn get_coffees(&self) -> Result<Vec<Coffee>, DbError> {
        let url = self.endpoint("coffees")?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(DbError::Status(response.status()));
        }

        let payload: CoffeesPayload = response
            .json()
            .await
            .map_err(|e| DbError::Decode(e.to_string()))?;
        Ok(payload.coffees)
    }
}
