//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the relay handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Construct the outbound client and the data-access collaborator
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::FrontendConfig;
use crate::db::{BackendDatabase, Database};
use crate::http::request::RequestIdLayer;
use crate::http::{coffees, orders, page};
use crate::relay::BackendClient;

/// Failures while assembling the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid backend base address: {0}")]
    BaseAddress(#[from] url::ParseError),

    #[error("failed to build outbound client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client for relayed mutations.
    pub backend: BackendClient,

    /// Data-access collaborator for the read routes.
    pub db: Arc<dyn Database>,
}

/// HTTP server for the storefront.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server whose data-access collaborator talks to the
    /// configured backend.
    pub fn new(config: FrontendConfig) -> Result<Self, ServerError> {
        let base = parse_base(&config.backend.base_address)?;
        let db = Arc::new(BackendDatabase::new(
            base.clone(),
            config.timeouts.connect_secs,
        )?);
        Self::with_database(config, db)
    }

    /// Create a server with an explicit data-access collaborator.
    pub fn with_database(
        config: FrontendConfig,
        db: Arc<dyn Database>,
    ) -> Result<Self, ServerError> {
        let base = parse_base(&config.backend.base_address)?;
        let backend = BackendClient::new(base, config.timeouts.connect_secs)?;

        let state = AppState { backend, db };
        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &FrontendConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/deletecoffee", post(coffees::delete_coffee))
            .route("/api/getorders", get(orders::get_orders))
            .route("/main", get(page::load_main))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn parse_base(address: &str) -> Result<Url, url::ParseError> {
    // Url::join drops the last path segment without this.
    if address.ends_with('/') {
        Url::parse(address)
    } else {
        Url::parse(&format!("{address}/"))
    }
}
