//! Server-side front end for the coffee-shop web application.
//!
//! Every route is a request relay: extract a session credential and/or JSON
//! payload from the inbound request, dispatch to a collaborator (the remote
//! backend or the data-access layer), and map the result into a JSON
//! response. No state is held across requests.

pub mod config;
pub mod db;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::FrontendConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
