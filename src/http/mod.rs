//! HTTP surface of the storefront.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum router, middleware layers)
//!     → request.rs (stamp x-request-id)
//!     → session.rs (extract session_token cookie)
//!     → coffees.rs / orders.rs / page.rs (relay handlers)
//!     → response.rs (envelope, status mapping)
//! ```

pub mod coffees;
pub mod orders;
pub mod page;
pub mod request;
pub mod response;
pub mod server;
pub mod session;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
