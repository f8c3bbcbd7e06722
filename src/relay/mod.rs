//! Outbound relay to the backend service.
//!
//! # Data Flow
//! ```text
//! handler (credential + payload)
//!     → client.rs (build outbound request, forward Cookie header)
//!     → backend service
//!     → outcome (accepted / rejected + upstream JSON body)
//!     → handler maps outcome to the response envelope
//! ```
//!
//! # Design Decisions
//! - Single best-effort attempt; no retries, no caching
//! - Session credential is forwarded verbatim, never inspected
//! - Upstream JSON bodies pass through untouched for diagnostics

pub mod client;

pub use client::{BackendClient, DeleteOutcome, RelayError};
