//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; level from config, overridable with
//!   RUST_LOG
//! - Metrics are cheap (atomic increments) and exposed for Prometheus scrape
//! - The request ID stamped in `http::request` flows through both

pub mod logging;
pub mod metrics;
