//! HTTP front for the Paynow donation relay.
//!
//! Exposes `POST /create-payment` plus liveness and metrics endpoints and
//! maps [`relay::RelayError`] kinds to status codes.
//!
//! # Modules
//!
//! - [`config`]: Environment configuration ([`ServerConfig`](config::ServerConfig))
//! - [`state`]: Shared [`AppState`](state::AppState) handed to every handler
//! - [`routes`]: HTTP endpoints
//! - [`error`]: [`ApiError`](error::ApiError), the status-code mapping
//! - [`cors`]: CORS policy
//! - [`metrics`]: Prometheus counters and latency histogram

pub mod config;
pub mod cors;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;
