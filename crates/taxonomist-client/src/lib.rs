//! # taxonomist-client
//!
//! Blocking HTTP transport to the external prediction service. One POST per
//! call, JSON in and out, no retries. Non-success statuses become
//! `ServiceError`, everything else that goes wrong becomes `TransportError`.

pub mod transport;

pub use transport::{HttpClientConfig, HttpPredictionClient};
