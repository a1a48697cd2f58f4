//! Transport layer: HTTP client and the service's wire shapes.

pub mod http_client;
pub mod protocol;

pub use http_client::{HttpClientConfig, HttpPredictionClient};
pub use protocol::{error_message, PredictResponse};
