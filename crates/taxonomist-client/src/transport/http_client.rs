//! HTTP client with timeouts and gzip. Exactly one attempt per prediction.

use std::time::Duration;

use taxonomist_core::config::PredictorConfig;
use taxonomist_core::constants::GENERIC_SERVICE_ERROR;
use taxonomist_core::errors::{ServiceError, TaxonomistError, TaxonomistResult, TransportError};
use taxonomist_core::models::{Prediction, PredictionPayload};
use taxonomist_core::traits::IPredictionService;
use tracing::debug;

use super::protocol::{error_message, PredictResponse};

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Full URL of the prediction endpoint.
    pub endpoint_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&PredictorConfig::default())
    }
}

impl From<&PredictorConfig> for HttpClientConfig {
    fn from(config: &PredictorConfig) -> Self {
        Self {
            endpoint_url: config.endpoint_url.clone(),
            timeout: config.timeout(),
            connect_timeout: config.connect_timeout(),
        }
    }
}

impl HttpClientConfig {
    /// Defaults with a different endpoint.
    pub fn with_endpoint(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Default::default()
        }
    }
}

/// Map a reqwest failure onto the transport taxonomy.
fn transport_err(e: reqwest::Error) -> TaxonomistError {
    let reason = e.to_string();
    if e.is_timeout() {
        TransportError::Timeout { reason }.into()
    } else if e.is_decode() {
        TransportError::MalformedResponse { reason }.into()
    } else {
        TransportError::Network { reason }.into()
    }
}

/// Blocking client for the prediction endpoint.
#[derive(Debug)]
pub struct HttpPredictionClient {
    config: HttpClientConfig,
    client: reqwest::blocking::Client,
}

impl HttpPredictionClient {
    pub fn new(config: HttpClientConfig) -> TaxonomistResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(concat!("taxonomist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TaxonomistError::ConfigError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    pub fn from_config(config: &PredictorConfig) -> TaxonomistResult<Self> {
        Self::new(HttpClientConfig::from(config))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.config.endpoint_url
    }
}

impl IPredictionService for HttpPredictionClient {
    fn predict(&self, payload: &PredictionPayload) -> TaxonomistResult<Prediction> {
        let url = self.config.endpoint_url.as_str();
        debug!(url, "dispatching prediction request");

        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .map_err(transport_err)?;

        let status = response.status();
        let body = response.text().map_err(transport_err)?;
        debug!(status = status.as_u16(), bytes = body.len(), "prediction service responded");

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let parsed = PredictResponse::parse(&body).map_err(|e| TransportError::MalformedResponse {
            reason: format!("invalid prediction response: {e}"),
        })?;
        if !parsed.gdp_prediction.is_finite() {
            return Err(TransportError::MalformedResponse {
                reason: "gdp_prediction is not finite".into(),
            }
            .into());
        }
        Ok(parsed.into_prediction())
    }
}

