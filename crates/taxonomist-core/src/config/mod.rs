pub mod defaults;
mod observability_config;
mod predictor_config;

pub use observability_config::ObservabilityConfig;
pub use predictor_config::PredictorConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{TaxonomistError, TaxonomistResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomistConfig {
    pub predictor: PredictorConfig,
    pub observability: ObservabilityConfig,
}

impl TaxonomistConfig {
    /// Parse from a TOML string. Missing sections and keys take defaults.
    pub fn from_toml(input: &str) -> TaxonomistResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| TaxonomistError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> TaxonomistResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaxonomistError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
    }

    /// Apply `TAXONOMIST_*` environment overrides on top of this config.
    pub fn with_env_overrides(self) -> TaxonomistResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> TaxonomistResult<Self> {
        if let Some(url) = lookup(defaults::ENV_PREDICT_URL) {
            self.predictor.endpoint_url = url;
        }
        if let Some(raw) = lookup(defaults::ENV_TIMEOUT_SECS) {
            self.predictor.timeout_secs = raw.trim().parse().map_err(|_| {
                TaxonomistError::ConfigError(format!(
                    "{} must be a whole number of seconds, got {raw:?}",
                    defaults::ENV_TIMEOUT_SECS
                ))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject values no client could run with.
    pub fn validate(&self) -> TaxonomistResult<()> {
        let url = self.predictor.endpoint_url.trim();
        if url.is_empty() {
            return Err(TaxonomistError::ConfigError(
                "predictor.endpoint_url must not be empty".into(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(TaxonomistError::ConfigError(format!(
                "predictor.endpoint_url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.predictor.timeout_secs == 0 {
            return Err(TaxonomistError::ConfigError(
                "predictor.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.predictor.connect_timeout_secs == 0 {
            return Err(TaxonomistError::ConfigError(
                "predictor.connect_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
