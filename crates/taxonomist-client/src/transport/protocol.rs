//! Wire shapes of the prediction service.
//!
//! The request body is [`PredictionPayload`](taxonomist_core::PredictionPayload)
//! serialized as-is.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use taxonomist_core::models::{Prediction, PredictionSource};

/// Body of a successful response.
///
/// Only `gdp_prediction` is required. The tag fields are optional hints and
/// a value of the wrong type is ignored rather than failing the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Estimated GDP. Must be a JSON number.
    pub gdp_prediction: f64,
    /// Free-form model tag; `"fallback"` marks a substituted default.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Older name for `source`. Consulted only when `source` is absent.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    /// Explicit fallback flag, for services that prefer a boolean.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub fallback: bool,
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(de)?, Value::Bool(true)))
}

impl PredictResponse {
    /// Parse a success body. Anything but a numeric `gdp_prediction` in a
    /// JSON object is an error.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// The model tag, `source` first, then `model_used`.
    pub fn tag(&self) -> Option<&str> {
        self.source.as_deref().or(self.model_used.as_deref())
    }

    pub fn source(&self) -> PredictionSource {
        if self.fallback {
            return PredictionSource::Fallback;
        }
        self.tag().map(PredictionSource::from_tag).unwrap_or_default()
    }

    pub fn into_prediction(self) -> Prediction {
        Prediction::new(self.gdp_prediction, self.source())
    }
}

/// Pull a non-empty `message` string out of an error body of any shape.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
