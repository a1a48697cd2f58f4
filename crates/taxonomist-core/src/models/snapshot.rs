use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::prediction::Prediction;

/// The observable triple the presentation layer renders.
///
/// `result` and `error` are never both present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub result: Option<Prediction>,
    pub error: Option<String>,
    pub loading: bool,
}

impl SessionSnapshot {
    /// GDP value of the current result, if any.
    pub fn result_value(&self) -> Option<f64> {
        self.result.map(|p| p.gdp)
    }
}
