use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::CURRENCY_UNIT;

/// Where a GDP estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    /// Produced by the service's model.
    #[default]
    Prediction,
    /// A default value the service substituted for a model run.
    Fallback,
}

impl PredictionSource {
    /// Label shown under the estimate.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prediction => "AI Prediction",
            Self::Fallback => "Fallback calculation",
        }
    }

    /// Interpret the service's free-form source tag.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("fallback") {
            Self::Fallback
        } else {
            Self::Prediction
        }
    }
}

/// A GDP estimate returned by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    /// Estimated GDP in ₹ Crores.
    pub gdp: f64,
    pub source: PredictionSource,
}

impl Prediction {
    pub fn new(gdp: f64, source: PredictionSource) -> Self {
        Self { gdp, source }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == PredictionSource::Fallback
    }

    /// `₹14,000 Crores` style rendering of the estimate.
    pub fn display_crores(&self) -> String {
        let unit = CURRENCY_UNIT.trim_start_matches('₹').trim_start();
        format!("₹{} {unit}", group_thousands(self.gdp))
    }
}

/// Comma-grouped decimal with at most three fraction digits.
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.is_empty();
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}
