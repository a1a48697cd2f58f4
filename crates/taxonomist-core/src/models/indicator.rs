use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::INDICATOR_COUNT;
use crate::errors::TaxonomistError;

/// One of the six economic indicators collected by the form.
///
/// Declaration order is the collection order and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum IndicatorField {
    UnemploymentRate,
    PersonalConsumption,
    GovernmentExpenditure,
    M1,
    M2,
    FederalDebt,
}

impl IndicatorField {
    /// All fields in collection order.
    pub const ALL: [IndicatorField; INDICATOR_COUNT] = [
        IndicatorField::UnemploymentRate,
        IndicatorField::PersonalConsumption,
        IndicatorField::GovernmentExpenditure,
        IndicatorField::M1,
        IndicatorField::M2,
        IndicatorField::FederalDebt,
    ];

    /// Position of this field in [`IndicatorField::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::UnemploymentRate => 0,
            Self::PersonalConsumption => 1,
            Self::GovernmentExpenditure => 2,
            Self::M1 => 3,
            Self::M2 => 4,
            Self::FederalDebt => 5,
        }
    }

    /// Key used by the presentation layer (camelCase form name).
    pub const fn form_key(self) -> &'static str {
        match self {
            Self::UnemploymentRate => "unemploymentRate",
            Self::PersonalConsumption => "personalConsumption",
            Self::GovernmentExpenditure => "governmentExpenditure",
            Self::M1 => "m1",
            Self::M2 => "m2",
            Self::FederalDebt => "federalDebt",
        }
    }

    /// Key used in the prediction request body.
    pub const fn payload_key(self) -> &'static str {
        match self {
            Self::UnemploymentRate => "unemployment_rate",
            Self::PersonalConsumption => "personal_consumption",
            Self::GovernmentExpenditure => "govt_expenditure",
            Self::M1 => "m1_money_supply",
            Self::M2 => "m2_money_supply",
            Self::FederalDebt => "federal_debt",
        }
    }

    /// Human-readable label without the unit suffix.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnemploymentRate => "Unemployment Rate",
            Self::PersonalConsumption => "Personal Consumption",
            Self::GovernmentExpenditure => "Government Expenditure",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::FederalDebt => "Federal Debt",
        }
    }

    /// Unit shown next to the label, if any.
    pub const fn unit(self) -> Option<&'static str> {
        match self {
            Self::UnemploymentRate => Some("%"),
            Self::M1 | Self::M2 => None,
            Self::PersonalConsumption | Self::GovernmentExpenditure | Self::FederalDebt => {
                Some(crate::constants::CURRENCY_UNIT)
            }
        }
    }

    /// Label with the unit in parentheses, e.g. `Unemployment Rate (%)`.
    pub fn display_label(self) -> String {
        match self.unit() {
            Some(unit) => format!("{} ({unit})", self.label()),
            None => self.label().to_string(),
        }
    }

    /// Placeholder text for the input control.
    pub fn placeholder(self) -> String {
        format!("Enter {}", self.label().to_lowercase())
    }

    /// Input granularity hint for the presentation layer.
    pub const fn step(self) -> &'static str {
        match self {
            Self::UnemploymentRate => "0.1",
            _ => "1",
        }
    }
}

impl fmt::Display for IndicatorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_key())
    }
}

impl FromStr for IndicatorField {
    type Err = TaxonomistError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.form_key() == name)
            .ok_or_else(|| TaxonomistError::UnknownField {
                name: name.to_string(),
            })
    }
}

/// Strict numeric parse for a raw indicator value.
///
/// Surrounding whitespace is ignored. Empty-after-trim, garbage, and
/// non-finite spellings (`inf`, `NaN`) yield `None`.
pub fn parse_indicator(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
