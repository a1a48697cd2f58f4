use serde::{Deserialize, Serialize};

use super::indicator::{parse_indicator, IndicatorField};
use super::indicator_set::IndicatorSet;
use crate::errors::ValidationError;

/// Numeric request body sent to the prediction service.
///
/// Built once per submission, after validation, from an [`IndicatorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    pub unemployment_rate: f64,
    pub personal_consumption: f64,
    #[serde(rename = "govt_expenditure")]
    pub government_expenditure: f64,
    #[serde(rename = "m1_money_supply")]
    pub m1: f64,
    #[serde(rename = "m2_money_supply")]
    pub m2: f64,
    pub federal_debt: f64,
}

impl PredictionPayload {
    /// Numeric value of one field.
    pub fn get(&self, field: IndicatorField) -> f64 {
        match field {
            IndicatorField::UnemploymentRate => self.unemployment_rate,
            IndicatorField::PersonalConsumption => self.personal_consumption,
            IndicatorField::GovernmentExpenditure => self.government_expenditure,
            IndicatorField::M1 => self.m1,
            IndicatorField::M2 => self.m2,
            IndicatorField::FederalDebt => self.federal_debt,
        }
    }
}

impl TryFrom<&IndicatorSet> for PredictionPayload {
    type Error = ValidationError;

    /// Coerce every raw value. Range rules are the validator's job.
    fn try_from(set: &IndicatorSet) -> Result<Self, Self::Error> {
        let number = |field: IndicatorField| {
            parse_indicator(set.get(field)).ok_or(ValidationError::NotANumber { field })
        };

        Ok(Self {
            unemployment_rate: number(IndicatorField::UnemploymentRate)?,
            personal_consumption: number(IndicatorField::PersonalConsumption)?,
            government_expenditure: number(IndicatorField::GovernmentExpenditure)?,
            m1: number(IndicatorField::M1)?,
            m2: number(IndicatorField::M2)?,
            federal_debt: number(IndicatorField::FederalDebt)?,
        })
    }
}
