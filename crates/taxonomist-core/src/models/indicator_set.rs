use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::indicator::IndicatorField;

/// Raw text for each of the six indicators, exactly as typed.
///
/// Values stay strings until validation so an empty field stays
/// distinguishable from `0`. The key set is fixed by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct IndicatorSet {
    pub unemployment_rate: String,
    pub personal_consumption: String,
    pub government_expenditure: String,
    pub m1: String,
    pub m2: String,
    pub federal_debt: String,
}

impl IndicatorSet {
    /// An empty set: every field is `""`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of one field.
    pub fn get(&self, field: IndicatorField) -> &str {
        match field {
            IndicatorField::UnemploymentRate => &self.unemployment_rate,
            IndicatorField::PersonalConsumption => &self.personal_consumption,
            IndicatorField::GovernmentExpenditure => &self.government_expenditure,
            IndicatorField::M1 => &self.m1,
            IndicatorField::M2 => &self.m2,
            IndicatorField::FederalDebt => &self.federal_debt,
        }
    }

    /// Replace one field's value, leaving the others untouched.
    pub fn set(&mut self, field: IndicatorField, value: impl Into<String>) {
        let slot = match field {
            IndicatorField::UnemploymentRate => &mut self.unemployment_rate,
            IndicatorField::PersonalConsumption => &mut self.personal_consumption,
            IndicatorField::GovernmentExpenditure => &mut self.government_expenditure,
            IndicatorField::M1 => &mut self.m1,
            IndicatorField::M2 => &mut self.m2,
            IndicatorField::FederalDebt => &mut self.federal_debt,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`IndicatorSet::set`].
    pub fn with(mut self, field: IndicatorField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields and raw values in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorField, &str)> + '_ {
        IndicatorField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// True when any field is the empty string.
    pub fn has_empty(&self) -> bool {
        self.iter().any(|(_, value)| value.is_empty())
    }
}
