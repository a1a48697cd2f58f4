//! Individual validation rules, in evaluation order.

use taxonomist_core::constants::{UNEMPLOYMENT_RATE_MAX, UNEMPLOYMENT_RATE_MIN};
use taxonomist_core::errors::ValidationError;
use taxonomist_core::models::{parse_indicator, IndicatorField, IndicatorSet};

/// Rule 1: every field must be non-empty.
pub fn check_complete(indicators: &IndicatorSet) -> Result<(), ValidationError> {
    match indicators.iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(ValidationError::MissingField { field }),
        None => Ok(()),
    }
}

/// Rule 2: every field must pass the strict numeric parse.
pub fn check_numeric(indicators: &IndicatorSet) -> Result<(), ValidationError> {
    match indicators
        .iter()
        .find(|(_, value)| parse_indicator(value).is_none())
    {
        Some((field, _)) => Err(ValidationError::NotANumber { field }),
        None => Ok(()),
    }
}

/// Rule 3: unemployment rate within the inclusive percent range.
pub fn check_unemployment_range(indicators: &IndicatorSet) -> Result<(), ValidationError> {
    let field = IndicatorField::UnemploymentRate;
    let value =
        parse_indicator(indicators.get(field)).ok_or(ValidationError::NotANumber { field })?;
    if (UNEMPLOYMENT_RATE_MIN..=UNEMPLOYMENT_RATE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::UnemploymentOutOfRange { value })
    }
}
