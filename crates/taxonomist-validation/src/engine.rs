//! ValidationEngine — implements IValidator by running the rules in order.

use taxonomist_core::errors::ValidationError;
use taxonomist_core::models::IndicatorSet;
use taxonomist_core::traits::IValidator;
use tracing::debug;

use crate::rules;

type Rule = fn(&IndicatorSet) -> Result<(), ValidationError>;

/// Rules in evaluation order. The first failure wins.
const RULES: [(&str, Rule); 3] = [
    ("completeness", rules::check_complete),
    ("numeric", rules::check_numeric),
    ("unemployment_range", rules::check_unemployment_range),
];

/// Stateless validator for raw indicator input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }
}

impl IValidator for ValidationEngine {
    fn validate(&self, indicators: &IndicatorSet) -> Result<(), ValidationError> {
        for (name, rule) in RULES {
            if let Err(e) = rule(indicators) {
                debug!(rule = name, field = %e.field(), "indicator validation failed");
                return Err(e);
            }
        }
        Ok(())
    }
}
