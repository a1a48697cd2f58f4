use crate::errors::ValidationError;
use crate::models::{IndicatorSet, PredictionPayload};

/// Checks a raw indicator set before anything is sent.
pub trait IValidator: Send + Sync {
    /// `Ok(())` when the set may be submitted, otherwise the first failing rule.
    fn validate(&self, indicators: &IndicatorSet) -> Result<(), ValidationError>;

    /// Validate, then coerce into the numeric payload.
    fn validated_payload(
        &self,
        indicators: &IndicatorSet,
    ) -> Result<PredictionPayload, ValidationError> {
        self.validate(indicators)?;
        PredictionPayload::try_from(indicators)
    }
}
