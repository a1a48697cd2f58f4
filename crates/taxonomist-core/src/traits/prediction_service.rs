use std::sync::Arc;

use crate::errors::TaxonomistResult;
use crate::models::{Prediction, PredictionPayload};

/// The remote service that turns a payload into a GDP estimate.
///
/// Implementations perform exactly one request per call and never retry.
pub trait IPredictionService: Send + Sync {
    fn predict(&self, payload: &PredictionPayload) -> TaxonomistResult<Prediction>;
}

impl<T: IPredictionService + ?Sized> IPredictionService for Arc<T> {
    fn predict(&self, payload: &PredictionPayload) -> TaxonomistResult<Prediction> {
        (**self).predict(payload)
    }
}
