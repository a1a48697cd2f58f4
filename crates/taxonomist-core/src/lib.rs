//! # taxonomist-core
//!
//! Foundation crate for the Taxonomist GDP predictor.
//! Defines the indicator data model, the validated payload, prediction
//! results, errors, config, and the seams (traits) the other crates plug into.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TaxonomistConfig;
pub use errors::{TaxonomistError, TaxonomistResult};
pub use models::{
    IndicatorField, IndicatorSet, Prediction, PredictionPayload, PredictionSource,
    SessionSnapshot,
};
