//! # taxonomist-validation
//!
//! Validates a raw [`IndicatorSet`](taxonomist_core::IndicatorSet) before it
//! is submitted. Rules run in a fixed order and stop at the first failure:
//!
//! | # | Rule | Message |
//! |---|------|---------|
//! | 1 | Completeness | All fields are required. |
//! | 2 | Numeric form | All values must be numbers. |
//! | 3 | Unemployment range `[0, 100]` | Unemployment rate must be between 0 and 100. |
//!
//! No other ranges are enforced: negative consumption or debt pass.

pub mod engine;
pub mod rules;

pub use engine::ValidationEngine;
