//! Shared fixtures for Taxonomist tests: sample indicator sets, a scripted
//! in-memory prediction service, and a one-shot local HTTP stub server.

pub mod mock_service;
pub mod stub_server;

pub use mock_service::{Gate, MockPredictionService, MockResponse};
pub use stub_server::{unreachable_url, CapturedRequest, StubServer};

use taxonomist_core::models::{IndicatorField, IndicatorSet};

/// Build a set from six raw values in collection order.
pub fn indicators(values: [&str; 6]) -> IndicatorSet {
    IndicatorField::ALL
        .into_iter()
        .zip(values)
        .fold(IndicatorSet::new(), |set, (field, value)| {
            set.with(field, value)
        })
}

/// The canonical end-to-end input: 5 / 1000 / 500 / 200 / 400 / 300.
pub fn sample_indicators() -> IndicatorSet {
    indicators(["5", "1000", "500", "200", "400", "300"])
}

/// A valid set with the given unemployment rate.
pub fn with_unemployment(rate: &str) -> IndicatorSet {
    sample_indicators().with(IndicatorField::UnemploymentRate, rate)
}
