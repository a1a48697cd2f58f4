pub mod indicator;
pub mod indicator_set;
pub mod payload;
pub mod prediction;
pub mod snapshot;

pub use indicator::{parse_indicator, IndicatorField};
pub use indicator_set::IndicatorSet;
pub use payload::PredictionPayload;
pub use prediction::{group_thousands, Prediction, PredictionSource};
pub use snapshot::SessionSnapshot;
