//! # taxonomist-observability
//!
//! Tracing subscriber setup and the structured events emitted over a
//! submission's lifecycle.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{build_filter, init_tracing, init_tracing_with_filter};
