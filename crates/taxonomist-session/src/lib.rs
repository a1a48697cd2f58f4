//! # taxonomist-session
//!
//! One user's session with the GDP calculator:
//!
//! - [`InputCollector`] stores the six raw indicator strings.
//! - [`SubmissionState`] is the per-submission state machine; the observable
//!   `{ result, error, loading }` triple is derived from it, never set
//!   field by field.
//! - [`PredictionSession`] runs validate → build payload → predict behind a
//!   single-flight gate.

pub mod collector;
pub mod session;
pub mod state;

pub use collector::InputCollector;
pub use session::PredictionSession;
pub use state::SubmissionState;
