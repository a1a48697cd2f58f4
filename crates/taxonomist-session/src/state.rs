//! Per-submission state machine.
//!
//! ```text
//! Idle ─begin─▶ Validating ─reject───▶ Invalid
//!                   │
//!                dispatch
//!                   ▼
//!              Submitting ─succeed─▶ Succeeded
//!                   └──────fail────▶ Failed
//! ```
//!
//! `begin` is accepted from every state: each submission restarts at
//! Validating.

use taxonomist_core::errors::ValidationError;
use taxonomist_core::models::{Prediction, SessionSnapshot};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Invalid { reason: String },
    Submitting,
    Succeeded(Prediction),
    Failed { message: String },
}

impl SubmissionState {
    /// Start a new submission. Clears any previous result and error.
    pub fn begin(&mut self) {
        *self = Self::Validating;
    }

    /// Validating → Invalid.
    pub fn reject(&mut self, error: &ValidationError) {
        debug_assert!(matches!(self, Self::Validating), "reject from {self:?}");
        *self = Self::Invalid {
            reason: error.to_string(),
        };
    }

    /// Validating → Submitting.
    pub fn dispatch(&mut self) {
        debug_assert!(matches!(self, Self::Validating), "dispatch from {self:?}");
        *self = Self::Submitting;
    }

    /// Submitting → Succeeded.
    pub fn succeed(&mut self, prediction: Prediction) {
        debug_assert!(matches!(self, Self::Submitting), "succeed from {self:?}");
        *self = Self::Succeeded(prediction);
    }

    /// Submitting → Failed.
    pub fn fail(&mut self, message: String) {
        debug_assert!(matches!(self, Self::Submitting), "fail from {self:?}");
        *self = Self::Failed { message };
    }

    /// True while a submission has started but not reached a terminal state.
    pub fn is_unfinished(&self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    /// The observable `{ result, error, loading }` triple.
    pub fn snapshot(&self) -> SessionSnapshot {
        match self {
            Self::Idle | Self::Validating => SessionSnapshot::default(),
            Self::Submitting => SessionSnapshot {
                loading: true,
                ..Default::default()
            },
            Self::Succeeded(prediction) => SessionSnapshot {
                result: Some(*prediction),
                ..Default::default()
            },
            Self::Invalid { reason: message } | Self::Failed { message } => SessionSnapshot {
                error: Some(message.clone()),
                ..Default::default()
            },
        }
    }
}
