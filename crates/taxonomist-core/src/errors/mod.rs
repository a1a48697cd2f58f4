mod service_error;
mod transport_error;
mod validation_error;

pub use service_error::ServiceError;
pub use transport_error::TransportError;
pub use validation_error::ValidationError;

use crate::constants::GENERIC_FAILURE_MESSAGE;

/// Top-level error for every Taxonomist crate.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomistError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("unknown indicator field: {name}")]
    UnknownField { name: String },

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("configuration error: {0}")]
    ConfigError(String),
}

pub type TaxonomistResult<T> = Result<T, TaxonomistError>;

impl TaxonomistError {
    /// Single displayable string for the presentation layer.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Whether resubmitting unchanged input could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Service(_) | Self::SubmissionInFlight
        )
    }
}
