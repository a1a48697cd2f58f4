/// The prediction service answered with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// `message` is the service's own text, or the generic fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ServiceError {
    pub fn status(&self) -> u16 {
        match self {
            Self::Rejected { status, .. } => *status,
        }
    }
}
