/// Failures between dispatching a request and reading a usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("request timed out: {reason}")]
    Timeout { reason: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}
