use agentchat_core::error::ChatError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// Anything the transport layer surfaces: connection failure, DNS
    /// failure, client-initiated abort.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("prediction endpoint returned non-success status {status}: {reason}")]
    Api { status: StatusCode, reason: String },

    /// The response body violated the expected event-stream framing.
    #[error("malformed event stream: {0}")]
    Protocol(String),
}

impl From<PredictError> for ChatError {
    fn from(value: PredictError) -> Self {
        ChatError::Backend(Box::new(value))
    }
}
