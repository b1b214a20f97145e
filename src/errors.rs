use thiserror::Error;

/// FCM registration client error types
#[derive(Error, Debug)]
pub enum FcmError {
    /// No server key (or other required default) was resolvable. This is a
    /// setup error on the caller's side, not a remote failure.
    #[error("missing configuration: {0}")]
    ConfigurationMissing(&'static str),

    /// The token batch exceeds the ceiling enforced by the Instance ID
    /// service. Oversized batches are never chunked or truncated.
    #[error("batch of {count} tokens exceeds the {limit}-token limit")]
    BatchSizeExceeded { count: usize, limit: usize },

    /// The remote service rejected the call with a non-success HTTP status.
    /// `body` carries the diagnostic text the service returned, if any.
    #[error("batch import rejected with status {status}: {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the documented envelope shape.
    /// Distinct from `Transport` so API contract drift is diagnosable.
    #[error("failed to decode batch import response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Connection, TLS, or timeout failure below the HTTP status level.
    #[error("batch import request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
