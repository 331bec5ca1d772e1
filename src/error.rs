use thiserror::Error;

/// Transport failures, collapsed to text a UI can render directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx response. The message is taken from the response body when the
    /// API provides one, otherwise it is the status line.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),
}

/// Failures surfaced by the store. Every variant ends up as a
/// `LoadStatus::Failed` message; nothing escapes the store uncaught.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Caller supplied an id that cannot name a recipe. Rejected before any
    /// request is issued.
    #[error("Invalid recipe id: {0}")]
    InvalidInput(i64),

    #[error(transparent)]
    Transport(#[from] FetchError),
}
