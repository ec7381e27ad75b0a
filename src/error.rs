//! Crate-level error types.
//!
//! [`BowlError`] unifies every error source (configuration, HTTP, JSON,
//! selection rules) behind a single enum so callers can match on the variant
//! they care about while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BowlError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum BowlError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request could not be sent or its body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered with a non-success status code.
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The backend did not answer within the configured timeout.
    #[error("{endpoint} timed out")]
    Timeout { endpoint: &'static str },

    /// The backend answered with a body that does not satisfy the contract.
    #[error("invalid response from {endpoint}: {reason}")]
    InvalidResponse {
        endpoint: &'static str,
        reason: String,
    },

    /// A list of items cannot form a catalog.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The client runs without a backend.
    #[error("backend disabled (offline mode)")]
    Offline,

    /// The item id is not part of the loaded catalog.
    #[error("unknown item id {0}")]
    UnknownItem(u32),

    /// Submit was requested with nothing selected.
    #[error("cannot submit an empty selection")]
    EmptySelection,

    /// Submit was requested while another submission is pending.
    #[error("an order submission is already in flight")]
    SubmissionInFlight,

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),
}
