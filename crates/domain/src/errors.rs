//! Error types used throughout the admin client

use serde_json::Value;
use thiserror::Error;

/// Main error type for the UnifiedPush admin client
#[derive(Error, Debug)]
pub enum UpsError {
    #[error("network error: {0}")]
    Network(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The server answered with a status other than the one the operation
    /// expects. `body` is the decoded response payload exactly as the
    /// server sent it, typically the validator's field-to-message map.
    #[error("unexpected status {status} from server")]
    Api { status: u16, body: Value },

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for admin client operations
pub type Result<T> = std::result::Result<T, UpsError>;
