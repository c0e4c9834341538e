//! The `error` module defines the failure taxonomy of the relay.
//!
//! Configuration and transport failures are fatal for the invocation that
//! hit them and are surfaced to the invoking environment without retry.
//! Decode failures are recoverable per record on the consumer side.

use thiserror::Error;

/// Errors raised while publishing or consuming relay messages.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A required configuration value is missing or empty.
    #[error("{0}")]
    Configuration(String),

    /// The transport rejected a connection, frame, or publish call.
    #[error("transport error: {0}")]
    Transport(String),

    /// A record body could not be decoded as JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<tungstenite::Error> for RelayError {
    fn from(err: tungstenite::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}
