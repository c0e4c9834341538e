//! Structured invocation results.
//!
//! Every entry point reports back to the invoking environment with a
//! status/message object, success or failure alike.

use serde::Serialize;

/// Result of one relay invocation.
///
/// Serializes as `{"status": 200, "body": {"message": ...}}` on success and
/// `{"status": 500, "error": ...}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Human-readable confirmation carried by a successful response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub message: String,
}

impl Response {
    /// Builds a success response with the given confirmation message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: Some(Body {
                message: message.into(),
            }),
            error: None,
        }
    }

    /// Builds a failure response with the given error text.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            body: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}
