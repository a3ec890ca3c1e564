//! LLM error types

use thiserror::Error;

/// Remote call error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LlmError {
    pub kind: LlmErrorKind,
    pub message: String,
}

impl LlmError {
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Network, message)
    }

    /// Non-2xx response. The body is kept verbatim for diagnostics.
    pub fn status(code: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(LlmErrorKind::Status(code), format!("HTTP {code}: {body}"))
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Decode, message)
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// Transport failures, timeouts
    Network,
    /// Non-2xx HTTP status
    Status(u16),
    /// Response body did not decode
    Decode,
}
