//! Remote generative service client
//!
//! Speaks the Gemini `generateContent` wire protocol: one synchronous POST
//! per utterance, no streaming. The resolver owns fallback behavior; this
//! layer only reports classified errors.

mod error;
mod gemini;

pub use error::{LlmError, LlmErrorKind};
pub use gemini::{GeminiClient, GenerateResponse, Part, Role, Turn, DEFAULT_ENDPOINT};

/// Configuration for the remote service
#[derive(Debug, Clone, Default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    /// Endpoint override (proxies, tests); the public API URL is used when unset
    pub endpoint: Option<String>,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            endpoint: std::env::var("GEMINI_ENDPOINT").ok(),
        }
    }
}
