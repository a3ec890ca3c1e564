//! Gemini `generateContent` client

use super::LlmError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Wire role. The protocol carries exactly these two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One conversational turn on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text fragment within a turn. Responses may carry parts without a
/// `text` field; those decode as empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: &'a [Turn],
}

/// Decoded `generateContent` response. Every level is optional on the
/// wire, so absence anywhere collapses to "no text".
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

impl GenerateResponse {
    /// Text of the first candidate, all parts joined in order.
    ///
    /// `None` when the candidate structure is absent. Present-but-empty
    /// parts yield `Some("")`; the caller distinguishes the two.
    pub fn first_candidate_text(&self) -> Option<String> {
        let parts = self.candidates.first()?.content.as_ref()?.parts.as_ref()?;
        Some(parts.iter().map(|p| p.text.as_str()).collect())
    }
}

/// Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client for the given credential. `endpoint` overrides the
    /// public API URL (proxies, tests).
    pub fn new(api_key: impl Into<String>, endpoint: Option<&str>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.unwrap_or(DEFAULT_ENDPOINT).to_string(),
        }
    }

    /// Single synchronous round trip, no streaming.
    pub async fn generate(&self, contents: &[Turn]) -> Result<GenerateResponse, LlmError> {
        let request = GenerateRequest { contents };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {e}"))
                } else {
                    LlmError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(LlmError::status(status.as_u16(), body));
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| LlmError::decode(format!("Failed to parse response: {e} - body: {body}")))?;

        // Parseable but wrong-shaped bodies read as "no candidates"; only
        // unparseable JSON is a decode failure.
        Ok(serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Unexpected response shape, treating as empty");
            GenerateResponse::default()
        }))
    }
}
