//! API request and response types

use crate::conversation::Message;
use crate::profile::Language;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to start a session (profile capture)
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
    /// Education code, "10th" or "12th"
    pub education: String,
}

/// Response for session creation
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub greeting: Message,
}

/// Response with a session's full message log
#[derive(Debug, Serialize)]
pub struct SessionMessagesResponse {
    pub session_id: Uuid,
    pub messages: Vec<Message>,
}

/// Request to submit an utterance
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
    pub language: Language,
}

/// Response for a resolved utterance
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub user_message: Message,
    pub assistant_message: Message,
    /// Cleaned reply split into display lines
    pub lines: Vec<String>,
    /// Which path served the reply
    pub online: bool,
}

/// Connectivity status, reported by the browser and echoed back
#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectivityStatus {
    pub online: bool,
}

/// One selectable reply language
#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: String,
    pub label: String,
}

/// Response for the language selector
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
