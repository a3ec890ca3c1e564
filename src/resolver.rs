//! Response resolver
//!
//! The core of the advisor: turns a submitted utterance into reply text.
//! The connectivity snapshot the caller passes in selects the path — a
//! remote generative call when online, a local record search when offline.
//! Resolution is total: every failure maps to a fixed reply string, never
//! an error.

#[cfg(test)]
mod proptests;

use crate::conversation::{Message, Sender};
use crate::llm::{GeminiClient, GenerateResponse, Turn};
use crate::profile::{Language, UserProfile};
use crate::store::{CollegeRecord, RecordStore};

/// Reply when the remote call fails outright
pub const TECHNICAL_DIFFICULTIES: &str =
    "Sorry, I am experiencing technical difficulties. Please try again later.";

/// Reply when the response carries no candidate text structure
pub const COULD_NOT_UNDERSTAND: &str =
    "Sorry, I couldn't understand that. Could you please rephrase?";

/// Reply when the candidate text is empty once asterisks are stripped
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I didn't get that. Could you please try again?";

/// Reply when offline search finds nothing
pub const NO_OFFLINE_MATCHES: &str = "No matching colleges found in offline mode.";

/// Resolves utterances to reply text.
#[derive(Clone)]
pub struct Resolver {
    gemini: GeminiClient,
    store: RecordStore,
}

impl Resolver {
    pub fn new(gemini: GeminiClient, store: RecordStore) -> Self {
        Self { gemini, store }
    }

    /// Resolve one utterance. `history` is the conversation so far, not
    /// including `utterance`; `online` is the connectivity snapshot taken
    /// at submission and holds for the whole call.
    pub async fn resolve(
        &self,
        utterance: &str,
        history: &[Message],
        profile: &UserProfile,
        language: Language,
        online: bool,
    ) -> String {
        if online {
            self.resolve_remote(utterance, history, profile, language)
                .await
        } else {
            self.resolve_local(utterance)
        }
    }

    async fn resolve_remote(
        &self,
        utterance: &str,
        history: &[Message],
        profile: &UserProfile,
        language: Language,
    ) -> String {
        let transcript = build_transcript(utterance, history, profile, language);

        let response = match self.gemini.generate(&transcript).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(kind = ?err.kind, error = %err, "Remote generate failed");
                return TECHNICAL_DIFFICULTIES.to_string();
            }
        };

        reply_text(&response)
    }

    fn resolve_local(&self, utterance: &str) -> String {
        let matches = match self.store.search(utterance) {
            Ok(matches) => matches,
            Err(err) => {
                tracing::error!(error = %err, "Offline search failed");
                return NO_OFFLINE_MATCHES.to_string();
            }
        };

        if matches.is_empty() {
            return NO_OFFLINE_MATCHES.to_string();
        }
        render_matches(&matches)
    }
}

/// Build the remote transcript: one turn per history message in order,
/// then the current utterance as the final user turn (a duplicate of the
/// last history entry is allowed). The fused instruction rides on the
/// first user-authored turn, wherever it falls — the log usually opens
/// with the assistant greeting.
pub fn build_transcript(
    utterance: &str,
    history: &[Message],
    profile: &UserProfile,
    language: Language,
) -> Vec<Turn> {
    let instruction = system_instruction(profile, language);
    let mut turns = Vec::with_capacity(history.len() + 1);
    let mut fused = false;

    for message in history {
        let turn = match message.sender {
            Sender::User if !fused => {
                fused = true;
                Turn::user(format!("{instruction}\n\n{}", message.text))
            }
            Sender::User => Turn::user(message.text.clone()),
            Sender::Assistant => Turn::assistant(message.text.clone()),
        };
        turns.push(turn);
    }

    if fused {
        turns.push(Turn::user(utterance));
    } else {
        turns.push(Turn::user(format!("{instruction}\n\n{utterance}")));
    }

    turns
}

/// Fused system instruction carried by the first user-authored turn.
pub fn system_instruction(profile: &UserProfile, language: Language) -> String {
    format!(
        "You are an expert career advisor AI focused ONLY on Jammu and Kashmir colleges. \
         Respond ONLY in the language {language}. The student is named {name} and has \
         completed {education}. Stay on topic, be helpful and concise.",
        name = profile.name,
        education = profile.education,
    )
}

/// Map a decoded response to reply text, applying the fixed fallbacks.
fn reply_text(response: &GenerateResponse) -> String {
    let Some(text) = response.first_candidate_text() else {
        tracing::warn!("Response carried no candidate text");
        return COULD_NOT_UNDERSTAND.to_string();
    };

    // The model marks emphasis with asterisks; the chat surface is plain text.
    let stripped: String = text.chars().filter(|&c| c != '*').collect();
    if stripped.is_empty() {
        tracing::warn!("Response text empty after asterisk strip");
        return EMPTY_REPLY_FALLBACK.to_string();
    }
    stripped
}

fn render_matches(records: &[CollegeRecord]) -> String {
    records
        .iter()
        .map(record_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One display block per matched record
fn record_block(record: &CollegeRecord) -> String {
    format!(
        "{name} ({district})\nType: {kind}\nCourses: {courses}\nScholarships: {scholarships}\nWebsite: {link}",
        name = record.name,
        district = record.district,
        kind = record.kind,
        courses = record.courses,
        scholarships = record.scholarships,
        link = record.link,
    )
}
