//! HTTP request handlers

use super::types::{
    ChatRequest, ChatResponse, ConnectivityStatus, CreateSessionRequest, ErrorResponse,
    LanguageInfo, LanguagesResponse, SessionMessagesResponse, SessionResponse,
};
use super::{AppState, Session};
use crate::conversation::ConversationLog;
use crate::formatter;
use crate::profile::{EducationLevel, Language, UserProfile};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Profile capture
        .route("/api/sessions", post(create_session))
        // Log retrieval for re-rendering
        .route("/api/sessions/:id", get(get_session))
        // Utterance submission
        .route("/api/sessions/:id/chat", post(send_chat))
        // Browser online/offline signals
        .route(
            "/api/connectivity",
            get(get_connectivity).post(set_connectivity),
        )
        // Language selector
        .route("/api/languages", get(list_languages))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Session Creation
// ============================================================

async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Please enter your name".to_string()));
    }
    let Some(education) = EducationLevel::from_code(&req.education) else {
        return Err(AppError::BadRequest(
            "Please select education as 10th or 12th".to_string(),
        ));
    };

    let profile = UserProfile {
        name: name.to_string(),
        education,
    };

    let mut log = ConversationLog::new();
    let greeting = log.append_assistant(greeting_text(&profile.name));

    let session_id = Uuid::new_v4();
    state
        .sessions
        .write()
        .await
        .insert(session_id, Session { profile, log });

    tracing::info!(%session_id, "Session created");

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            greeting,
        }),
    ))
}

// ============================================================
// Session Retrieval
// ============================================================

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionMessagesResponse>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))?;

    Ok(Json(SessionMessagesResponse {
        session_id: id,
        messages: session.log.messages().to_vec(),
    }))
}

// ============================================================
// Chat
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("Message text is empty".to_string()));
    }

    // Append the user message and snapshot what the resolver needs, then
    // release the lock for the duration of the remote call. The trimmed
    // text is what gets stored, sent remotely, and searched.
    let (user_message, history, profile) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))?;

        let history = session.log.messages().to_vec();
        let user_message = session.log.append_user(text);
        (user_message, history, session.profile.clone())
    };

    let online = state.connectivity.is_online();
    let raw_reply = state
        .resolver
        .resolve(text, &history, &profile, req.language, online)
        .await;

    let reply = formatter::clean(&raw_reply);
    let lines = formatter::format(&raw_reply);

    let assistant_message = {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))?;
        session.log.append_assistant(reply)
    };

    tracing::info!(
        session_id = %id,
        online,
        reply_len = assistant_message.text.len(),
        "Utterance resolved"
    );

    Ok(Json(ChatResponse {
        user_message,
        assistant_message,
        lines,
        online,
    }))
}

// ============================================================
// Connectivity
// ============================================================

async fn get_connectivity(State(state): State<AppState>) -> Json<ConnectivityStatus> {
    Json(ConnectivityStatus {
        online: state.connectivity.is_online(),
    })
}

async fn set_connectivity(
    State(state): State<AppState>,
    Json(req): Json<ConnectivityStatus>,
) -> Json<ConnectivityStatus> {
    state.connectivity.set_online(req.online);
    Json(ConnectivityStatus { online: req.online })
}

// ============================================================
// Languages
// ============================================================

async fn list_languages() -> Json<LanguagesResponse> {
    let languages = Language::ALL
        .iter()
        .map(|lang| LanguageInfo {
            code: lang.code().to_string(),
            label: lang.label().to_string(),
        })
        .collect();

    Json(LanguagesResponse { languages })
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("college-advisor ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Greeting
// ============================================================

/// Assistant greeting seeded into every new session log
fn greeting_text(name: &str) -> String {
    format!(
        "Hello {name}! I'm your Kashmir College Advisor AI. Select your language and ask me \
         about colleges in Jammu and Kashmir, admission processes, courses, scholarships, and more."
    )
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
