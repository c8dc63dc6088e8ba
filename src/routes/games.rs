use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::ApiError,
    game::{GameSession, Outcome},
    models::SessionSnapshot,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SubmitWordRequest {
    pub word: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Accepted,
    Rejected,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitWordResponse {
    pub outcome: OutcomeKind,
    /// The word as evaluated, after normalization
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub session: SessionSnapshot,
}

/// Create a session and draw its first root word
pub async fn create_game(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let mut session = GameSession::new();
    session.start_game(&state.word_list, &mut rand::rng());
    let snapshot = session.snapshot();

    tracing::info!(
        "Created game session {} with root word '{}'",
        session.id(),
        snapshot.root_word.as_deref().unwrap_or_default()
    );

    state.sessions.insert(session.id(), session);

    (StatusCode::CREATED, Json(snapshot))
}

pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state
        .sessions
        .get(&session_id)
        .ok_or(ApiError::SessionNotFound(session_id))?;

    Ok(Json(session.snapshot()))
}

pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .remove(&session_id)
        .ok_or(ApiError::SessionNotFound(session_id))?;

    tracing::info!("Removed game session {}", session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Submit a word. Blank input is refused without touching the session.
pub async fn submit_word(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SubmitWordRequest>,
) -> Result<Json<SubmitWordResponse>, ApiError> {
    let word = GameSession::normalize(&payload.word);
    if word.is_empty() {
        return Err(ApiError::BlankWord);
    }

    // The entry guard is held for the whole submission so concurrent
    // requests against one session are applied one at a time.
    let mut session = state
        .sessions
        .get_mut(&session_id)
        .ok_or(ApiError::SessionNotFound(session_id))?;

    let outcome = session.submit(&state.validator, &word)?;

    tracing::info!(
        "Session {} word '{}' {} (score {}, {} found)",
        session_id,
        word,
        if outcome.is_accepted() { "accepted" } else { "rejected" },
        session.score(),
        session.used_words().len()
    );

    let response = match outcome {
        Outcome::Accepted => SubmitWordResponse {
            outcome: OutcomeKind::Accepted,
            word,
            reason: None,
            title: None,
            message: None,
            session: session.snapshot(),
        },
        Outcome::Rejected(rejection) => SubmitWordResponse {
            outcome: OutcomeKind::Rejected,
            word,
            reason: Some(rejection.reason().to_string()),
            title: Some(rejection.title().to_string()),
            message: Some(rejection.message()),
            session: session.snapshot(),
        },
    };

    Ok(Json(response))
}

/// Draw a new root word, keeping found words and score
pub async fn new_word(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut session = state
        .sessions
        .get_mut(&session_id)
        .ok_or(ApiError::SessionNotFound(session_id))?;

    let root_word = session.start_game(&state.word_list, &mut rand::rng());
    tracing::info!("Session {} moved to root word '{}'", session_id, root_word);

    Ok(Json(session.snapshot()))
}

pub async fn start_over(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut session = state
        .sessions
        .get_mut(&session_id)
        .ok_or(ApiError::SessionNotFound(session_id))?;

    let root_word = session.start_over(&state.word_list, &mut rand::rng());
    tracing::info!("Session {} started over with '{}'", session_id, root_word);

    Ok(Json(session.snapshot()))
}
