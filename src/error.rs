use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::{game::GameError, order::OrderError};

/// Errors surfaced by the HTTP handlers.
///
/// Rejected words are not errors; they come back as a normal outcome.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("game session {0} not found")]
    SessionNotFound(Uuid),
    #[error("word must not be blank")]
    BlankWord,
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::BlankWord | Self::Order(_) => StatusCode::BAD_REQUEST,
            Self::Game(GameError::NotStarted) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!("Request failed with {}: {}", status, self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::SessionNotFound(Uuid::nil()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::BlankWord.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(GameError::NotStarted).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(OrderError::UnknownType(9)).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
