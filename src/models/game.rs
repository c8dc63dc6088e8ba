use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// Session exists but no root word has been drawn yet
    NotStarted,
    InProgress,
}

/// An accepted word as shown to the player, with its letter count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedWord {
    pub word: String,
    pub letters: usize,
}

impl UsedWord {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            letters: word.chars().count(),
        }
    }
}

/// Read-only view of a game session for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub state: RoundState,
    pub root_word: Option<String>,
    /// Most recent first
    pub used_words: Vec<UsedWord>,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}
