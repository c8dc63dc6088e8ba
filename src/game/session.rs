use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use super::{Outcome, Scorer, WordValidator};
use crate::dictionary::WordList;
use crate::models::{RoundState, SessionSnapshot, UsedWord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game has not been started")]
    NotStarted,
}

/// One player's game: the root word, the words found so far and the score.
///
/// All state changes go through `start_game`, `start_over` and `submit`.
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    state: RoundState,
    root_word: String,
    used_words: Vec<String>,
    score: i32,
    created_at: DateTime<Utc>,
    last_activity: Instant,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: RoundState::NotStarted,
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            created_at: Utc::now(),
            last_activity: Instant::now(),
        }
    }

    /// Draw a new root word. Found words and score carry over.
    pub fn start_game<R: Rng + ?Sized>(&mut self, words: &WordList, rng: &mut R) -> &str {
        self.root_word = words.choose(rng).to_string();
        self.state = RoundState::InProgress;
        self.touch();

        tracing::debug!("Session {} started with root word '{}'", self.id, self.root_word);

        &self.root_word
    }

    /// Draw a new root word and wipe the found words and score
    pub fn start_over<R: Rng + ?Sized>(&mut self, words: &WordList, rng: &mut R) -> &str {
        self.used_words.clear();
        self.score = 0;
        self.start_game(words, rng)
    }

    /// Evaluate a player's word and update score and found words.
    ///
    /// The raw input is lowercased and trimmed first. An accepted word is
    /// prepended to the found words; a rejection leaves them untouched.
    /// Either way the score moves by one.
    pub fn submit(&mut self, validator: &WordValidator, input: &str) -> Result<Outcome, GameError> {
        if self.state == RoundState::NotStarted {
            return Err(GameError::NotStarted);
        }

        self.touch();
        let candidate = Self::normalize(input);

        let outcome = match validator.validate(&candidate, &self.root_word, &self.used_words) {
            Ok(()) => Outcome::Accepted,
            Err(rejection) => Outcome::Rejected(rejection),
        };

        self.score = Scorer::apply(self.score, &outcome);
        if outcome.is_accepted() {
            self.used_words.insert(0, candidate);
        }

        tracing::debug!(
            "Session {} submitted '{}' against '{}': {:?} (score {})",
            self.id,
            input.trim(),
            self.root_word,
            outcome,
            self.score
        );

        Ok(outcome)
    }

    /// Lowercase and trim surrounding whitespace
    pub fn normalize(input: &str) -> String {
        input.trim().to_lowercase()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn root_word(&self) -> Option<&str> {
        match self.state {
            RoundState::NotStarted => None,
            RoundState::InProgress => Some(&self.root_word),
        }
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// How long the session has gone without a player action
    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_activity)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            state: self.state,
            root_word: self.root_word().map(str::to_string),
            used_words: self.used_words.iter().map(|w| UsedWord::new(w)).collect(),
            score: self.score,
            created_at: self.created_at,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::Rejection;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::Arc;

    fn validator() -> WordValidator {
        let lexicon =
            Dictionary::from_words("en", ["silk", "milk", "worm", "work", "slow", "lows"]);
        WordValidator::new(Arc::new(lexicon), "en")
    }

    fn started_session() -> GameSession {
        let words = WordList::from_words(["silkworm"]).unwrap();
        let mut session = GameSession::new();
        session.start_game(&words, &mut StdRng::seed_from_u64(0));
        session
    }

    #[test]
    fn test_new_session_is_not_started() {
        let session = GameSession::new();
        assert_eq!(session.snapshot().state, RoundState::NotStarted);
        assert_eq!(session.root_word(), None);
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn test_submit_before_start_fails() {
        let mut session = GameSession::new();
        assert_eq!(session.submit(&validator(), "silk"), Err(GameError::NotStarted));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_accepted_word_is_prepended_and_scored() {
        let mut session = started_session();
        let v = validator();

        assert_eq!(session.submit(&v, "silk"), Ok(Outcome::Accepted));
        assert_eq!(session.submit(&v, "worm"), Ok(Outcome::Accepted));

        assert_eq!(session.score(), 2);
        assert_eq!(session.used_words(), ["worm", "silk"]);
    }

    #[test]
    fn test_input_is_normalized() {
        let mut session = started_session();
        assert_eq!(session.submit(&validator(), "  SiLK \n"), Ok(Outcome::Accepted));
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn test_short_word_costs_a_point() {
        let mut session = started_session();
        let outcome = session.submit(&validator(), "owl").unwrap();

        assert_eq!(outcome, Outcome::Rejected(Rejection::TooShort { min_length: 3 }));
        assert_eq!(session.score(), -1);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn test_root_word_is_rejected() {
        let mut session = started_session();
        let outcome = session.submit(&validator(), "silkworm").unwrap();
        assert_eq!(outcome, Outcome::Rejected(Rejection::SameAsRoot));
    }

    #[test]
    fn test_resubmitting_is_always_duplicate() {
        let mut session = started_session();
        let v = validator();

        assert_eq!(session.submit(&v, "silk"), Ok(Outcome::Accepted));
        for expected_score in [0, -1, -2] {
            assert_eq!(
                session.submit(&v, "silk"),
                Ok(Outcome::Rejected(Rejection::Duplicate))
            );
            assert_eq!(session.score(), expected_score);
        }
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn test_not_derivable_leaves_words_unchanged() {
        let mut session = started_session();
        let v = validator();
        session.submit(&v, "silk").unwrap();

        let outcome = session.submit(&v, "silkk").unwrap();
        assert!(matches!(outcome, Outcome::Rejected(Rejection::NotDerivable { .. })));
        assert_eq!(session.used_words(), ["silk"]);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_start_game_keeps_progress() {
        let mut session = started_session();
        session.submit(&validator(), "silk").unwrap();

        let words = WordList::from_words(["abundant"]).unwrap();
        let root = session.start_game(&words, &mut StdRng::seed_from_u64(3)).to_string();

        assert_eq!(root, "abundant");
        assert_eq!(session.score(), 1);
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn test_start_over_resets_progress() {
        let mut session = started_session();
        let v = validator();
        session.submit(&v, "silk").unwrap();
        session.submit(&v, "zz").unwrap();

        let words = WordList::from_words(["abundant", "cabinets"]).unwrap();
        let root = session.start_over(&words, &mut StdRng::seed_from_u64(9)).to_string();

        assert!(["abundant", "cabinets"].contains(&root.as_str()));
        assert_eq!(session.root_word(), Some(root.as_str()));
        assert_eq!(session.snapshot().state, RoundState::InProgress);
        assert_eq!(session.score(), 0);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn test_snapshot_reports_letter_counts() {
        let mut session = started_session();
        let v = validator();
        session.submit(&v, "silk").unwrap();
        session.submit(&v, "slow").unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.session_id, session.id());
        assert_eq!(snapshot.root_word.as_deref(), Some("silkworm"));
        assert_eq!(snapshot.used_words[0], UsedWord::new("slow"));
        assert_eq!(snapshot.used_words[1].letters, 4);
        assert_eq!(snapshot.score, 2);
    }

    #[test]
    fn test_idle_time_measured_from_last_action() {
        let session = GameSession::new();
        let later = Instant::now() + Duration::from_secs(90);
        assert!(session.idle_for(later) >= Duration::from_secs(90));
    }
}
