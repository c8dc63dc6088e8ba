use std::sync::Arc;

use thiserror::Error;

use crate::dictionary::Lexicon;

/// Default minimum; candidates must be strictly longer than this
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Why a candidate word was turned down. All of these are recoverable:
/// the player just tries another word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Has to be longer than {min_length} characters")]
    TooShort { min_length: usize },
    #[error("You can't use the root word")]
    SameAsRoot,
    #[error("You've already used this word")]
    Duplicate,
    #[error("You can't spell that word from '{root_word}'!")]
    NotDerivable { root_word: String },
    #[error("You can't just make them up, you know!")]
    NotAWord,
}

impl Rejection {
    /// Short heading shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "Too short",
            Self::SameAsRoot => "Can't be the root word",
            Self::Duplicate => "Duplicate word",
            Self::NotDerivable { .. } => "Word not possible",
            Self::NotAWord => "Word not recognized",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stable machine-readable code
    pub fn reason(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too_short",
            Self::SameAsRoot => "same_as_root",
            Self::Duplicate => "duplicate",
            Self::NotDerivable { .. } => "not_derivable",
            Self::NotAWord => "not_a_word",
        }
    }
}

/// Result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

pub struct WordValidator {
    lexicon: Arc<dyn Lexicon>,
    language: String,
    min_length: usize,
}

impl WordValidator {
    pub fn new(lexicon: Arc<dyn Lexicon>, language: &str) -> Self {
        Self {
            lexicon,
            language: language.to_string(),
            min_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Run every rule against an already-normalized candidate.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// length, identity with the root, reuse, letter derivability, and
    /// finally the lexicon.
    pub fn validate(
        &self,
        candidate: &str,
        root_word: &str,
        used_words: &[String],
    ) -> Result<(), Rejection> {
        if !self.is_long_enough(candidate) {
            return Err(Rejection::TooShort {
                min_length: self.min_length,
            });
        }

        if candidate == root_word {
            return Err(Rejection::SameAsRoot);
        }

        if !Self::is_original(candidate, used_words) {
            return Err(Rejection::Duplicate);
        }

        if !Self::is_possible(candidate, root_word) {
            return Err(Rejection::NotDerivable {
                root_word: root_word.to_string(),
            });
        }

        if !self.is_real(candidate) {
            return Err(Rejection::NotAWord);
        }

        Ok(())
    }

    pub fn is_long_enough(&self, word: &str) -> bool {
        word.chars().count() > self.min_length
    }

    pub fn is_original(word: &str, used_words: &[String]) -> bool {
        !used_words.iter().any(|used| used == word)
    }

    /// Whether `word` can be spelled with the letters of `root_word`,
    /// each occurrence used at most once
    pub fn is_possible(word: &str, root_word: &str) -> bool {
        let mut remaining: Vec<char> = root_word.chars().collect();

        for letter in word.chars() {
            match remaining.iter().position(|&c| c == letter) {
                Some(pos) => {
                    remaining.swap_remove(pos);
                }
                None => return false,
            }
        }

        true
    }

    /// Check if word exists in the lexicon
    pub fn is_real(&self, word: &str) -> bool {
        self.lexicon.is_recognized_word(word, &self.language)
    }
}
