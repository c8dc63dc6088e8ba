pub mod word_list;

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tokio::fs;

pub use word_list::WordList;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} contains no words")]
    Empty(String),
}

/// A reference lexicon that can tell whether a word is real.
///
/// Validation only ever asks this one question, so any backend (a local
/// word file, a spell checker, a remote service) can sit behind it.
pub trait Lexicon: Send + Sync {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

/// Read a newline-delimited word file, lowercased and trimmed, blank lines dropped
pub(crate) async fn read_words(path: &Path) -> Result<Vec<String>, DictionaryError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;

    Ok(content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect())
}

/// File-backed lexicon for a single language
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self, DictionaryError> {
        let words = read_words(path.as_ref()).await?;
        let dictionary = Self::from_words(language, words);

        tracing::info!(
            "Loaded {} {} words into dictionary",
            dictionary.len(),
            dictionary.language
        );

        Ok(dictionary)
    }

    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.to_lowercase(),
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Create an empty dictionary (for testing, or when no word file is available)
    pub fn empty(language: &str) -> Self {
        Self::from_words::<_, &str>(language, [])
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for Dictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}
