use std::path::Path;

use rand::Rng;

use super::{read_words, DictionaryError};

/// The pool root words are drawn from. Never empty once constructed.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = read_words(path).await?;
        let list = Self::from_words(words)
            .map_err(|_| DictionaryError::Empty(path.display().to_string()))?;

        tracing::info!("Loaded {} root words from {}", list.len(), path.display());

        Ok(list)
    }

    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty("word list".to_string()));
        }

        Ok(Self { words })
    }

    /// Pick one root word at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.words.len());
        &self.words[idx]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}
