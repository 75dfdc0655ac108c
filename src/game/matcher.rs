//! Guess matching against the active word list
//!
//! Found words are cleared from the list so each can score once.

use crate::core::Word;

/// How a guess is compared with the hidden words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The guess must equal the word exactly
    #[default]
    FullWord,
    /// Only the first character is compared; any guess sharing a first
    /// letter with a remaining word claims it
    FirstLetter,
}

impl MatchMode {
    /// Create a match mode from a name string
    ///
    /// Supported names: "full", "full-word", "first", "first-letter".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" | "full-word" => Some(Self::FullWord),
            "first" | "first-letter" => Some(Self::FirstLetter),
            _ => None,
        }
    }

    fn matches(self, guess: &str, word: &Word) -> bool {
        match self {
            Self::FullWord => guess == word.text(),
            Self::FirstLetter => guess.as_bytes().first() == Some(&word.first_letter()),
        }
    }
}

/// The session's words, each either still hidden or found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<Option<Word>>,
}

impl WordList {
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            entries: words.iter().cloned().map(Some).collect(),
        }
    }

    /// Check a guess against the remaining words in list order
    ///
    /// The first remaining word that matches is marked found and returned.
    /// Comparison is case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Word;
    /// use wordsearch::game::{MatchMode, WordList};
    ///
    /// let words = vec![Word::new("red").unwrap(), Word::new("blue").unwrap()];
    /// let mut list = WordList::new(&words);
    ///
    /// assert_eq!(list.check("blue", MatchMode::FullWord).map(|w| w.to_string()), Some("blue".into()));
    /// assert!(list.check("blue", MatchMode::FullWord).is_none());
    /// assert_eq!(list.found_count(), 1);
    /// ```
    pub fn check(&mut self, guess: &str, mode: MatchMode) -> Option<Word> {
        self.entries
            .iter_mut()
            .find(|entry| matches!(entry, Some(word) if mode.matches(guess, word)))
            .and_then(Option::take)
    }

    /// Words not yet found, in list order
    pub fn remaining(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_none()).count()
    }

    /// True once every word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }
}
