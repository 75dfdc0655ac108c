//! Word search word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Length is not bounded
//! here: whether a word fits the grid is decided by the placement engine.

use std::fmt;

/// A word to hide in the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Word;
    ///
    /// let word = Word::new("Indigo").unwrap();
    /// assert_eq!(word.text(), "indigo");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the word has no letters (never for a constructed word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.text.as_bytes()[0]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("violet").unwrap();
        assert_eq!(word.text(), "violet");
        assert_eq!(word.bytes(), b"violet");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("MERCURY").unwrap();
        assert_eq!(word.text(), "mercury");

        let word2 = Word::new("JuPiTeR").unwrap();
        assert_eq!(word2.text(), "jupiter");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("mars2"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("sea lion"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("yak!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_length_is_not_bounded() {
        let word = Word::new("abcdefghijklmnopqrstuvwxyz").unwrap();
        assert_eq!(word.len(), 26);
    }

    #[test]
    fn word_first_letter() {
        let word = Word::new("zebu").unwrap();
        assert_eq!(word.first_letter(), b'z');
    }

    #[test]
    fn word_display() {
        let word = Word::new("canary").unwrap();
        assert_eq!(format!("{word}"), "canary");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("green").unwrap();
        let word2 = Word::new("GREEN").unwrap();
        let word3 = Word::new("greet").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
