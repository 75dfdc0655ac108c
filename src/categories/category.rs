//! Themed word lists

use crate::core::{Orientation, Word, WordError};
use std::fmt;

/// Every category holds exactly this many words
pub const WORDS_PER_CATEGORY: usize = 8;

/// A named, ordered list of words hidden together in one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    words: Vec<Word>,
}

/// Error type for invalid categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    EmptyName,
    WrongWordCount {
        name: String,
        count: usize,
    },
    InvalidWord {
        name: String,
        word: String,
        source: WordError,
    },
    WordTooLong {
        name: String,
        word: Word,
        max: usize,
    },
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name must not be empty"),
            Self::WrongWordCount { name, count } => write!(
                f,
                "Category '{name}' must have exactly {WORDS_PER_CATEGORY} words, got {count}"
            ),
            Self::InvalidWord { name, word, source } => {
                write!(f, "Category '{name}' has invalid word '{word}': {source}")
            }
            Self::WordTooLong { name, word, max } => write!(
                f,
                "Category '{name}' word '{word}' has {} letters but the grid fits at most {max} in every direction",
                word.len()
            ),
        }
    }
}

impl std::error::Error for CategoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Category {
    /// Create a category from already validated words
    ///
    /// # Errors
    /// Returns `CategoryError` if the name is blank or the word count is not
    /// [`WORDS_PER_CATEGORY`].
    pub fn new(name: impl Into<String>, words: Vec<Word>) -> Result<Self, CategoryError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if words.len() != WORDS_PER_CATEGORY {
            return Err(CategoryError::WrongWordCount {
                name,
                count: words.len(),
            });
        }
        Ok(Self { name, words })
    }

    /// Create a category from raw strings
    ///
    /// # Errors
    /// Returns `CategoryError::InvalidWord` for the first word that fails
    /// validation, or any error from [`Category::new`].
    ///
    /// # Examples
    /// ```
    /// use wordsearch::categories::Category;
    ///
    /// let colours = Category::from_strs(
    ///     "Colours",
    ///     &["red", "orange", "yellow", "green", "blue", "indigo", "violet", "purple"],
    /// )
    /// .unwrap();
    /// assert_eq!(colours.words()[0].text(), "red");
    ///
    /// assert!(Category::from_strs("Short", &["red"]).is_err());
    /// ```
    pub fn from_strs(name: &str, words: &[&str]) -> Result<Self, CategoryError> {
        let words = words
            .iter()
            .map(|&w| {
                Word::new(w).map_err(|source| CategoryError::InvalidWord {
                    name: name.trim().to_string(),
                    word: w.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, words)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check that every word fits a `width`×`height` grid in any orientation
    ///
    /// # Errors
    /// Returns `CategoryError::WordTooLong` for the first word that would be
    /// too long for some orientation.
    pub fn ensure_fits(&self, width: usize, height: usize) -> Result<(), CategoryError> {
        let max = Orientation::ALL
            .into_iter()
            .map(|o| o.max_len(width, height))
            .min()
            .unwrap_or(0);

        match self.words.iter().find(|w| w.len() > max) {
            Some(word) => Err(CategoryError::WordTooLong {
                name: self.name.clone(),
                word: word.clone(),
                max,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Look up a category by 1-based menu number or case-insensitive name
#[must_use]
pub fn find_category<'a>(categories: &'a [Category], choice: &str) -> Option<&'a Category> {
    let choice = choice.trim();
    if let Ok(number) = choice.parse::<usize>() {
        return number.checked_sub(1).and_then(|i| categories.get(i));
    }
    categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(choice))
}
