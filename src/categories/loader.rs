//! Category loading utilities
//!
//! Parses category files (`Name: word word ...` per line) or converts the
//! embedded table.

use super::category::{Category, CategoryError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for category files
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    MissingSeparator { line: usize },
    Category { line: usize, source: CategoryError },
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read category file: {e}"),
            Self::MissingSeparator { line } => {
                write!(f, "Line {line}: expected `Name: word word ...`")
            }
            Self::Category { line, source } => write!(f, "Line {line}: {source}"),
            Self::Empty => write!(f, "No categories defined"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Category { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load categories from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or any line is malformed.
///
/// # Examples
/// ```no_run
/// use wordsearch::categories::loader::load_from_file;
///
/// let categories = load_from_file("data/categories.txt").unwrap();
/// println!("Loaded {} categories", categories.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Category>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_categories(&content)
}

/// Parse category definitions
///
/// Blank lines and `#` comments are skipped. Words are separated by
/// whitespace or commas.
///
/// # Errors
///
/// Returns `LoadError` naming the first bad line, or `LoadError::Empty` if
/// nothing was defined.
///
/// # Examples
/// ```
/// use wordsearch::categories::loader::parse_categories;
///
/// let text = "# comment\nColours: red orange yellow green blue indigo violet purple\n";
/// let categories = parse_categories(text).unwrap();
/// assert_eq!(categories[0].name(), "Colours");
/// ```
pub fn parse_categories(content: &str) -> Result<Vec<Category>, LoadError> {
    let mut categories = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let number = index + 1;
        let (name, rest) = line
            .split_once(':')
            .ok_or(LoadError::MissingSeparator { line: number })?;

        let words: Vec<&str> = rest
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .collect();

        let category = Category::from_strs(name, &words).map_err(|source| LoadError::Category {
            line: number,
            source,
        })?;
        categories.push(category);
    }

    if categories.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(categories)
}

/// Convert the embedded table to categories
///
/// Entries that fail validation are skipped.
#[must_use]
pub fn categories_from_table(table: &[(&str, &[&str])]) -> Vec<Category> {
    table
        .iter()
        .filter_map(|&(name, words)| Category::from_strs(name, words).ok())
        .collect()
}

/// The built-in categories
#[must_use]
pub fn builtin() -> Vec<Category> {
    categories_from_table(super::CATEGORIES)
}
