//! Dictionary word representation
//!
//! A Word stores a fixed-length lowercase word along with the set of letters it uses.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// Default word length for the five-word search
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// A fixed-length lowercase word with its letter set precomputed
///
/// Words are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new 5-letter Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use letter_elimination::core::Word;
    ///
    /// let word = Word::new("fjord").unwrap();
    /// assert_eq!(word.text(), "fjord");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a Word of an arbitrary fixed length
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Same conditions as [`Word::new`], checked against `length`.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        // Validate ASCII first so that byte length equals letter count
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterSet::from_letters(&text);

        Ok(Self { text, letters })
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

    /// Number of letters in the word, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The distinct letters used by the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Check if the word contains any letter of `set`
    #[inline]
    #[must_use]
    pub const fn contains_any(&self, set: LetterSet) -> bool {
        !self.letters.is_disjoint(set)
    }

    /// Check if the two words have at least one letter in common
    #[inline]
    #[must_use]
    pub const fn shares_letter_with(&self, other: &Self) -> bool {
        self.contains_any(other.letters)
    }

    /// True when some letter appears more than once
    #[inline]
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.letters.len() < self.text.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
