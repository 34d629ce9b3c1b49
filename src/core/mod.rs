//! Core domain types for the letter-elimination search
//!
//! This module contains the fundamental domain types. Everything here is pure
//! and immutable once constructed.

mod letters;
mod vowel;
mod word;

pub use letters::LetterSet;
pub use vowel::Vowel;
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
