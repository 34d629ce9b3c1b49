//! Letter Elimination
//!
//! Searches a dictionary for five words, one per vowel, that together use 25
//! distinct letters.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_elimination::core::Word;
//! use letter_elimination::search::{VowelPolicy, letter_elimination};
//!
//! let words: Vec<Word> = ["waqfs", "treck", "bling", "vozhd", "jumpy"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let result = letter_elimination(&words, VowelPolicy::Strict, false, |q| println!("{q}"));
//! assert_eq!(result.eliminated, 25);
//! ```

// Core domain types
pub mod core;

// Filter and search stages
pub mod search;

// Word lists
pub mod wordlists;

// Timing harness
pub mod profiling;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
