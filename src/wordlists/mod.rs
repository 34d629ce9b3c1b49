//! Word lists for the letter-elimination search
//!
//! The search only needs one capability from its dictionary: given a word
//! length, return the valid words of that length, deduplicated, in a stable
//! order. `WordSource` is that seam; the embedded dictionary and plain text
//! files both implement it.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading a dictionary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list has no usable words of length {length}")]
    Empty { length: usize },
}

/// A dictionary that can produce the words of a given length
pub trait WordSource {
    /// Load the words of exactly `length` letters
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the backing store cannot be read or yields
    /// no words of that length.
    fn load(&self, length: usize) -> Result<Vec<Word>, LoadError>;

    /// Human-readable name for logs and reports
    fn describe(&self) -> String;
}

/// The dictionary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn load(&self, length: usize) -> Result<Vec<Word>, LoadError> {
        non_empty(loader::words_from_slice(DICTIONARY, length), length)
    }

    fn describe(&self) -> String {
        format!("embedded dictionary ({DICTIONARY_COUNT} entries)")
    }
}

/// A word list read from a text file, one word per line
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn load(&self, length: usize) -> Result<Vec<Word>, LoadError> {
        non_empty(loader::load_from_file(&self.path, length)?, length)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source from a `--wordlist` value: "embedded" or a file path
#[must_use]
pub fn source_from_name(name: &str) -> Box<dyn WordSource> {
    match name {
        "embedded" | "default" => Box::new(EmbeddedSource),
        path => Box::new(FileSource::new(path)),
    }
}

fn non_empty(words: Vec<Word>, length: usize) -> Result<Vec<Word>, LoadError> {
    if words.is_empty() {
        Err(LoadError::Empty { length })
    } else {
        Ok(words)
    }
}
