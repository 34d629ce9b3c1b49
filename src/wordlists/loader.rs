//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.
//! Every loader returns the same shape: lowercase words of exactly the
//! requested length, sorted and without duplicates.

use super::LoadError;
use crate::core::Word;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words of a given length from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped, as
/// are entries that are not alphabetic ASCII of the requested length.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use letter_elimination::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = normalize(content.lines(), length);
    info!(
        "loaded {} words of length {length} from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use letter_elimination::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Fjord", "lynx", "fjord", "waltz"], 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["fjord", "waltz"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    normalize(slice.iter().copied(), length)
}

/// Filter by length, lowercase, deduplicate and sort
fn normalize<'s, I>(entries: I, length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut skipped = 0usize;

    let mut words: Vec<Word> = entries
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::with_length(line, length) {
            Ok(word) => Some(word),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect();

    words.sort_unstable();
    debug!(
        "kept {} unique words of length {length}, skipped {skipped} entries",
        words.len()
    );
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["vozhd", "jumpy", "bling"];
        let words = words_from_slice(input, 5);
        assert_eq!(texts(&words), vec!["bling", "jumpy", "vozhd"]);
    }

    #[test]
    fn words_from_slice_filters_by_length() {
        let input = &["crane", "toolong", "abc", "slate", "lynx"];
        assert_eq!(texts(&words_from_slice(input, 5)), vec!["crane", "slate"]);
        assert_eq!(texts(&words_from_slice(input, 4)), vec!["lynx"]);
        assert_eq!(texts(&words_from_slice(input, 3)), vec!["abc"]);
    }

    #[test]
    fn words_from_slice_deduplicates_case_insensitively() {
        let input = &["Waltz", "waltz", "WALTZ", "fjord", "fjord"];
        assert_eq!(texts(&words_from_slice(input, 5)), vec!["fjord", "waltz"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cran3", "o'neil", "  ", "#note", "glent", "caf\u{e9}s"];
        assert_eq!(texts(&words_from_slice(input, 5)), vec!["glent"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 5).is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "letter_elimination_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "# comment line").unwrap();
            writeln!(file, "treck").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  Waqfs  ").unwrap();
            writeln!(file, "treck").unwrap();
            writeln!(file, "quartz").unwrap();
        }

        let words = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(texts(&words), vec!["treck", "waqfs"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt", 5);
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
