//! Filter stage
//!
//! Pruning passes applied to the dictionary before the search. Both filters
//! preserve input order and never fail; an empty input gives an empty output.

use crate::core::{LetterSet, Word};
use log::debug;

/// Keep only the words in which every letter appears exactly once
///
/// Letters are scanned left to right and a word is rejected at its first
/// repeated letter.
///
/// # Examples
/// ```
/// use letter_elimination::core::Word;
/// use letter_elimination::search::filter::remove_duplicate_letters;
///
/// let words = vec![Word::new("apple").unwrap(), Word::new("fjord").unwrap()];
/// let kept = remove_duplicate_letters(&words);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].text(), "fjord");
/// ```
pub fn remove_duplicate_letters<'a, I>(words: I) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut rejected = 0usize;
    let kept: Vec<&Word> = words
        .into_iter()
        .filter(|word| {
            let unique = first_repeated_letter(word).is_none();
            if !unique {
                rejected += 1;
            }
            unique
        })
        .collect();

    debug!(
        "duplicate-letter filter kept {} words, rejected {rejected}",
        kept.len()
    );
    kept
}

/// Keep only the words that contain none of the `forbidden` letters
///
/// # Examples
/// ```
/// use letter_elimination::core::{LetterSet, Word};
/// use letter_elimination::search::filter::exclude_letters;
///
/// let words = vec![Word::new("waltz").unwrap(), Word::new("fjord").unwrap()];
/// let kept = exclude_letters(&words, LetterSet::from_letters("eiou"));
/// assert_eq!(kept, vec![&words[0]]);
/// ```
pub fn exclude_letters<'a, I>(words: I, forbidden: LetterSet) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| !word.contains_any(forbidden))
        .collect()
}

/// Find the first letter that repeats, scanning left to right
fn first_repeated_letter(word: &Word) -> Option<u8> {
    let mut seen = LetterSet::EMPTY;
    word.bytes().iter().copied().find(|&letter| !seen.insert(letter))
}
