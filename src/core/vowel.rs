//! The five vowels that key the search buckets

use super::LetterSet;
use std::fmt;

/// One of `a`, `e`, `i`, `o`, `u`
///
/// The declaration order is the order the search visits the buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vowel {
    A,
    E,
    I,
    O,
    U,
}

impl Vowel {
    /// All vowels in search order
    pub const ALL: [Self; 5] = [Self::A, Self::E, Self::I, Self::O, Self::U];

    /// Every vowel as a letter set
    pub const SET: LetterSet = LetterSet::EMPTY
        .with(b'a')
        .with(b'e')
        .with(b'i')
        .with(b'o')
        .with(b'u');

    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        match self {
            Self::A => b'a',
            Self::E => b'e',
            Self::I => b'i',
            Self::O => b'o',
            Self::U => b'u',
        }
    }

    /// Position of this vowel in search order (0-4)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The four vowels other than this one
    ///
    /// This is the forbidden set used to build this vowel's bucket: the
    /// `a` bucket excludes `eiou`, the `e` bucket excludes `aiou`, and so on.
    #[must_use]
    pub fn others(self) -> LetterSet {
        Vowel::ALL
            .iter()
            .filter(|&&v| v != self)
            .map(|v| v.letter())
            .collect()
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter() as char)
    }
}
