//! Letter set representation
//!
//! A `LetterSet` is a 26-bit mask with one bit per lowercase ASCII letter.
//! Bit `n` is set when the letter `b'a' + n` is a member.
//!
//! Union and disjointness tests are single bitwise operations, which keeps the
//! innermost loop of the search cheap.

use std::fmt;

/// Set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter from `a` to `z`
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    /// Build a set from the letters of a string
    ///
    /// Bytes outside `a..=z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use letter_elimination::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("eiou");
    /// assert_eq!(set.len(), 4);
    /// assert!(set.contains(b'o'));
    /// assert!(!set.contains(b'a'));
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        letters.bytes().fold(Self::EMPTY, Self::with)
    }

    /// Get the raw bitmask
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    const fn bit(letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            1 << (letter - b'a')
        } else {
            0
        }
    }

    /// Return a copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::bit(letter))
    }

    /// Add a letter, returning `false` if it was already present
    #[inline]
    pub const fn insert(&mut self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Check whether `letter` is a member
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        bit != 0 && self.0 & bit != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when the two sets share no letter
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Number of distinct letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the members in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..26u8).filter(move |&n| self.0 & (1u32 << n) != 0).map(|n| b'a' + n)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}
