//! Vowel buckets
//!
//! Partitions the duplicate-free candidates into one bucket per vowel.

use super::filter::{exclude_letters, remove_duplicate_letters};
use crate::core::{Vowel, Word};
use log::debug;
use std::fmt;

/// How bucket membership is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VowelPolicy {
    /// The word must contain the bucket's vowel and no other vowel
    #[default]
    Strict,
    /// The word must contain none of the other four vowels
    ///
    /// Words without any vowel qualify for every bucket.
    Exclusion,
}

impl VowelPolicy {
    /// Parse a policy name: "strict" or "exclusion"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(Self::Strict),
            "exclusion" | "compat" => Some(Self::Exclusion),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Exclusion => "exclusion",
        }
    }

    /// Check whether `word` belongs in the bucket for `vowel`
    #[must_use]
    pub fn admits(self, word: &Word, vowel: Vowel) -> bool {
        let excluded = !word.contains_any(vowel.others());
        match self {
            Self::Strict => excluded && word.has_letter(vowel.letter()),
            Self::Exclusion => excluded,
        }
    }
}

impl fmt::Display for VowelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One bucket of candidate words per vowel, in search order
#[derive(Debug, Clone, Default)]
pub struct VowelBuckets<'a> {
    buckets: [Vec<&'a Word>; 5],
}

impl<'a> VowelBuckets<'a> {
    /// Run the full filter stage over a word list
    ///
    /// Words with repeated letters are dropped, then each vowel's bucket is
    /// built from the survivors according to `policy`.
    ///
    /// # Examples
    /// ```
    /// use letter_elimination::core::{Vowel, Word};
    /// use letter_elimination::search::{VowelBuckets, VowelPolicy};
    ///
    /// let words: Vec<Word> = ["waqfs", "apple", "treck"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let buckets = VowelBuckets::from_words(&words, VowelPolicy::Strict);
    /// assert_eq!(buckets.get(Vowel::A).len(), 1);
    /// assert_eq!(buckets.get(Vowel::E).len(), 1);
    /// assert!(buckets.get(Vowel::I).is_empty());
    /// ```
    #[must_use]
    pub fn from_words(words: &'a [Word], policy: VowelPolicy) -> Self {
        let candidates = remove_duplicate_letters(words);
        Self::from_candidates(&candidates, policy)
    }

    /// Build the buckets from words already known to be duplicate-free
    #[must_use]
    pub fn from_candidates(candidates: &[&'a Word], policy: VowelPolicy) -> Self {
        let buckets = Vowel::ALL.map(|vowel| {
            let mut bucket = exclude_letters(candidates.iter().copied(), vowel.others());
            if policy == VowelPolicy::Strict {
                bucket.retain(|word| word.has_letter(vowel.letter()));
            }
            debug!("bucket '{vowel}' holds {} words", bucket.len());
            bucket
        });

        Self { buckets }
    }

    /// Words in the bucket for `vowel`
    #[inline]
    #[must_use]
    pub fn get(&self, vowel: Vowel) -> &[&'a Word] {
        &self.buckets[vowel.index()]
    }

    /// All buckets in search order
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[Vec<&'a Word>; 5] {
        &self.buckets
    }

    /// Bucket sizes in search order
    #[must_use]
    pub fn sizes(&self) -> [usize; 5] {
        self.buckets.each_ref().map(Vec::len)
    }

    /// True when at least one bucket has no words
    #[must_use]
    pub fn any_empty(&self) -> bool {
        self.buckets.iter().any(Vec::is_empty)
    }

    /// Iterate over `(vowel, bucket)` pairs in search order
    pub fn iter(&self) -> impl Iterator<Item = (Vowel, &[&'a Word])> {
        Vowel::ALL
            .into_iter()
            .zip(self.buckets.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn bucket_texts<'a>(buckets: &VowelBuckets<'a>, vowel: Vowel) -> Vec<&'a str> {
        buckets.get(vowel).iter().map(|w| w.text()).collect()
    }

    #[test]
    fn strict_buckets_by_sole_vowel() {
        let input = words(&["waqfs", "treck", "bling", "vozhd", "jumpy", "crane"]);
        let buckets = VowelBuckets::from_words(&input, VowelPolicy::Strict);

        assert_eq!(bucket_texts(&buckets, Vowel::A), vec!["waqfs"]);
        assert_eq!(bucket_texts(&buckets, Vowel::E), vec!["treck"]);
        assert_eq!(bucket_texts(&buckets, Vowel::I), vec!["bling"]);
        assert_eq!(bucket_texts(&buckets, Vowel::O), vec!["vozhd"]);
        assert_eq!(bucket_texts(&buckets, Vowel::U), vec!["jumpy"]);
    }

    #[test]
    fn multi_vowel_words_join_no_bucket() {
        let input = words(&["crane", "audio", "house"]);
        let buckets = VowelBuckets::from_words(&input, VowelPolicy::Strict);
        assert_eq!(buckets.sizes(), [0; 5]);
        assert!(buckets.any_empty());
    }

    #[test]
    fn repeated_letter_words_never_bucketed() {
        let input = words(&["apple", "sheep", "civic", "books", "fluff"]);
        for policy in [VowelPolicy::Strict, VowelPolicy::Exclusion] {
            let buckets = VowelBuckets::from_words(&input, policy);
            assert_eq!(buckets.sizes(), [0; 5], "policy {policy}");
        }
    }

    #[test]
    fn bucket_words_avoid_other_vowels() {
        let input = words(&["waltz", "glent", "brick", "fjord", "chunk", "nymph", "crane"]);
        for policy in [VowelPolicy::Strict, VowelPolicy::Exclusion] {
            let buckets = VowelBuckets::from_words(&input, policy);
            for (vowel, bucket) in buckets.iter() {
                for word in bucket {
                    assert!(!word.contains_any(vowel.others()), "{word} in bucket {vowel}");
                }
            }
        }
    }

    #[test]
    fn strict_membership_is_mutually_exclusive() {
        let input = words(&["waltz", "glent", "brick", "fjord", "chunk", "nymph"]);
        let buckets = VowelBuckets::from_words(&input, VowelPolicy::Strict);

        for word in &input {
            let homes = buckets
                .iter()
                .filter(|(_, bucket)| bucket.contains(&word))
                .count();
            assert!(homes <= 1, "{word} is in {homes} buckets");
        }
    }

    #[test]
    fn exclusion_policy_puts_vowelless_words_everywhere() {
        let input = words(&["nymph", "waltz"]);
        let buckets = VowelBuckets::from_words(&input, VowelPolicy::Exclusion);

        for (vowel, bucket) in buckets.iter() {
            assert!(bucket.iter().any(|w| w.text() == "nymph"), "bucket {vowel}");
        }
        assert_eq!(buckets.sizes(), [2, 1, 1, 1, 1]);
    }

    #[test]
    fn strict_policy_drops_vowelless_words() {
        let input = words(&["nymph", "glyph", "psych"]);
        let buckets = VowelBuckets::from_words(&input, VowelPolicy::Strict);
        assert_eq!(buckets.sizes(), [0; 5]);
    }

    #[test]
    fn policy_admits() {
        let nymph = Word::new("nymph").unwrap();
        let waltz = Word::new("waltz").unwrap();

        assert!(!VowelPolicy::Strict.admits(&nymph, Vowel::A));
        assert!(VowelPolicy::Exclusion.admits(&nymph, Vowel::A));
        assert!(VowelPolicy::Strict.admits(&waltz, Vowel::A));
        assert!(!VowelPolicy::Exclusion.admits(&waltz, Vowel::E));
    }

    #[test]
    fn admits_matches_bucket_construction() {
        let input = words(&["waltz", "nymph", "glent", "crane", "fjord"]);
        let candidates = remove_duplicate_letters(&input);
        for policy in [VowelPolicy::Strict, VowelPolicy::Exclusion] {
            let buckets = VowelBuckets::from_candidates(&candidates, policy);
            for vowel in Vowel::ALL {
                let expected: Vec<&Word> = candidates
                    .iter()
                    .copied()
                    .filter(|w| policy.admits(w, vowel))
                    .collect();
                assert_eq!(buckets.get(vowel), expected.as_slice());
            }
        }
    }

    #[test]
    fn policy_names_round_trip() {
        for policy in [VowelPolicy::Strict, VowelPolicy::Exclusion] {
            assert_eq!(VowelPolicy::from_name(policy.name()), Some(policy));
        }
        assert_eq!(VowelPolicy::from_name("compat"), Some(VowelPolicy::Exclusion));
        assert_eq!(VowelPolicy::from_name("loose"), None);
    }
}
