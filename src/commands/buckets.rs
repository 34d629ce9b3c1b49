//! Bucket analysis command
//!
//! Shows how the filter stage narrows the dictionary before the search runs.

use super::SearchConfig;
use crate::core::Vowel;
use crate::search::filter::remove_duplicate_letters;
use crate::search::{VowelBuckets, VowelPolicy};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};

/// Words in one vowel bucket
pub struct BucketEntry {
    pub vowel: Vowel,
    pub words: Vec<String>,
}

/// Result of analyzing the filter stage
pub struct BucketReport {
    pub source: String,
    pub word_length: usize,
    pub policy: VowelPolicy,
    pub loaded: usize,
    pub duplicate_free: usize,
    /// Duplicate-free words containing none of a, e, i, o, u
    pub vowelless: Vec<String>,
    pub buckets: Vec<BucketEntry>,
}

impl BucketReport {
    /// Largest bucket size, used to scale bars
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.buckets.iter().map(|b| b.words.len()).max().unwrap_or(0)
    }
}

/// Load the dictionary and run the filter stage only
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn analyze_buckets(source: &dyn WordSource, config: &SearchConfig) -> Result<BucketReport> {
    let words = source
        .load(config.word_length)
        .with_context(|| format!("loading {}", source.describe()))?;

    let candidates = remove_duplicate_letters(&words);
    let vowelless = candidates
        .iter()
        .filter(|word| !word.contains_any(Vowel::SET))
        .map(|word| word.text().to_string())
        .collect();

    let buckets = VowelBuckets::from_candidates(&candidates, config.policy)
        .iter()
        .map(|(vowel, bucket)| BucketEntry {
            vowel,
            words: bucket.iter().map(|w| w.text().to_string()).collect(),
        })
        .collect();

    Ok(BucketReport {
        source: source.describe(),
        word_length: config.word_length,
        policy: config.policy,
        loaded: words.len(),
        duplicate_free: candidates.len(),
        vowelless,
        buckets,
    })
}

/// Count the words that would sit in more than one bucket
#[must_use]
pub fn shared_words(report: &BucketReport) -> usize {
    let mut all: Vec<&str> = report
        .buckets
        .iter()
        .flat_map(|b| b.words.iter().map(String::as_str))
        .collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    total - all.len()
}
