//! Search stage
//!
//! Depth-first search across the vowel buckets in `a, e, i, o, u` order. Each
//! level keeps a running `LetterSet` of the letters already chosen and skips
//! any candidate that intersects it. A path that reaches the last bucket is a
//! complete quintuple: every picked word is duplicate-free and the picks are
//! pairwise disjoint.

use super::buckets::{VowelBuckets, VowelPolicy};
use crate::core::{LetterSet, Word};
use log::{debug, info};
use rayon::prelude::*;
use std::fmt;

/// Number of buckets, and therefore of words in a complete selection
pub const BUCKET_COUNT: usize = 5;

/// Five words, one per vowel bucket, sharing no letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quintuple<'a> {
    words: Vec<&'a Word>,
}

impl<'a> Quintuple<'a> {
    /// Words in bucket order
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    /// Union of the letters of every word
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.words
            .iter()
            .fold(LetterSet::EMPTY, |acc, word| acc.union(word.letters()))
    }

    /// Number of distinct letters the selection eliminates
    #[must_use]
    pub fn eliminated(&self) -> usize {
        self.letters().len()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&'a str> {
        self.words.iter().map(|w| w.text()).collect()
    }
}

impl fmt::Display for Quintuple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.texts().join(" "))
    }
}

/// Per-depth counters gathered during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates examined at each depth
    pub visited: [u64; BUCKET_COUNT],
    /// Candidates rejected at each depth for sharing a letter with earlier picks
    pub pruned: [u64; BUCKET_COUNT],
}

impl SearchStats {
    /// Add another run's counters into this one
    pub fn merge(&mut self, other: &Self) {
        for depth in 0..BUCKET_COUNT {
            self.visited[depth] += other.visited[depth];
            self.pruned[depth] += other.pruned[depth];
        }
    }

    #[must_use]
    pub fn total_visited(&self) -> u64 {
        self.visited.iter().sum()
    }

    #[must_use]
    pub fn total_pruned(&self) -> u64 {
        self.pruned.iter().sum()
    }
}

/// Outcome of a search
///
/// `best` is the last complete quintuple found. When nothing was found it is
/// `None` and `eliminated` is 0.
#[derive(Debug, Clone, Default)]
pub struct SearchResult<'a> {
    pub best: Option<Quintuple<'a>>,
    pub eliminated: usize,
    pub solutions_found: usize,
    pub stats: SearchStats,
}

impl<'a> SearchResult<'a> {
    /// Words of the returned selection, empty when nothing was found
    #[must_use]
    pub fn words(&self) -> Vec<&'a str> {
        self.best.as_ref().map(Quintuple::texts).unwrap_or_default()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.best.is_none()
    }

    fn record(&mut self, quintuple: Quintuple<'a>) {
        self.eliminated = quintuple.eliminated();
        self.solutions_found += 1;
        self.best = Some(quintuple);
    }
}

/// Recursive walker over the buckets
struct Descent<'a, 'b, F> {
    buckets: &'b [Vec<&'a Word>; BUCKET_COUNT],
    picks: Vec<&'a Word>,
    stats: SearchStats,
    on_complete: F,
}

impl<'a, 'b, F> Descent<'a, 'b, F>
where
    F: FnMut(Quintuple<'a>),
{
    fn new(buckets: &'b [Vec<&'a Word>; BUCKET_COUNT], on_complete: F) -> Self {
        Self {
            buckets,
            picks: Vec::with_capacity(BUCKET_COUNT),
            stats: SearchStats::default(),
            on_complete,
        }
    }

    fn descend(&mut self, depth: usize, used: LetterSet) {
        if depth == BUCKET_COUNT {
            (self.on_complete)(Quintuple {
                words: self.picks.clone(),
            });
            return;
        }

        let buckets = self.buckets;
        for &word in &buckets[depth] {
            self.stats.visited[depth] += 1;
            if word.contains_any(used) {
                self.stats.pruned[depth] += 1;
                continue;
            }

            self.picks.push(word);
            self.descend(depth + 1, used.union(word.letters()));
            self.picks.pop();
        }
    }
}

/// Search the buckets sequentially
///
/// `on_solution` is called for every complete quintuple in the order it is
/// found; the returned result holds the last one.
///
/// # Examples
/// ```
/// use letter_elimination::core::Word;
/// use letter_elimination::search::{VowelBuckets, VowelPolicy, search};
///
/// let words: Vec<Word> = ["waqfs", "treck", "bling", "vozhd", "jumpy"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let buckets = VowelBuckets::from_words(&words, VowelPolicy::Strict);
///
/// let mut seen = Vec::new();
/// let result = search(&buckets, |q| seen.push(q.to_string()));
///
/// assert_eq!(result.words(), vec!["waqfs", "treck", "bling", "vozhd", "jumpy"]);
/// assert_eq!(result.eliminated, 25);
/// assert_eq!(seen, vec!["[waqfs treck bling vozhd jumpy]"]);
/// ```
pub fn search<'a, F>(buckets: &VowelBuckets<'a>, mut on_solution: F) -> SearchResult<'a>
where
    F: FnMut(&Quintuple<'a>),
{
    let mut result = SearchResult::default();
    if buckets.any_empty() {
        debug!("a vowel bucket is empty, skipping search");
        return result;
    }

    let stats = {
        let mut descent = Descent::new(buckets.as_array(), |quintuple: Quintuple<'a>| {
            on_solution(&quintuple);
            result.record(quintuple);
        });
        descent.descend(0, LetterSet::EMPTY);
        descent.stats
    };
    result.stats = stats;

    info!(
        "search visited {} candidates, found {} solutions",
        result.stats.total_visited(),
        result.solutions_found
    );
    result
}

/// Search the buckets with the first bucket split across the rayon pool
///
/// Branches are searched independently and their solutions replayed in
/// first-bucket order, so `on_solution` sees the same sequence as [`search`]
/// and the returned result is identical. Callbacks happen after the parallel
/// phase completes.
pub fn search_parallel<'a, F>(buckets: &VowelBuckets<'a>, mut on_solution: F) -> SearchResult<'a>
where
    F: FnMut(&Quintuple<'a>),
{
    let mut result = SearchResult::default();
    if buckets.any_empty() {
        debug!("a vowel bucket is empty, skipping search");
        return result;
    }

    let all = buckets.as_array();
    let branches: Vec<(Vec<Quintuple<'a>>, SearchStats)> = all[0]
        .par_iter()
        .map(|&first| {
            let mut found = Vec::new();
            let mut stats = {
                let mut descent = Descent::new(all, |q: Quintuple<'a>| found.push(q));
                descent.picks.push(first);
                descent.descend(1, first.letters());
                descent.stats
            };
            stats.visited[0] += 1;
            (found, stats)
        })
        .collect();

    debug!("parallel search finished {} branches", branches.len());

    for (found, stats) in branches {
        result.stats.merge(&stats);
        for quintuple in found {
            on_solution(&quintuple);
            result.record(quintuple);
        }
    }

    info!(
        "search visited {} candidates, found {} solutions",
        result.stats.total_visited(),
        result.solutions_found
    );
    result
}

/// Run the filter stage and the search stage over a word list
///
/// # Examples
/// ```
/// use letter_elimination::core::Word;
/// use letter_elimination::search::{VowelPolicy, letter_elimination};
///
/// let words: Vec<Word> = ["crane", "apple", "fjord"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let result = letter_elimination(&words, VowelPolicy::Strict, false, |_| {});
/// assert!(result.words().is_empty());
/// assert_eq!(result.eliminated, 0);
/// ```
pub fn letter_elimination<'a, F>(
    words: &'a [Word],
    policy: VowelPolicy,
    parallel: bool,
    on_solution: F,
) -> SearchResult<'a>
where
    F: FnMut(&Quintuple<'a>),
{
    let buckets = VowelBuckets::from_words(words, policy);
    if parallel {
        search_parallel(&buckets, on_solution)
    } else {
        search(&buckets, on_solution)
    }
}
