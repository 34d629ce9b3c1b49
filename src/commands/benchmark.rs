//! Benchmark command
//!
//! Times repeated searches over the same dictionary.

use super::SearchConfig;
use crate::search::{VowelBuckets, search, search_parallel};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub runs: usize,
    pub dictionary_size: usize,
    pub solutions_per_run: usize,
    pub candidates_per_run: u64,
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
    pub total: Duration,
}

/// Run the filter and search stages `runs` times
///
/// The dictionary is loaded once; each run rebuilds the buckets and searches.
/// A zero `runs` is treated as one.
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    source: &dyn WordSource,
    config: &SearchConfig,
    runs: usize,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let runs = runs.max(1);
    let words = source
        .load(config.word_length)
        .with_context(|| format!("loading {}", source.describe()))?;

    let pb = if show_progress {
        let pb = ProgressBar::new(runs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut timings = Vec::with_capacity(runs);
    let mut solutions_per_run = 0;
    let mut candidates_per_run = 0;

    for _ in 0..runs {
        let start = Instant::now();
        let buckets = VowelBuckets::from_words(&words, config.policy);
        let result = if config.parallel {
            search_parallel(&buckets, |_| {})
        } else {
            search(&buckets, |_| {})
        };
        let elapsed = start.elapsed();

        timings.push(elapsed);
        solutions_per_run = result.solutions_found;
        candidates_per_run = result.stats.total_visited();
        pb.set_message(format!("{:.1} ms", elapsed.as_secs_f64() * 1000.0));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total: Duration = timings.iter().sum();
    Ok(BenchmarkResult {
        runs,
        dictionary_size: words.len(),
        solutions_per_run,
        candidates_per_run,
        min: timings.iter().min().copied().unwrap_or_default(),
        max: timings.iter().max().copied().unwrap_or_default(),
        mean: total / runs as u32,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{EmbeddedSource, FileSource};

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&EmbeddedSource, &SearchConfig::default(), 3, false).unwrap();

        assert_eq!(result.runs, 3);
        assert_eq!(result.dictionary_size, 718);
        assert_eq!(result.solutions_per_run, 2);
        assert!(result.candidates_per_run > 0);
    }

    #[test]
    fn benchmark_timing_consistency() {
        let result = run_benchmark(&EmbeddedSource, &SearchConfig::default(), 4, false).unwrap();

        assert!(result.min <= result.mean);
        assert!(result.mean <= result.max);
        assert!(result.max <= result.total);
    }

    #[test]
    fn benchmark_zero_runs_means_one() {
        let result = run_benchmark(&EmbeddedSource, &SearchConfig::default(), 0, false).unwrap();
        assert_eq!(result.runs, 1);
    }

    #[test]
    fn benchmark_parallel_finds_same_solutions() {
        let config = SearchConfig {
            parallel: true,
            ..SearchConfig::default()
        };
        let result = run_benchmark(&EmbeddedSource, &config, 2, false).unwrap();
        assert_eq!(result.solutions_per_run, 2);
    }

    #[test]
    fn benchmark_missing_wordlist() {
        let source = FileSource::new("missing/words.txt");
        assert!(run_benchmark(&source, &SearchConfig::default(), 1, false).is_err());
    }
}
