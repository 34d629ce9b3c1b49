//! Search command
//!
//! Loads the dictionary, runs the filter and search stages, and reports the
//! last quintuple found.

use crate::core::DEFAULT_WORD_LENGTH;
use crate::profiling::Profiler;
use crate::search::{Quintuple, SearchStats, VowelBuckets, VowelPolicy, search, search_parallel};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub word_length: usize,
    pub policy: VowelPolicy,
    pub parallel: bool,
    /// Where to write a profile report, if anywhere
    pub profile_output: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            policy: VowelPolicy::default(),
            parallel: false,
            profile_output: None,
        }
    }
}

/// Result of a search run
#[derive(Debug, Clone)]
pub struct SearchSummary {
    /// Words of the last quintuple found, empty if none
    pub words: Vec<String>,
    pub eliminated: usize,
    pub solutions_found: usize,
    pub dictionary_size: usize,
    pub bucket_sizes: [usize; 5],
    pub stats: SearchStats,
    pub duration: Duration,
}

/// Run a full search
///
/// `on_solution` is called for each complete quintuple as the search reports
/// it. When `config.profile_output` is set, the load, filter and search
/// phases are timed and a report is written there afterwards.
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded or the profile report
/// cannot be written.
pub fn run_search<F>(
    source: &dyn WordSource,
    config: &SearchConfig,
    mut on_solution: F,
) -> Result<SearchSummary>
where
    F: FnMut(&Quintuple<'_>),
{
    let mut profiler = if config.profile_output.is_some() {
        Profiler::enabled()
    } else {
        Profiler::disabled()
    };

    let start = Instant::now();
    let words = profiler
        .measure("load", || source.load(config.word_length))
        .with_context(|| format!("loading {}", source.describe()))?;

    let buckets = profiler.measure("filter", || VowelBuckets::from_words(&words, config.policy));
    info!(
        "{} words, bucket sizes {:?} ({} policy)",
        words.len(),
        buckets.sizes(),
        config.policy
    );

    let result = profiler.measure("search", || {
        if config.parallel {
            search_parallel(&buckets, &mut on_solution)
        } else {
            search(&buckets, &mut on_solution)
        }
    });
    let duration = start.elapsed();
    profiler.record_stats(&result.stats);

    if let Some(path) = &config.profile_output {
        profiler
            .write_to(path)
            .with_context(|| format!("writing profile to {}", path.display()))?;
        info!("profile written to {}", path.display());
    }

    Ok(SearchSummary {
        words: result.words().into_iter().map(String::from).collect(),
        eliminated: result.eliminated,
        solutions_found: result.solutions_found,
        dictionary_size: words.len(),
        bucket_sizes: buckets.sizes(),
        stats: result.stats,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{EmbeddedSource, FileSource};

    #[test]
    fn embedded_dictionary_search() {
        let mut emitted = Vec::new();
        let summary = run_search(&EmbeddedSource, &SearchConfig::default(), |q| {
            emitted.push(q.to_string());
        })
        .unwrap();

        assert_eq!(
            emitted,
            vec![
                "[waqfs glent brick vozhd jumpy]",
                "[waqfs treck bling vozhd jumpy]",
            ]
        );
        assert_eq!(summary.words, vec!["waqfs", "treck", "bling", "vozhd", "jumpy"]);
        assert_eq!(summary.eliminated, 25);
        assert_eq!(summary.solutions_found, 2);
        assert_eq!(summary.dictionary_size, 718);
    }

    #[test]
    fn parallel_search_reports_same_sequence() {
        let mut sequential = Vec::new();
        run_search(&EmbeddedSource, &SearchConfig::default(), |q| {
            sequential.push(q.to_string());
        })
        .unwrap();

        let config = SearchConfig {
            parallel: true,
            ..SearchConfig::default()
        };
        let mut parallel = Vec::new();
        let summary = run_search(&EmbeddedSource, &config, |q| parallel.push(q.to_string())).unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(summary.eliminated, 25);
    }

    #[test]
    fn profiling_does_not_change_output() {
        let path = std::env::temp_dir().join(format!(
            "letter_elimination_search_profile_{}.txt",
            std::process::id()
        ));
        let config = SearchConfig {
            profile_output: Some(path.clone()),
            ..SearchConfig::default()
        };

        let plain = run_search(&EmbeddedSource, &SearchConfig::default(), |_| {}).unwrap();
        let profiled = run_search(&EmbeddedSource, &config, |_| {}).unwrap();

        let report = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(plain.words, profiled.words);
        assert_eq!(plain.stats, profiled.stats);
        assert!(report.contains("load"));
        assert!(report.contains("filter"));
        assert!(report.contains("search"));
    }

    #[test]
    fn missing_wordlist_is_an_error() {
        let source = FileSource::new("no/such/dictionary.txt");
        let result = run_search(&source, &SearchConfig::default(), |_| {});
        assert!(result.is_err());
    }

    #[test]
    fn shorter_words_eliminate_fewer_letters() {
        let config = SearchConfig {
            word_length: 4,
            ..SearchConfig::default()
        };
        let summary = run_search(&EmbeddedSource, &config, |_| {}).unwrap();
        assert_eq!(summary.dictionary_size, 561);
        assert_eq!(summary.words, vec!["yarn", "vest", "whip", "golf", "duck"]);
        assert_eq!(summary.eliminated, 20);
    }

    #[test]
    fn no_solution_for_six_letter_words() {
        let config = SearchConfig {
            word_length: 6,
            ..SearchConfig::default()
        };
        let summary = run_search(&EmbeddedSource, &config, |_| {}).unwrap();
        assert_eq!(summary.dictionary_size, 429);
        assert!(summary.words.is_empty());
        assert_eq!(summary.eliminated, 0);
        assert_eq!(summary.solutions_found, 0);
    }
}
