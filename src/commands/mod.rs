//! Command implementations

pub mod benchmark;
pub mod buckets;
pub mod search;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use buckets::{BucketEntry, BucketReport, analyze_buckets, shared_words};
pub use search::{SearchConfig, SearchSummary, run_search};
