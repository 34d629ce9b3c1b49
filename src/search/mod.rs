//! Letter-elimination search
//!
//! The filter stage (`filter`, `buckets`) prunes and partitions the word list;
//! the search stage (`engine`) walks the vowel buckets looking for five
//! letter-disjoint words.

mod buckets;
mod engine;
pub mod filter;

pub use buckets::{VowelBuckets, VowelPolicy};
pub use engine::{
    BUCKET_COUNT, Quintuple, SearchResult, SearchStats, letter_elimination, search,
    search_parallel,
};
