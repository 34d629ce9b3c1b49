//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_benchmark_result, print_bucket_report, print_solution, print_summary,
};
