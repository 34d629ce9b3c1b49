//! Display functions for command results

use super::formatters::{create_progress_bar, format_word_list, solution_line, summary_line};
use crate::commands::{BenchmarkResult, BucketReport, SearchSummary, shared_words};
use crate::profiling::fmt_dur_ms;
use crate::search::Quintuple;
use colored::Colorize;

/// Print the greeting shown before a search
pub fn print_banner() {
    println!("{}\n", "Welcome to letter_elimination".bright_cyan().bold());
}

/// Print one complete quintuple as soon as it is found
pub fn print_solution(quintuple: &Quintuple<'_>) {
    println!("{}", solution_line(&quintuple.texts(), quintuple.eliminated()));
}

/// Print the closing summary of a search
pub fn print_summary(summary: &SearchSummary, verbose: bool) {
    println!();
    let line = summary_line(&summary.words, summary.eliminated);
    if summary.words.is_empty() {
        println!("{}", line.yellow());
    } else {
        println!("{}", line.green().bold());
    }

    if verbose {
        println!(
            "  Solutions:  {} from {} words in {}",
            summary.solutions_found,
            summary.dictionary_size,
            fmt_dur_ms(summary.duration)
        );
        println!("  Buckets:    {:?}", summary.bucket_sizes);
        println!(
            "  Candidates: {} visited, {} pruned",
            summary.stats.total_visited(),
            summary.stats.total_pruned()
        );
    }
}

/// Print the filter-stage analysis
pub fn print_bucket_report(report: &BucketReport, list: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "VOWEL BUCKETS:".bright_cyan().bold(),
        report.source.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Filter stage:".bright_cyan().bold());
    println!("   Word length:       {}", report.word_length);
    println!("   Vowel policy:      {}", report.policy);
    println!("   Words loaded:      {}", report.loaded);
    println!("   Duplicate-free:    {}", report.duplicate_free);
    println!("   Without a vowel:   {}", report.vowelless.len());
    if !report.vowelless.is_empty() {
        println!(
            "                      {}",
            format_word_list(&report.vowelless).bright_black()
        );
    }
    let shared = shared_words(report);
    if shared > 0 {
        println!(
            "   {}",
            format!("{shared} bucket slots hold words shared across buckets").yellow()
        );
    }

    println!("\n📈 {}", "Bucket sizes:".bright_cyan().bold());
    let largest = report.largest_bucket() as f64;
    for entry in &report.buckets {
        let bar = create_progress_bar(entry.words.len() as f64, largest, 40);
        println!("   {}: {} {:5}", entry.vowel, bar.green(), entry.words.len());
    }

    if list {
        for entry in &report.buckets {
            println!(
                "\n{} {}",
                format!("[{}]", entry.vowel).bright_cyan().bold(),
                entry.words.join(" ")
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Runs:             {}", result.runs);
    println!("   Dictionary:       {} words", result.dictionary_size);
    println!("   Solutions/run:    {}", result.solutions_per_run);
    println!("   Candidates/run:   {}", result.candidates_per_run);
    println!(
        "   Mean:             {}",
        fmt_dur_ms(result.mean).bright_yellow().bold()
    );
    println!("   Best case:        {}", fmt_dur_ms(result.min).green());
    println!("   Worst case:       {}", fmt_dur_ms(result.max).yellow());
    println!("   Total:            {:.2}s", result.total.as_secs_f64());
}
