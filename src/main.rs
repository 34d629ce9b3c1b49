//! Letter Elimination - CLI
//!
//! Finds sets of five words that together eliminate 25 distinct letters.

use anyhow::{Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use letter_elimination::{
    commands::{SearchConfig, analyze_buckets, run_benchmark, run_search},
    core::DEFAULT_WORD_LENGTH,
    output::{
        print_banner, print_benchmark_result, print_bucket_report, print_solution, print_summary,
    },
    search::VowelPolicy,
    wordlists::{WordSource, source_from_name},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "letter_elimination",
    about = "Find five words that eliminate 25 distinct letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length to load from the dictionary
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Vowel bucket policy: strict (word must contain its vowel) or exclusion
    #[arg(long, global = true, default_value = "strict", value_parser = ["strict", "exclusion"])]
    vowels: String,

    /// Split the search across all cores
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Write a timing profile of the run to this file
    #[arg(long, global = true, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for five letter-disjoint words (default)
    Search,

    /// Show how the filter stage partitions the dictionary
    Buckets {
        /// List every word in every bucket
        #[arg(long)]
        list: bool,
    },

    /// Time repeated searches
    Benchmark {
        /// Number of searches to run
        #[arg(short = 'n', long, default_value = "10")]
        runs: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy = VowelPolicy::from_name(&cli.vowels)
        .ok_or_else(|| anyhow!("unknown vowel policy '{}'", cli.vowels))?;
    let config = SearchConfig {
        word_length: cli.length,
        policy,
        parallel: cli.parallel,
        profile_output: cli.profile,
    };
    let source = source_from_name(&cli.wordlist);

    // Default to a plain search if no command given
    let command = cli.command.unwrap_or(Commands::Search);

    match command {
        Commands::Search => run_search_command(source.as_ref(), &config, cli.verbose > 0),
        Commands::Buckets { list } => run_buckets_command(source.as_ref(), &config, list),
        Commands::Benchmark { runs } => run_benchmark_command(source.as_ref(), &config, runs),
    }
}

fn run_search_command(source: &dyn WordSource, config: &SearchConfig, verbose: bool) -> Result<()> {
    print_banner();
    let summary = run_search(source, config, print_solution)?;
    print_summary(&summary, verbose);
    Ok(())
}

fn run_buckets_command(source: &dyn WordSource, config: &SearchConfig, list: bool) -> Result<()> {
    let report = analyze_buckets(source, config)?;
    print_bucket_report(&report, list);
    Ok(())
}

fn run_benchmark_command(source: &dyn WordSource, config: &SearchConfig, runs: usize) -> Result<()> {
    println!("Running {runs} searches over {}...", source.describe());
    let result = run_benchmark(source, config, runs, true)?;
    print_benchmark_result(&result);
    Ok(())
}
