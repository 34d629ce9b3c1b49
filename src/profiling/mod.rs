//! Profiling harness
//!
//! Wraps the phases of a run with wall-clock timers and keeps the search's
//! per-depth counters, then renders a plain-text report. A disabled profiler
//! runs the wrapped closures untouched, so enabling it never changes what the
//! search prints or returns.

use crate::search::{BUCKET_COUNT, SearchStats};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// A single timed phase
#[derive(Debug, Clone)]
pub struct Span {
    pub label: &'static str,
    pub elapsed: Duration,
}

/// Collects phase timings and search counters
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    enabled: bool,
    spans: Vec<Span>,
    stats: Option<SearchStats>,
}

impl Profiler {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// A profiler that records nothing
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run `f`, timing it under `label` when enabled
    pub fn measure<T>(&mut self, label: &'static str, f: impl FnOnce() -> T) -> T {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let value = f();
        self.spans.push(Span {
            label,
            elapsed: start.elapsed(),
        });
        value
    }

    /// Keep the counters from a finished search
    pub fn record_stats(&mut self, stats: &SearchStats) {
        if self.enabled {
            self.stats = Some(*stats);
        }
    }

    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.spans.iter().map(|s| s.elapsed).sum()
    }

    /// Render the report as text
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "letter_elimination profile");
        let _ = writeln!(out);
        let _ = writeln!(out, "phase        elapsed");
        for span in &self.spans {
            let _ = writeln!(out, "{:<12} {}", span.label, fmt_dur_ms(span.elapsed));
        }
        let _ = writeln!(out, "{:<12} {}", "total", fmt_dur_ms(self.total()));

        if let Some(stats) = &self.stats {
            let _ = writeln!(out);
            let _ = writeln!(out, "depth  visited      pruned");
            for depth in 0..BUCKET_COUNT {
                let _ = writeln!(
                    out,
                    "{depth:<6} {:<12} {}",
                    stats.visited[depth], stats.pruned[depth]
                );
            }
            let _ = writeln!(
                out,
                "{:<6} {:<12} {}",
                "all",
                stats.total_visited(),
                stats.total_pruned()
            );
        }
        out
    }

    /// Write the rendered report to `path`
    ///
    /// # Errors
    ///
    /// Returns any I/O error from creating or writing the file.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}

/// Format a duration as milliseconds
#[must_use]
pub fn fmt_dur_ms(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms < 1.0 {
        format!("{ms:.3} ms")
    } else {
        format!("{ms:.1} ms")
    }
}
