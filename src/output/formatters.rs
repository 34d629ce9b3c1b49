//! Formatting utilities for terminal output

/// Format words as a bracketed, space-separated list
///
/// An empty list renders as `[]`.
#[must_use]
pub fn format_word_list<S: AsRef<str>>(words: &[S]) -> String {
    let joined: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    format!("[{}]", joined.join(" "))
}

/// One line per solution: the words followed by the eliminated-letter count
#[must_use]
pub fn solution_line<S: AsRef<str>>(words: &[S], eliminated: usize) -> String {
    format!("{} {eliminated}", format_word_list(words))
}

/// Closing summary line for a search
#[must_use]
pub fn summary_line<S: AsRef<str>>(words: &[S], eliminated: usize) -> String {
    format!(
        "Guessing: {} eliminates {eliminated} distinct letters",
        format_word_list(words)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_formatting() {
        assert_eq!(format_word_list(&["waqfs", "treck"]), "[waqfs treck]");
        let empty: [&str; 0] = [];
        assert_eq!(format_word_list(&empty), "[]");
    }

    #[test]
    fn solution_line_format() {
        let words = ["waqfs", "treck", "bling", "vozhd", "jumpy"];
        assert_eq!(
            solution_line(&words, 25),
            "[waqfs treck bling vozhd jumpy] 25"
        );
    }

    #[test]
    fn summary_line_format() {
        let words = vec!["waqfs".to_string(), "jumpy".to_string()];
        assert_eq!(
            summary_line(&words, 25),
            "Guessing: [waqfs jumpy] eliminates 25 distinct letters"
        );

        let none: Vec<String> = Vec::new();
        assert_eq!(
            summary_line(&none, 0),
            "Guessing: [] eliminates 0 distinct letters"
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
