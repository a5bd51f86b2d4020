//! Placeholder summarizer: truncation, not summarization.

/// Characters kept by default.
pub const DEFAULT_SUMMARY_CHARS: usize = 120;

/// Label printed before a summary.
pub const SUMMARY_PREFIX: &str = "SUMMARY (placeholder):";

/// Printed when there is nothing to summarize.
pub const USAGE_HINT: &str = "No text provided. Use: summarizer-cli 'long text'";

/// Keep the first `max_chars` characters of `text`, marking a cut with `...`.
///
/// Counts Unicode scalar values, so multi-byte text is never split
/// mid-character.
pub fn summarize(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// The line `summarizer-cli` prints for `text`.
pub fn summary_line(text: Option<&str>, max_chars: usize) -> String {
    match text {
        Some(text) if !text.is_empty() => {
            format!("{} {}", SUMMARY_PREFIX, summarize(text, max_chars))
        }
        _ => USAGE_HINT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(summarize("Bawo ni?", DEFAULT_SUMMARY_CHARS), "Bawo ni?");
    }

    #[test]
    fn test_exact_length_untouched() {
        let text = "a".repeat(DEFAULT_SUMMARY_CHARS);
        assert_eq!(summarize(&text, DEFAULT_SUMMARY_CHARS), text);
    }

    #[test]
    fn test_long_text_truncated() {
        let text = "b".repeat(DEFAULT_SUMMARY_CHARS + 1);
        let summary = summarize(&text, DEFAULT_SUMMARY_CHARS);
        assert_eq!(summary, format!("{}...", "b".repeat(DEFAULT_SUMMARY_CHARS)));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // ọ̀rẹ́ spelled with combining accents: five scalar values
        let word = "\u{1ECD}\u{0300}r\u{1EB9}\u{0301}";
        assert_eq!(summarize(word, 3), "\u{1ECD}\u{0300}r...");
        assert_eq!(summarize(word, 5), word);
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(Some("hi"), 120), "SUMMARY (placeholder): hi");
        assert_eq!(summary_line(Some(""), 120), USAGE_HINT);
        assert_eq!(summary_line(None, 120), USAGE_HINT);
    }
}
