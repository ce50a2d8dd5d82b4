/// Count words in the document text.
///
/// The text is trimmed first so a trailing newline doesn't count.
pub fn count_words(text: &str) -> usize {
    text.trim().split_whitespace().count()
}

/// Count characters in the document text, newlines excluded.
pub fn count_chars(text: &str) -> usize {
    text.trim().chars().filter(|c| *c != '\n').count()
}

/// Format the counter labels shown in the top bar.
pub fn counts_label(text: &str) -> (String, String) {
    (
        format!("Words: {}", count_words(text)),
        format!("Chars: {}", count_chars(text)),
    )
}
