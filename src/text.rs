//! Free-text cleanup for session titles and descriptions.

/// Collapses every whitespace run (including `\r\n` line breaks) to a
/// single space and trims both ends.
///
/// `None` and empty input yield an empty string. The result never
/// contains two adjacent whitespace characters, so applying it twice is
/// the same as applying it once.
pub fn normalize(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    let mut result = String::with_capacity(text.len());
    for word in text.split(is_space).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// Unicode whitespace plus the ASCII information separators
/// (U+001C..=U+001F), which also count as spaces in scraped text.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Truncates to at most `max_chars` characters, appending `...` when
/// anything was cut. Counts chars rather than bytes so CJK text is never
/// split mid-codepoint.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_pos, _)) => format!("{}...", &text[..byte_pos]),
        None => text.to_string(),
    }
}
