//! Text helpers for display.

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Length is counted in characters, so multi-byte text is never split inside
/// a code point. Text at or under the limit is returned unchanged.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + 3);
            truncated.push_str(&text[..cut]);
            truncated.push_str("...");
            truncated
        }
        None => text.to_string(),
    }
}
