//! Fixed-size sliding-window character splitting

/// Split text into fixed windows of `max_len` characters, advancing by
/// `max_len - overlap`. Trimmed chunks shorter than `min_len` are dropped.
pub fn split_characters(text: &str, max_len: usize, overlap: usize, min_len: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() || max_len == 0 {
        return Vec::new();
    }

    // overlap >= max_len would stall the window
    let step = max_len.saturating_sub(overlap).max(1);
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = (start + max_len).min(chars.len());
        let window: String = chars[start..end].iter().collect();
        let trimmed = window.trim();
        if trimmed.chars().count() >= min_len.max(1) {
            chunks.push(trimmed.to_string());
        }
        if end == chars.len() {
            break;
        }
        start += step;
    }
    chunks
}
