//! Separator-priority recursive splitting
//!
//! Backs the embedding-configuration path: a priority-ordered separator
//! list is tried coarsest first, recursing into finer separators for any
//! fragment still over budget. Recursion depth is bounded by the separator
//! list length; the empty-string separator terminates by falling back to
//! the fixed-window character splitter.

use super::{char_len, character::split_characters, tail_chars};

/// Separator priority list for generic prose
pub fn generic_separators() -> Vec<String> {
    ["\n\n", "\n", ". ", " ", ""]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Separator priority list for markdown documents: headers first, then
/// structural whitespace
pub fn markdown_separators() -> Vec<String> {
    ["\n# ", "\n## ", "\n### ", "\n\n", "\n", ". ", " ", ""]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Separator priority list for Python source: class and function
/// boundaries first
pub fn python_code_separators() -> Vec<String> {
    ["\nclass ", "\ndef ", "\n\tdef ", "\n    def ", "\n\n", "\n", " ", ""]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Split text with a priority-ordered separator list.
///
/// The first separator that occurs in the text is used; fragments are
/// greedily packed into chunks of at most `chunk_size` characters, carrying
/// `chunk_overlap` characters of trailing context into the next chunk on
/// flush. Fragments still over budget recurse into the remaining separators.
pub fn split_recursive(
    text: &str,
    separators: &[String],
    chunk_size: usize,
    chunk_overlap: usize,
) -> Vec<String> {
    if text.trim().is_empty() || chunk_size == 0 {
        return Vec::new();
    }

    let Some(index) = separators
        .iter()
        .position(|sep| sep.is_empty() || text.contains(sep.as_str()))
    else {
        // No separator applies and no character-level terminator was
        // provided; fall back to the fixed window.
        return fixed_window(text, chunk_size, chunk_overlap);
    };

    let separator = &separators[index];
    if separator.is_empty() {
        return fixed_window(text, chunk_size, chunk_overlap);
    }
    let remaining = &separators[index + 1..];

    let mut chunks = Vec::new();
    let mut buffer = String::new();

    for part in text.split(separator.as_str()) {
        if part.trim().is_empty() {
            continue;
        }
        let part_len = char_len(part);

        if part_len > chunk_size {
            flush(&mut buffer, &mut chunks, 0);
            chunks.extend(split_recursive(part, remaining, chunk_size, chunk_overlap));
            continue;
        }

        let buffer_len = char_len(&buffer);
        if buffer_len > 0 && buffer_len + char_len(separator) + part_len > chunk_size {
            flush(&mut buffer, &mut chunks, chunk_overlap);
        }
        if !buffer.is_empty() {
            buffer.push_str(separator);
        }
        buffer.push_str(part);
    }
    flush(&mut buffer, &mut chunks, 0);
    chunks
}

fn fixed_window(text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<String> {
    split_characters(text, chunk_size, chunk_overlap, 1)
}

/// Emit the buffer as a chunk; when `carry > 0`, seed the next buffer with
/// that many trailing characters of the flushed chunk.
fn flush(buffer: &mut String, chunks: &mut Vec<String>, carry: usize) {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        buffer.clear();
        return;
    }
    let chunk = trimmed.to_string();
    let seed = if carry > 0 {
        tail_chars(&chunk, carry).to_string()
    } else {
        String::new()
    };
    chunks.push(chunk);
    *buffer = seed;
}
