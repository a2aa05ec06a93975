//! Paragraph splitting, the hybrid strategy, and the coverage fallback

use super::{char_len, sentence::split_sentences};
use regex::Regex;
use std::sync::OnceLock;

fn blank_line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Split text on blank-line boundaries and normalize internal whitespace
/// to single spaces. Empty blocks are dropped.
pub fn paragraph_blocks(text: &str) -> Vec<String> {
    blank_line_pattern()
        .split(text)
        .map(|block| block.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|block| !block.is_empty())
        .collect()
}

/// Split text into chunks along paragraph boundaries.
///
/// Each blank-line block becomes its own chunk once it reaches `min_len`
/// characters; smaller blocks accrete into the running buffer. A block
/// longer than `max_len` recurses into the sentence splitter.
pub fn split_paragraphs(text: &str, max_len: usize, min_len: usize) -> Vec<String> {
    let mut units = Vec::new();
    for block in paragraph_blocks(text) {
        if char_len(&block) > max_len {
            units.extend(split_sentences(&block, max_len));
        } else {
            units.push(block);
        }
    }
    pack_blocks(units, max_len, min_len)
}

/// Split text into chunks along single-line boundaries.
///
/// Used by the coverage guard for list-heavy documents, where blank-line
/// splitting would lump an entire list into one chunk.
pub fn split_lines(text: &str, max_len: usize, min_len: usize) -> Vec<String> {
    let mut units = Vec::new();
    for line in text.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            continue;
        }
        if char_len(&line) > max_len {
            units.extend(split_sentences(&line, max_len));
        } else {
            units.push(line);
        }
    }
    pack_blocks(units, max_len, min_len)
}

/// Hybrid strategy: paragraph pass, then sentence re-splitting of any
/// chunk still over `max_len`
pub fn split_hybrid(text: &str, max_len: usize, min_len: usize) -> Vec<String> {
    split_paragraphs(text, max_len, min_len)
        .into_iter()
        .flat_map(|chunk| {
            if char_len(&chunk) > max_len {
                split_sentences(&chunk, max_len)
            } else {
                vec![chunk]
            }
        })
        .collect()
}

/// Pack blocks so that each chunk reaches `min_len` without crossing
/// `max_len`. A block that already meets `min_len` stays on its own,
/// preserving paragraph boundaries.
fn pack_blocks(units: Vec<String>, max_len: usize, min_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buffer = String::new();

    for unit in units {
        if !buffer.is_empty() {
            let buffer_len = char_len(&buffer);
            if buffer_len >= min_len || buffer_len + 1 + char_len(&unit) > max_len {
                chunks.push(std::mem::take(&mut buffer));
            }
        }
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(&unit);
    }
    if !buffer.is_empty() {
        chunks.push(buffer);
    }
    chunks
}
