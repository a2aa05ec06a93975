//! Splitting strategies and strategy selection
//!
//! Every splitter shares one contract: `split(text, plan)` returns an
//! ordered list of chunk strings, each at most `max_len` characters, except
//! when a single indivisible unit (a word, or a separator-delimited fragment
//! with no finer separator available) unavoidably exceeds it.

mod character;
mod paragraph;
mod recursive;
mod sentence;

pub use character::split_characters;
pub use paragraph::{paragraph_blocks, split_hybrid, split_lines, split_paragraphs};
pub use recursive::{
    generic_separators, markdown_separators, python_code_separators, split_recursive,
};
pub use sentence::{sentence_boundaries, split_sentences};

use crate::config::SegmentationStrategy;

/// Fully parameterized splitting plan, produced by the strategy selector
#[derive(Debug, Clone, PartialEq)]
pub enum SplitPlan {
    /// One of the named strategies from [`SegmentationStrategy`]
    Strategy {
        /// Strategy to run
        strategy: SegmentationStrategy,
        /// Maximum chunk length in characters
        max_len: usize,
        /// Minimum chunk length in characters
        min_len: usize,
        /// Window overlap in characters (character strategy only)
        overlap_chars: usize,
    },
    /// Separator-priority recursive splitting (embedding path)
    Recursive {
        /// Priority-ordered separator list; an empty string terminates
        /// recursion via the character splitter
        separators: Vec<String>,
        /// Maximum chunk length in characters
        chunk_size: usize,
        /// Trailing context carried into the next chunk on flush
        chunk_overlap: usize,
    },
}

impl SplitPlan {
    /// Maximum chunk length this plan targets
    pub fn max_len(&self) -> usize {
        match self {
            SplitPlan::Strategy { max_len, .. } => *max_len,
            SplitPlan::Recursive { chunk_size, .. } => *chunk_size,
        }
    }

    /// Minimum chunk length this plan targets
    pub fn min_len(&self) -> usize {
        match self {
            SplitPlan::Strategy { min_len, .. } => *min_len,
            SplitPlan::Recursive { .. } => 0,
        }
    }
}

/// Split text into candidate chunks according to the plan
pub fn split(text: &str, plan: &SplitPlan) -> Vec<String> {
    match plan {
        SplitPlan::Strategy {
            strategy,
            max_len,
            min_len,
            overlap_chars,
        } => match strategy {
            SegmentationStrategy::Character => {
                split_characters(text, *max_len, *overlap_chars, *min_len)
            }
            SegmentationStrategy::Sentence => split_sentences(text, *max_len),
            // Semantic is a named placeholder that currently aliases
            // paragraph splitting.
            SegmentationStrategy::Paragraph | SegmentationStrategy::Semantic => {
                split_paragraphs(text, *max_len, *min_len)
            }
            SegmentationStrategy::Hybrid => split_hybrid(text, *max_len, *min_len),
        },
        SplitPlan::Recursive {
            separators,
            chunk_size,
            chunk_overlap,
        } => split_recursive(text, separators, *chunk_size, *chunk_overlap),
    }
}

/// Character count of a string
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Last `n` characters of a string, UTF-8 safe
pub fn tail_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Greedily pack units into chunks of at most `max_len` characters,
/// joining with a single space. A unit longer than `max_len` is emitted
/// as its own chunk.
pub(crate) fn pack_to_max(units: Vec<String>, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0;

    for unit in units {
        let unit_len = char_len(&unit);
        if buffer_len > 0 && buffer_len + 1 + unit_len > max_len {
            chunks.push(std::mem::take(&mut buffer));
            buffer_len = 0;
        }
        if buffer_len > 0 {
            buffer.push(' ');
            buffer_len += 1;
        }
        buffer.push_str(&unit);
        buffer_len += unit_len;
    }
    if !buffer.is_empty() {
        chunks.push(buffer);
    }
    chunks
}
