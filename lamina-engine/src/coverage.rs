//! Coverage guard: fallback re-splitting for under-segmented documents

use lamina_core::layout::LayoutSummary;
use lamina_core::split::{char_len, split_lines, split_paragraphs};
use tracing::debug;

/// Fewer primary chunks than this triggers the fallback
const MIN_EXPECTED_CHUNKS: usize = 3;

/// Coverage fallback applied to the minimum-length gate
const FALLBACK_MIN_LEN: usize = 10;

/// Re-split when the primary strategy produced implausibly few chunks for
/// the content length.
///
/// The fallback is a blank-line paragraph split with sentence-level
/// recursion; for list-heavy documents it splits on single lines instead,
/// since blank-line splitting would lump an entire list into one chunk.
pub(crate) fn ensure_coverage(
    text: &str,
    chunks: Vec<String>,
    layout: &LayoutSummary,
    max_len: usize,
) -> Vec<String> {
    if chunks.len() >= MIN_EXPECTED_CHUNKS || char_len(text) <= max_len {
        return chunks;
    }

    debug!(
        primary_chunks = chunks.len(),
        list_heavy = layout.list_heavy(),
        "coverage guard engaged"
    );
    let fallback = if layout.list_heavy() {
        split_lines(text, max_len, FALLBACK_MIN_LEN)
    } else {
        split_paragraphs(text, max_len, FALLBACK_MIN_LEN)
    };

    // Keep whichever result covers the document better.
    if fallback.len() > chunks.len() {
        fallback
    } else {
        chunks
    }
}
