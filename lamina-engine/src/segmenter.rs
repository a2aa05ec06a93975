//! Builds typed, scored segments from candidate chunks

use lamina_core::{classify, keywords, types, PageEstimator, Segment};
use tracing::warn;

/// A segment candidate before positions and ids are assigned
#[derive(Debug, Clone)]
pub(crate) struct SegmentDraft {
    pub content: String,
    pub kind: lamina_core::SegmentKind,
    pub confidence: f64,
    pub keywords: Vec<String>,
    pub word_count: usize,
    pub token_count: usize,
}

/// Build a draft from a candidate chunk, or discard it when the trimmed
/// content is shorter than `min_len` characters.
pub(crate) fn build_draft(chunk: &str, min_len: usize) -> Option<SegmentDraft> {
    let content = chunk.trim();
    if content.chars().count() < min_len {
        return None;
    }
    Some(draft_from(content))
}

/// Build a draft unconditionally, bypassing the minimum-length gate.
/// Used for the single-segment fallback on very short documents.
pub(crate) fn draft_unchecked(content: &str) -> SegmentDraft {
    draft_from(content.trim())
}

fn draft_from(content: &str) -> SegmentDraft {
    let kind = classify::classify(content);
    let confidence = classify::confidence(content, kind);
    let word_count = types::word_count(content);

    let keywords = keywords::extract(content);
    if keywords.is_empty() && word_count >= 5 {
        // Degraded, not fatal: the segment ships without keywords.
        warn!(chars = content.len(), "keyword extraction found no candidates");
    }

    SegmentDraft {
        content: content.to_string(),
        kind,
        confidence,
        keywords,
        word_count,
        token_count: types::token_estimate(word_count),
    }
}

/// Assign contiguous positions, page numbers, and deterministic ids
pub(crate) fn materialize(drafts: Vec<SegmentDraft>, pages: &PageEstimator) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(drafts.len());
    let mut char_offset = 0;

    for (position, draft) in drafts.into_iter().enumerate() {
        let content_len = draft.content.chars().count();
        segments.push(Segment {
            id: Segment::deterministic_id(position, &draft.content),
            page_number: pages.page_at(char_offset),
            content: draft.content,
            kind: draft.kind,
            position,
            bounding_box: None,
            confidence: draft.confidence,
            keywords: draft.keywords,
            word_count: draft.word_count,
            token_count: draft.token_count,
        });
        char_offset += content_len + 1;
    }
    segments
}
