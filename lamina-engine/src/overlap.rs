//! Cross-segment overlap injection

use lamina_core::split::{char_len, tail_chars};
use lamina_core::{types, Segment};

/// Produce a new segment list where each segment after the first starts
/// with the trailing slice of its predecessor.
///
/// Runs in position order, so the injected context comes from the already
/// overlapped predecessor, never from a later segment. The input list is
/// consumed; the pre-overlap segments stay available to the caller by
/// cloning beforehand if needed.
pub(crate) fn apply_overlap(segments: Vec<Segment>, ratio: f64) -> Vec<Segment> {
    if ratio <= 0.0 || segments.len() < 2 {
        return segments;
    }

    let mut overlapped: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        let injected = overlapped.last().and_then(|prev| {
            let take = (char_len(&prev.content) as f64 * ratio).floor() as usize;
            (take > 0).then(|| format!("{} {}", tail_chars(&prev.content, take), segment.content))
        });
        match injected {
            Some(content) => {
                let word_count = types::word_count(&content);
                overlapped.push(Segment {
                    content,
                    word_count,
                    token_count: types::token_estimate(word_count),
                    ..segment
                });
            }
            None => overlapped.push(segment),
        }
    }
    overlapped
}
