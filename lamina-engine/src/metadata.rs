//! Document metadata assembly

use crate::input::ExtractedDocument;
use lamina_core::{ExtractionMethod, Segment, SegmentationOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary metadata for one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Document title, when the extractor found one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Producing application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Creation date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last modification date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    /// Total pages in the source document
    pub total_pages: u32,
    /// Sum of segment word counts
    pub total_words: usize,
    /// Sum of segment token counts
    pub total_tokens: usize,
    /// Best-effort detected language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Source file size in bytes
    pub file_size: u64,
    /// Wall-clock time for the whole engine call, in milliseconds
    pub processing_time_ms: u64,
    /// Extraction method reported by the caller
    pub extraction_method: ExtractionMethod,
}

impl DocumentMetadata {
    /// Assemble metadata for a successful run
    pub(crate) fn assemble(
        doc: &ExtractedDocument,
        options: &SegmentationOptions,
        segments: &[Segment],
        elapsed: Duration,
    ) -> Self {
        Self {
            title: doc.title.clone(),
            author: doc.author.clone(),
            creator: doc.creator.clone(),
            created_at: doc.created_at.clone(),
            modified_at: doc.modified_at.clone(),
            total_pages: doc.total_pages,
            total_words: segments.iter().map(|s| s.word_count).sum(),
            total_tokens: segments.iter().map(|s| s.token_count).sum(),
            language: detect_language(&doc.text),
            file_size: doc.file_size,
            processing_time_ms: elapsed.as_millis() as u64,
            extraction_method: options.extraction_method,
        }
    }

    /// Zeroed metadata for a failed run; only file size and timing survive
    pub(crate) fn zeroed(
        doc: &ExtractedDocument,
        options: &SegmentationOptions,
        elapsed: Duration,
    ) -> Self {
        Self {
            title: None,
            author: None,
            creator: None,
            created_at: None,
            modified_at: None,
            total_pages: 0,
            total_words: 0,
            total_tokens: 0,
            language: None,
            file_size: doc.file_size,
            processing_time_ms: elapsed.as_millis() as u64,
            extraction_method: options.extraction_method,
        }
    }
}

/// Function words whose presence marks English text
const ENGLISH_MARKERS: &[&str] = &["the", "and", "of", "to", "in", "is", "for", "with"];

/// Best-effort language detection.
///
/// Counts English function words among the first few hundred tokens; three
/// or more hits is taken as English. Anything else reports no language.
pub fn detect_language(text: &str) -> Option<String> {
    let hits = text
        .split_whitespace()
        .take(500)
        .filter(|word| {
            let lower = word.to_lowercase();
            ENGLISH_MARKERS.contains(&lower.as_str())
        })
        .count();
    (hits >= 3).then(|| "en".to_string())
}
