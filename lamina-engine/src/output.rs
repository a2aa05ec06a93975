//! Engine output contract

use crate::input::ExtractedDocument;
use crate::metadata::DocumentMetadata;
use lamina_core::{Segment, SegmentationOptions, Table};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete result of one engine invocation.
///
/// Downstream components depend on the exact key names and enum values of
/// the serialized form, so field renames here are breaking changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkOutput {
    /// False when the input was rejected before segmentation
    pub success: bool,
    /// Original raw text, echoed back
    pub content: String,
    /// Ordered, typed, scored segments
    pub segments: Vec<Segment>,
    /// Detected tables, when table extraction is enabled
    pub tables: Vec<Table>,
    /// Document-level metadata
    pub metadata: DocumentMetadata,
    /// Error descriptions, present only on failure or degradation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ChunkOutput {
    /// Failure result: no segments, no tables, zeroed metadata
    pub(crate) fn failure(
        doc: &ExtractedDocument,
        options: &SegmentationOptions,
        errors: Vec<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            success: false,
            content: String::new(),
            segments: Vec::new(),
            tables: Vec::new(),
            metadata: DocumentMetadata::zeroed(doc, options, elapsed),
            errors: Some(errors),
        }
    }
}
