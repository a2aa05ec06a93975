//! Segmentation configuration and validation

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// How the raw text was produced by the extraction collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Layout-aware deep document extraction
    Deepdoc,
    /// Plain text extraction without layout analysis
    Naive,
    /// Layout-aware extraction with plain-text fallback
    Hybrid,
}

/// Splitting algorithm used to produce candidate chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationStrategy {
    /// Fixed-size sliding character window
    Character,
    /// Sentence-boundary packing
    Sentence,
    /// Blank-line paragraph splitting with sentence fallback
    Paragraph,
    /// Placeholder for similarity-based splitting; currently an alias of
    /// paragraph splitting
    Semantic,
    /// Paragraph pass followed by sentence re-splitting of oversized chunks
    Hybrid,
}

/// Splitter kind preferred by an external embedding model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextSplitterKind {
    /// Separator-priority recursive splitting
    RecursiveCharacter,
    /// Plain character splitting
    Character,
    /// Token-budgeted splitting
    Token,
    /// Markdown-structure-aware splitting
    Markdown,
    /// Python-code-aware splitting
    PythonCode,
}

/// Chunking preferences of an external embedding model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbeddingConfig {
    /// Embedding model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    /// Custom model name, when the model is self-hosted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_model_name: Option<String>,
    /// Provider name (e.g. an inference service)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Preferred splitter kind
    pub text_splitter: TextSplitterKind,
    /// Preferred chunk size in characters
    pub chunk_size: usize,
    /// Preferred trailing overlap in characters
    pub chunk_overlap: usize,
    /// Custom separator priority list; overrides the kind-derived list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separators: Option<Vec<String>>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_id: None,
            custom_model_name: None,
            provider: None,
            text_splitter: TextSplitterKind::RecursiveCharacter,
            chunk_size: 1000,
            chunk_overlap: 100,
            separators: None,
        }
    }
}

impl EmbeddingConfig {
    /// Validate the embedding preferences
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(CoreError::config("chunkSize must be positive"));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(CoreError::config(format!(
                "chunkOverlap ({}) must be smaller than chunkSize ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Full configuration for one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentationOptions {
    /// Extraction method reported in the output metadata
    pub extraction_method: ExtractionMethod,
    /// Whether to scan the text for tables
    pub enable_table_extraction: bool,
    /// Whether image extraction was requested upstream
    pub enable_image_extraction: bool,
    /// Splitting strategy
    #[serde(rename = "segmentationStrategy")]
    pub strategy: SegmentationStrategy,
    /// Maximum chunk length in characters
    pub max_segment_length: usize,
    /// Minimum trimmed segment length in characters
    pub min_segment_length: usize,
    /// Fraction of a segment's trailing content duplicated into the next
    pub overlap_ratio: f64,
    /// Quality gate applied on the embedding-aware path
    pub confidence_threshold: f64,
    /// Embedding-model chunking preferences, when segmenting for a model
    #[serde(rename = "embeddingConfig", skip_serializing_if = "Option::is_none")]
    pub embedding: Option<EmbeddingConfig>,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            extraction_method: ExtractionMethod::Hybrid,
            enable_table_extraction: true,
            enable_image_extraction: false,
            strategy: SegmentationStrategy::Hybrid,
            max_segment_length: 2000,
            min_segment_length: 50,
            overlap_ratio: 0.15,
            confidence_threshold: 0.7,
            embedding: None,
        }
    }
}

impl SegmentationOptions {
    /// Reject configurations that would silently produce degenerate output
    pub fn validate(&self) -> Result<()> {
        if self.max_segment_length == 0 {
            return Err(CoreError::config("maxSegmentLength must be positive"));
        }
        if self.min_segment_length >= self.max_segment_length {
            return Err(CoreError::config(format!(
                "minSegmentLength ({}) must be smaller than maxSegmentLength ({})",
                self.min_segment_length, self.max_segment_length
            )));
        }
        if !(0.0..1.0).contains(&self.overlap_ratio) {
            return Err(CoreError::config(format!(
                "overlapRatio ({}) must be in [0, 1)",
                self.overlap_ratio
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(CoreError::config(format!(
                "confidenceThreshold ({}) must be in [0, 1]",
                self.confidence_threshold
            )));
        }
        if let Some(embedding) = &self.embedding {
            embedding.validate()?;
        }
        Ok(())
    }
}
