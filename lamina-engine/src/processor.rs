//! The document chunker and its builder

use crate::{
    coverage,
    embedding::{self, DerivedParams},
    error::{EngineError, Result},
    input::ExtractedDocument,
    metadata::DocumentMetadata,
    output::ChunkOutput,
    overlap, segmenter,
};
use lamina_core::split::{self, SplitPlan};
use lamina_core::{layout, table, PageEstimator, SegmentationOptions, SegmentationStrategy};
use std::time::Instant;
use tracing::debug;

/// Resolved per-invocation parameters after embedding mapping
struct ResolvedParams {
    plan: SplitPlan,
    min_len: usize,
    overlap_ratio: f64,
    confidence_floor: Option<f64>,
}

/// Main entry point: a pure transformation from `(text, options)` to
/// `(segments, tables, metadata)`.
///
/// The chunker holds no state between calls and is safely callable
/// concurrently for different documents.
#[derive(Debug, Clone)]
pub struct DocumentChunker {
    options: SegmentationOptions,
}

impl DocumentChunker {
    /// Create a chunker with default options
    pub fn new() -> Self {
        Self::with_options(SegmentationOptions::default())
    }

    /// Create a chunker with explicit options
    pub fn with_options(options: SegmentationOptions) -> Self {
        Self { options }
    }

    /// Create a builder
    pub fn builder() -> DocumentChunkerBuilder {
        DocumentChunkerBuilder::new()
    }

    /// The configured options
    pub fn options(&self) -> &SegmentationOptions {
        &self.options
    }

    /// Process an extracted document.
    ///
    /// Never panics and never returns an error: failures are reported via
    /// `success: false` and the `errors` array so batch callers can keep
    /// processing other documents.
    pub fn process(&self, doc: &ExtractedDocument) -> ChunkOutput {
        let started = Instant::now();

        if let Err(err) = self.options.validate() {
            return ChunkOutput::failure(
                doc,
                &self.options,
                vec![EngineError::from(err).to_string()],
                started.elapsed(),
            );
        }
        if doc.text.trim().is_empty() {
            let err = EngineError::Extraction {
                reason: "document text is empty".to_string(),
            };
            return ChunkOutput::failure(doc, &self.options, vec![err.to_string()], started.elapsed());
        }

        let summary = layout::analyze(&doc.text);
        debug!(
            titles = summary.title_lines,
            lists = summary.list_lines,
            paragraphs = summary.paragraph_lines,
            furniture = summary.header_footer_lines,
            "layout analysis"
        );

        let params = self.resolve_params();
        let chunks = split::split(&doc.text, &params.plan);
        let chunks = coverage::ensure_coverage(&doc.text, chunks, &summary, params.plan.max_len());

        let mut drafts: Vec<_> = chunks
            .iter()
            .filter_map(|chunk| segmenter::build_draft(chunk, params.min_len))
            .collect();
        if drafts.is_empty() {
            // Everything fell below the minimum length; a short document
            // still yields one segment rather than none. The confidence
            // gate below still applies to it.
            let whole = doc.text.split_whitespace().collect::<Vec<_>>().join(" ");
            drafts.push(segmenter::draft_unchecked(&whole));
        }
        if let Some(floor) = params.confidence_floor {
            drafts.retain(|draft| draft.confidence >= floor);
        }

        let pages = PageEstimator::new(doc.text.chars().count(), doc.total_pages);
        let segments = segmenter::materialize(drafts, &pages);
        let segments = overlap::apply_overlap(segments, params.overlap_ratio);

        let tables = if self.options.enable_table_extraction {
            table::extract_tables(&doc.text, &pages)
        } else {
            Vec::new()
        };

        let metadata = DocumentMetadata::assemble(doc, &self.options, &segments, started.elapsed());
        ChunkOutput {
            success: true,
            content: doc.text.clone(),
            segments,
            tables,
            metadata,
            errors: None,
        }
    }

    /// Process bare text, estimating page count and file size
    pub fn process_text(&self, text: &str) -> ChunkOutput {
        self.process(&ExtractedDocument::from_text(text))
    }

    /// Select and parameterize the splitting algorithm.
    ///
    /// The embedding configuration, when present, overrides the plain
    /// options and additionally enables the post-hoc confidence gate.
    fn resolve_params(&self) -> ResolvedParams {
        match &self.options.embedding {
            Some(config) => {
                let DerivedParams {
                    plan,
                    min_segment_length,
                    overlap_ratio,
                    ..
                } = embedding::derive_params(config);
                ResolvedParams {
                    plan,
                    min_len: min_segment_length,
                    overlap_ratio,
                    confidence_floor: Some(self.options.confidence_threshold),
                }
            }
            None => ResolvedParams {
                plan: SplitPlan::Strategy {
                    strategy: self.options.strategy,
                    max_len: self.options.max_segment_length,
                    min_len: self.options.min_segment_length,
                    overlap_chars: (self.options.max_segment_length as f64
                        * self.options.overlap_ratio)
                        .floor() as usize,
                },
                min_len: self.options.min_segment_length,
                overlap_ratio: self.options.overlap_ratio,
                confidence_floor: None,
            },
        }
    }
}

impl Default for DocumentChunker {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent builder for [`DocumentChunker`]
#[derive(Debug, Default)]
pub struct DocumentChunkerBuilder {
    options: SegmentationOptions,
}

impl DocumentChunkerBuilder {
    /// Create a builder seeded with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the splitting strategy
    pub fn strategy(mut self, strategy: SegmentationStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Set the maximum chunk length in characters
    pub fn max_segment_length(mut self, max: usize) -> Self {
        self.options.max_segment_length = max;
        self
    }

    /// Set the minimum trimmed segment length in characters
    pub fn min_segment_length(mut self, min: usize) -> Self {
        self.options.min_segment_length = min;
        self
    }

    /// Set the overlap ratio
    pub fn overlap_ratio(mut self, ratio: f64) -> Self {
        self.options.overlap_ratio = ratio;
        self
    }

    /// Set the confidence threshold for the embedding path
    pub fn confidence_threshold(mut self, threshold: f64) -> Self {
        self.options.confidence_threshold = threshold;
        self
    }

    /// Enable or disable table extraction
    pub fn table_extraction(mut self, enabled: bool) -> Self {
        self.options.enable_table_extraction = enabled;
        self
    }

    /// Set the extraction method reported in metadata
    pub fn extraction_method(mut self, method: lamina_core::ExtractionMethod) -> Self {
        self.options.extraction_method = method;
        self
    }

    /// Segment for an embedding model's chunking preferences
    pub fn embedding(mut self, config: lamina_core::EmbeddingConfig) -> Self {
        self.options.embedding = Some(config);
        self
    }

    /// Validate the options and build the chunker
    pub fn build(self) -> Result<DocumentChunker> {
        self.options.validate()?;
        Ok(DocumentChunker::with_options(self.options))
    }
}
