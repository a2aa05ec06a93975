//! Embedding-model chunking preferences mapped to internal parameters
//!
//! Bridges the persistence/embedding subsystem to the engine: an external
//! model's `{splitter, chunkSize, chunkOverlap}` becomes a concrete
//! [`SplitPlan`] plus derived length and overlap settings.

use lamina_core::split::{
    generic_separators, markdown_separators, python_code_separators, SplitPlan,
};
use lamina_core::{EmbeddingConfig, SegmentationStrategy, TextSplitterKind};

/// Minimum segment length floor on the embedding path
const MIN_LEN_FLOOR: usize = 50;

/// Internal segmentation parameters derived from embedding preferences
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedParams {
    /// Mapped internal strategy name
    pub strategy: SegmentationStrategy,
    /// Concrete splitting plan
    pub plan: SplitPlan,
    /// Maximum chunk length in characters
    pub max_segment_length: usize,
    /// Minimum trimmed segment length in characters
    pub min_segment_length: usize,
    /// Derived overlap ratio (`chunk_overlap / chunk_size`)
    pub overlap_ratio: f64,
}

/// Map embedding preferences to internal segmentation parameters
pub fn derive_params(config: &EmbeddingConfig) -> DerivedParams {
    let max_segment_length = config.chunk_size;
    let min_segment_length = MIN_LEN_FLOOR.max(config.chunk_size / 10);
    let overlap_ratio = config.chunk_overlap as f64 / config.chunk_size as f64;

    let (strategy, separators) = match config.text_splitter {
        TextSplitterKind::RecursiveCharacter => (SegmentationStrategy::Hybrid, None),
        TextSplitterKind::Character => (SegmentationStrategy::Paragraph, None),
        TextSplitterKind::Token => (SegmentationStrategy::Semantic, None),
        TextSplitterKind::Markdown => {
            (SegmentationStrategy::Hybrid, Some(markdown_separators()))
        }
        TextSplitterKind::PythonCode => {
            (SegmentationStrategy::Semantic, Some(python_code_separators()))
        }
    };

    // Caller-supplied separators always win; a recursiveCharacter splitter
    // without custom separators uses the generic list.
    let separators = match (&config.separators, separators) {
        (Some(custom), _) => Some(normalize_separators(custom)),
        (None, derived) => derived.or_else(|| {
            matches!(config.text_splitter, TextSplitterKind::RecursiveCharacter)
                .then(generic_separators)
        }),
    };

    let plan = match separators {
        Some(separators) => SplitPlan::Recursive {
            separators,
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        },
        None => SplitPlan::Strategy {
            strategy,
            max_len: max_segment_length,
            min_len: min_segment_length,
            overlap_chars: config.chunk_overlap,
        },
    };

    DerivedParams {
        strategy,
        plan,
        max_segment_length,
        min_segment_length,
        overlap_ratio,
    }
}

/// Guarantee the character-level terminator is present so recursion always
/// bottoms out.
fn normalize_separators(separators: &[String]) -> Vec<String> {
    let mut list = separators.to_vec();
    if !list.iter().any(String::is_empty) {
        list.push(String::new());
    }
    list
}
