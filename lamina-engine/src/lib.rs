//! Orchestration layer for the Lamina document chunking engine
//!
//! Wires the core primitives into a pipeline: layout analysis, strategy
//! selection, splitting, segment building, the coverage guard, overlap
//! injection, and table extraction, producing the engine's output contract.

#![warn(missing_docs)]

pub mod embedding;
pub mod error;
pub mod input;
pub mod metadata;
pub mod output;
pub mod processor;

mod coverage;
mod overlap;
mod segmenter;

// Re-export key types
pub use error::{EngineError, Result};
pub use input::ExtractedDocument;
pub use metadata::DocumentMetadata;
pub use output::ChunkOutput;
pub use processor::{DocumentChunker, DocumentChunkerBuilder};

// Re-export from core for convenience
pub use lamina_core::{
    BoundingBox, EmbeddingConfig, ExtractionMethod, Segment, SegmentKind, SegmentationOptions,
    SegmentationStrategy, Table, TextSplitterKind,
};
