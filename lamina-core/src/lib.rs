//! Core primitives for the Lamina document chunking engine
//!
//! This crate holds the pure, allocation-only algorithms: splitting
//! strategies, per-line layout classification, content-type classification
//! and confidence scoring, keyword extraction, and table detection. The
//! orchestration layer lives in `lamina-engine`.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
pub mod keywords;
pub mod layout;
pub mod split;
pub mod table;
pub mod types;

// Re-export key types
pub use config::{
    EmbeddingConfig, ExtractionMethod, SegmentationOptions, SegmentationStrategy, TextSplitterKind,
};
pub use error::{CoreError, Result};
pub use split::SplitPlan;
pub use types::{BoundingBox, PageEstimator, Segment, SegmentKind, Table};
