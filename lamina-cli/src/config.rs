//! Configuration file support
//!
//! The CLI reads a TOML file with snake_case keys and maps it onto the
//! engine's options. Command-line flags override file values.

use crate::error::CliError;
use anyhow::Result;
use lamina_core::{
    EmbeddingConfig, ExtractionMethod, SegmentationOptions, SegmentationStrategy, TextSplitterKind,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Table extraction configuration
    #[serde(default)]
    pub tables: TableConfig,

    /// Embedding-model chunking preferences
    #[serde(default)]
    pub embedding: Option<EmbeddingSection>,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct SegmentationConfig {
    /// Splitting strategy
    pub strategy: SegmentationStrategy,

    /// Maximum chunk length in characters
    pub max_segment_length: usize,

    /// Minimum trimmed segment length in characters
    pub min_segment_length: usize,

    /// Overlap ratio between adjacent segments
    pub overlap_ratio: f64,

    /// Confidence threshold for the embedding path
    pub confidence_threshold: f64,

    /// Extraction method reported in metadata
    pub extraction_method: ExtractionMethod,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        let options = SegmentationOptions::default();
        Self {
            strategy: options.strategy,
            max_segment_length: options.max_segment_length,
            min_segment_length: options.min_segment_length,
            overlap_ratio: options.overlap_ratio,
            confidence_threshold: options.confidence_threshold,
            extraction_method: options.extraction_method,
        }
    }
}

/// Table-extraction configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct TableConfig {
    /// Detect and extract tabular regions
    pub enabled: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Embedding-model preferences section
#[derive(Debug, Deserialize, Serialize)]
pub struct EmbeddingSection {
    /// Splitter family requested by the embedding pipeline
    pub text_splitter: TextSplitterKind,

    /// Target chunk size in characters
    pub chunk_size: usize,

    /// Characters of overlap between consecutive chunks
    pub chunk_overlap: usize,

    /// Custom separator hierarchy for recursive splitting
    #[serde(default)]
    pub separators: Option<Vec<String>>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        let config: CliConfig = toml::from_str(&raw)
            .map_err(|err| CliError::ConfigError(format!("{}: {err}", path.display())))?;
        Ok(config)
    }

    /// Convert the file representation into engine options
    pub fn into_options(self) -> SegmentationOptions {
        SegmentationOptions {
            extraction_method: self.segmentation.extraction_method,
            enable_table_extraction: self.tables.enabled,
            strategy: self.segmentation.strategy,
            max_segment_length: self.segmentation.max_segment_length,
            min_segment_length: self.segmentation.min_segment_length,
            overlap_ratio: self.segmentation.overlap_ratio,
            confidence_threshold: self.segmentation.confidence_threshold,
            embedding: self.embedding.map(|section| EmbeddingConfig {
                text_splitter: section.text_splitter,
                chunk_size: section.chunk_size,
                chunk_overlap: section.chunk_overlap,
                separators: section.separators,
                ..EmbeddingConfig::default()
            }),
            ..SegmentationOptions::default()
        }
    }

    /// Default configuration rendered as a commented TOML template
    pub fn default_toml() -> String {
        let defaults = SegmentationConfig::default();
        format!(
            r#"# Lamina document chunking configuration

[segmentation]
# Splitting strategy: "character", "sentence", "paragraph", "hybrid", "semantic"
strategy = "hybrid"
# Maximum chunk length in characters
max_segment_length = {max}
# Segments shorter than this (after trimming) are dropped
min_segment_length = {min}
# Fraction of each segment carried into its successor (0.0 disables)
overlap_ratio = {overlap}
# Minimum confidence kept when an embedding config is active
confidence_threshold = {threshold}
# Reported extraction method: "deepdoc", "naive", "hybrid"
extraction_method = "hybrid"

[tables]
# Detect and extract tabular regions
enabled = true

# Uncomment to derive segmentation from an embedding model's preferences.
# [embedding]
# text_splitter = "recursiveCharacter"
# chunk_size = 1000
# chunk_overlap = 100
"#,
            max = defaults.max_segment_length,
            min = defaults.min_segment_length,
            overlap = defaults.overlap_ratio,
            threshold = defaults.confidence_threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_round_trips() {
        let config: CliConfig = toml::from_str(&CliConfig::default_toml()).unwrap();
        let options = config.into_options();
        assert!(options.validate().is_ok());
        assert_eq!(options.max_segment_length, 2000);
        assert!(options.embedding.is_none());
    }

    #[test]
    fn embedding_section_is_carried_over() {
        let raw = r#"
            [embedding]
            text_splitter = "markdown"
            chunk_size = 800
            chunk_overlap = 80
        "#;
        let config: CliConfig = toml::from_str(raw).unwrap();
        let options = config.into_options();
        let embedding = options.embedding.unwrap();
        assert_eq!(embedding.text_splitter, TextSplitterKind::Markdown);
        assert_eq!(embedding.chunk_size, 800);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        let options = config.into_options();
        assert_eq!(options, SegmentationOptions::default());
    }

    #[test]
    fn tables_can_be_disabled() {
        let config: CliConfig = toml::from_str("[tables]\nenabled = false\n").unwrap();
        assert!(!config.into_options().enable_table_extraction);
    }
}
