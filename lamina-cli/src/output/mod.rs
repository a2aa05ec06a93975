//! Output formatting module

use anyhow::Result;
use lamina_engine::ChunkOutput;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a chunking result to the writer
    fn write_output(&self, output: &ChunkOutput, writer: &mut dyn Write) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
