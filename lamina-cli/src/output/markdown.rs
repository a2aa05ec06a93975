//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use lamina_engine::ChunkOutput;
use std::io::Write;

/// Markdown formatter - renders segments as sections and tables as HTML
pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn write_output(&self, output: &ChunkOutput, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "# Chunking result")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "- segments: {}\n- tables: {}\n- words: {}\n- pages: {}",
            output.segments.len(),
            output.tables.len(),
            output.metadata.total_words,
            output.metadata.total_pages,
        )?;

        for segment in &output.segments {
            writeln!(writer)?;
            writeln!(
                writer,
                "## Segment {} ({}, page {})",
                segment.position + 1,
                segment.kind,
                segment.page_number,
            )?;
            writeln!(writer)?;
            writeln!(writer, "{}", segment.content)?;
            if !segment.keywords.is_empty() {
                writeln!(writer)?;
                writeln!(writer, "*Keywords: {}*", segment.keywords.join(", "))?;
            }
        }

        for table in &output.tables {
            writeln!(writer)?;
            writeln!(
                writer,
                "## Table ({} x {}, page {})",
                table.rows, table.columns, table.page_number,
            )?;
            writeln!(writer)?;
            writeln!(writer, "{}", table.html_content)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_engine::DocumentChunker;

    #[test]
    fn renders_section_headers() {
        let result = DocumentChunker::new()
            .process_text("One markdown paragraph that should appear under a section header.");
        let mut buffer = Vec::new();
        MarkdownFormatter.write_output(&result, &mut buffer).unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.starts_with("# Chunking result"));
        assert!(rendered.contains("## Segment 1"));
    }
}
