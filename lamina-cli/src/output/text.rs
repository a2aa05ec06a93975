//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use lamina_engine::ChunkOutput;
use std::io::Write;

/// Text formatter - one segment per block with a summary header
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn write_output(&self, output: &ChunkOutput, writer: &mut dyn Write) -> Result<()> {
        if !output.success {
            writeln!(writer, "processing failed")?;
            if let Some(errors) = &output.errors {
                for error in errors {
                    writeln!(writer, "  error: {error}")?;
                }
            }
            return Ok(());
        }

        writeln!(
            writer,
            "{} segments, {} tables, {} words, {} pages",
            output.segments.len(),
            output.tables.len(),
            output.metadata.total_words,
            output.metadata.total_pages,
        )?;
        for segment in &output.segments {
            writeln!(writer)?;
            writeln!(
                writer,
                "[{}] {} page={} confidence={:.2}",
                segment.position, segment.kind, segment.page_number, segment.confidence,
            )?;
            writeln!(writer, "{}", segment.content)?;
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
    fn renders_a_summary_line_and_segments() {
        let result = DocumentChunker::new()
            .process_text("A plain paragraph for the text renderer to print back out.");
        let mut buffer = Vec::new();
        TextFormatter.write_output(&result, &mut buffer).unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("1 segments"));
        assert!(rendered.contains("text renderer"));
    }

    #[test]
    fn renders_errors_on_failure() {
        let result = DocumentChunker::new().process_text("");
        let mut buffer = Vec::new();
        TextFormatter.write_output(&result, &mut buffer).unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("processing failed"));
        assert!(rendered.contains("error:"));
    }
}
