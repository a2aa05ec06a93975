//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lamina_engine::ChunkOutput;
use std::io::Write;

/// JSON formatter - emits the full chunking result as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn write_output(&self, output: &ChunkOutput, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, output)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
