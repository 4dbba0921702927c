//! Markdown output formatter

use super::{ChunkRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs chunks as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, chunk: &ChunkRecord<'_>) -> Result<()> {
        self.chunk_count += 1;
        // continuation lines stay inside the list item
        let body = chunk.text.trim_end().replace('\n', "\n   ");
        writeln!(self.writer, "{}. {}", chunk.position, body)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
