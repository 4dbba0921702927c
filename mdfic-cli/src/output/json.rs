//! JSON output formatter

use super::{ChunkRecord, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkData {
    /// 1-based position
    pub position: usize,
    /// Number of chunks in the run
    pub total: usize,
    /// Length of the text in chars
    pub length: usize,
    /// The chunk text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_chunk(&mut self, chunk: &ChunkRecord<'_>) -> Result<()> {
        self.chunks.push(ChunkData {
            position: chunk.position,
            total: chunk.total,
            length: chunk.length,
            text: chunk.text.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
