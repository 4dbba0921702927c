//! Plain text output formatter

use super::{ChunkRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Separator line written after every chunk
pub const SEPARATOR: &str = "####";

/// Plain text formatter - `position | length | text` records separated by `####`
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, chunk: &ChunkRecord<'_>) -> Result<()> {
        write!(
            self.writer,
            "{} | {} | {}",
            chunk.position, chunk.length, chunk.text
        )?;
        write!(self.writer, "\n{SEPARATOR}\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
