//! Output formatting module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::commands::OutputFormat;

/// One chunk as handed to a formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRecord<'a> {
    /// 1-based position
    pub position: usize,
    /// Number of chunks in the run
    pub total: usize,
    /// Length of `text` in chars
    pub length: usize,
    /// Chunk text
    pub text: &'a str,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single chunk
    fn format_chunk(&mut self, chunk: &ChunkRecord<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Output sink: a file when a path is given, stdout otherwise
pub type Sink = Box<dyn Write + Send + Sync>;

/// Open the output sink
pub fn open_sink(path: Option<&Path>) -> Result<Sink> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format` writing to `sink`
pub fn formatter(format: OutputFormat, sink: Sink) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(sink)),
        OutputFormat::Json => Box::new(JsonFormatter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(sink)),
    }
}

/// Write every chunk through `formatter` and finish it
pub fn write_chunks<'a, I>(formatter: &mut dyn OutputFormatter, chunks: I) -> Result<()>
where
    I: IntoIterator<Item = ChunkRecord<'a>>,
{
    for chunk in chunks {
        formatter.format_chunk(&chunk)?;
    }
    formatter.finish()
}
