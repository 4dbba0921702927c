//! Chunk command implementation

use anyhow::{Context, Result};
use clap::Args;
use mdfic_core::CopyEditor;
use std::path::PathBuf;

use super::{InputArgs, OutputFormat};
use crate::config::CliConfig;
use crate::input;
use crate::output::{self, ChunkRecord};

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Word allowance per chunk
    #[arg(short = 'w', long, value_name = "WORDS")]
    pub max_words: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let max_words = self.max_words.unwrap_or(config.copyedit.max_words);
        let editor = CopyEditor::new(max_words, config.copyedit.strength.into());

        let text = input::read_all(&self.input.files)?;
        let chunks = editor.chunks(&text).context("Failed to chunk manuscript")?;
        let total = chunks.len();

        log::info!("Split manuscript into {total} chunks of up to {max_words} words");

        let mut formatter = output::formatter(self.format, output::open_sink(self.output.as_deref())?);
        output::write_chunks(
            formatter.as_mut(),
            chunks.iter().enumerate().map(|(i, chunk)| ChunkRecord {
                position: i + 1,
                total,
                length: chunk.chars().count(),
                text: chunk,
            }),
        )
    }
}
