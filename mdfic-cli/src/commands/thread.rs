//! Thread command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::{InputArgs, OutputFormat};
use crate::config::CliConfig;
use crate::input;
use crate::output::{self, ChunkRecord};

/// Arguments for the thread command
#[derive(Debug, Args)]
pub struct ThreadArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum length of a post, numbering and appendix included
    #[arg(short, long, value_name = "CHARS")]
    pub max_len: Option<usize>,

    /// Text appended to every post (`\n` is a newline)
    #[arg(short, long, value_name = "TEXT", allow_hyphen_values = true)]
    pub append: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ThreadArgs {
    /// Execute the thread command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let max_len = self.max_len.unwrap_or(config.thread.max_len);
        let appendix = self.append.as_deref().unwrap_or(&config.thread.appendix);
        let format = self.format.unwrap_or(config.thread.format);

        log::info!("Building thread with max length {max_len}");

        let text = input::read_all(&self.input.files)?;
        let posts = mdfic_core::assemble(&text, max_len, appendix)
            .context("Failed to build thread")?;
        let total = posts.len();

        let overruns = posts.iter().filter(|post| post.length > max_len).count();
        if overruns > 0 {
            log::warn!("{overruns} of {total} posts exceed {max_len} chars and could not be split");
        }

        let mut formatter = output::formatter(format, output::open_sink(self.output.as_deref())?);
        output::write_chunks(
            formatter.as_mut(),
            posts.iter().enumerate().map(|(i, post)| ChunkRecord {
                position: i + 1,
                total,
                length: post.length,
                text: &post.text,
            }),
        )
    }
}
