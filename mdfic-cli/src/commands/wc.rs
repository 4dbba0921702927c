//! Word count command implementation

use anyhow::{Context, Result};
use clap::Args;
use mdfic_core::stats::{reading_minutes, word_count};
use std::io::{self, Write};

use super::InputArgs;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};

/// Arguments for the wc command
#[derive(Debug, Args)]
pub struct WcArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Reading speed in words per minute
    #[arg(long, value_name = "WPM")]
    pub wpm: Option<usize>,
}

impl WcArgs {
    /// Execute the wc command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let wpm = self.wpm.unwrap_or(config.wc.wpm);
        let mut stdout = io::stdout().lock();
        let mut total = 0;

        for source in resolve_patterns(&self.input.files)? {
            let words = word_count(&FileReader::read_source(&source)?);
            total += words;
            writeln!(stdout, "{}", report_line(&source.to_string(), words, wpm))
                .context("Failed to write word counts")?;
        }

        writeln!(stdout, "{}", report_line("TOTAL", total, wpm))
            .context("Failed to write word counts")?;
        Ok(())
    }
}

fn report_line(name: &str, words: usize, wpm: usize) -> String {
    format!(
        "{name}: {words} words, {} minutes",
        reading_minutes(words, wpm)
    )
}
