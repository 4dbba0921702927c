//! Copyedit command implementation

use anyhow::{Context, Result};
use clap::Args;
use mdfic_core::{ChunkEditor, CopyEditor, EditRequest, EditorError};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use super::{InputArgs, Strength};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output;
use crate::progress::ProgressReporter;

/// Environment variable carrying the requested edit strength
pub const STRENGTH_VAR: &str = "MDFIC_STRENGTH";

/// Environment variable carrying the chunk position as `index/total`
pub const CHUNK_VAR: &str = "MDFIC_CHUNK";

/// Arguments for the copyedit command
#[derive(Debug, Args)]
pub struct CopyeditArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Program that reads a chunk on stdin and prints the edited chunk
    #[arg(long, value_name = "PROGRAM", required = true)]
    pub filter: String,

    /// Argument passed to the filter (repeatable)
    #[arg(long = "filter-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub filter_args: Vec<String>,

    /// How heavily the filter should edit
    #[arg(short, long, value_enum)]
    pub strength: Option<Strength>,

    /// Word allowance per chunk
    #[arg(short = 'w', long, value_name = "WORDS")]
    pub max_words: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CopyeditArgs {
    /// Execute the copyedit command
    pub fn execute(&self, config: &CliConfig, quiet: bool) -> Result<()> {
        let strength = self.strength.unwrap_or(config.copyedit.strength);
        let max_words = self.max_words.unwrap_or(config.copyedit.max_words);
        let editor = CopyEditor::new(max_words, strength.into());

        let sources = resolve_patterns(&self.input.files)?;
        let mut sink = output::open_sink(self.output.as_deref())?;

        // Each source keeps its own metadata block, so files are edited one at a time.
        for source in &sources {
            log::info!("Copy-editing {source}");
            let text = FileReader::read_source(source)?;

            let mut filter = FilterEditor::new(&self.filter, &self.filter_args, quiet);
            let result = editor.run(&text, &mut filter);
            filter.finish();

            let edited = result.with_context(|| format!("Failed to copy-edit {source}"))?;
            sink.write_all(edited.as_bytes())
                .context("Failed to write edited text")?;
        }

        sink.flush().context("Failed to write edited text")?;
        Ok(())
    }
}

/// Edits chunks by piping each one through an external program
pub struct FilterEditor {
    program: String,
    args: Vec<String>,
    progress: ProgressReporter,
}

impl FilterEditor {
    /// Create an editor running `program` with `args`
    pub fn new(program: &str, args: &[String], quiet: bool) -> Self {
        Self {
            program: program.to_string(),
            args: args.to_vec(),
            progress: ProgressReporter::new(quiet),
        }
    }

    /// Close the progress display
    pub fn finish(&mut self) {
        self.progress.finish();
    }

    fn run_filter(&self, request: &EditRequest<'_>) -> Result<String, CliError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env(STRENGTH_VAR, request.strength.as_str())
            .env(CHUNK_VAR, format!("{}/{}", request.index, request.total))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CliError::FilterFailed(format!("could not start {}: {e}", self.program)))?;

        // Fed from its own thread so a filter that echoes while reading cannot
        // fill both pipes. A filter that exits early closes its stdin; its exit
        // status tells the real story.
        let stdin = child.stdin.take();
        let (output, written) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(request.text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (output, written)
        });
        let output =
            output.map_err(|e| CliError::FilterFailed(format!("{}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CliError::FilterFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        written.map_err(|e| {
            CliError::FilterFailed(format!("could not send chunk to {}: {e}", self.program))
        })?;

        let edited = String::from_utf8(output.stdout).map_err(|e| {
            CliError::FilterFailed(format!("{} printed invalid UTF-8: {e}", self.program))
        })?;
        Ok(edited.trim_end().to_string())
    }
}

impl ChunkEditor for FilterEditor {
    fn edit(&mut self, request: &EditRequest<'_>) -> Result<String, EditorError> {
        if request.index == 1 {
            self.progress.init_chunks(request.total as u64);
        }

        let edited = self.run_filter(request)?;
        self.progress
            .chunk_completed(&format!("{}/{}", request.index, request.total));
        Ok(edited)
    }
}
