//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} chunks {msg}";

/// Progress reporter for chunked editing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar for `total_chunks` chunks
    pub fn init_chunks(&mut self, total_chunks: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_chunks);
        match ProgressStyle::default_bar().template(TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Whether a progress bar is active
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Update progress for a completed chunk
    pub fn chunk_completed(&self, label: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Edited: {label}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message("Complete");
        }
    }
}
