//! Sequence assembly
//!
//! Turns segmented text into numbered chunks. The total is only known once
//! every tier has run, so chunks are produced as a finished collection and
//! never streamed.

use crate::{
    config::SegmentConfig,
    error::Result,
    metadata::strip_metadata,
    segmenter::TieredSegmenter,
};

/// A rendered chunk and its length in chars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedChunk {
    /// Length of `text` in chars
    pub length: usize,
    /// Segment content followed by the numbering suffix and appendix
    pub text: String,
}

impl AnnotatedChunk {
    fn new(text: String) -> Self {
        Self {
            length: text.chars().count(),
            text,
        }
    }
}

/// Assembles numbered chunks from raw text
#[derive(Debug, Clone)]
pub struct SequenceAssembler {
    config: SegmentConfig,
    budget: usize,
    appendix: String,
}

impl SequenceAssembler {
    /// Create an assembler, validating the budget up front
    ///
    /// # Errors
    ///
    /// Returns [`crate::SegmentError::Configuration`] when the configuration
    /// leaves no room for content.
    pub fn new(config: SegmentConfig) -> Result<Self> {
        let budget = config.budget()?;
        let appendix = normalize_appendix(&config.appendix);
        Ok(Self {
            config,
            budget,
            appendix,
        })
    }

    /// The configuration this assembler was built from
    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Content budget per segment
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Strip metadata, segment, and render every chunk
    ///
    /// # Errors
    ///
    /// Returns [`crate::SegmentError::InputFormat`] when the metadata marker
    /// occurs more than once.
    pub fn assemble(&self, text: &str) -> Result<Vec<AnnotatedChunk>> {
        let body = strip_metadata(text)?;
        let segments = TieredSegmenter::new(self.budget).segment(body);
        let total = segments.len();

        log::debug!("assembled {total} chunks with a budget of {}", self.budget);

        Ok(segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| AnnotatedChunk::new(self.render(&segment, i + 1, total)))
            .collect())
    }

    fn render(&self, segment: &str, index: usize, total: usize) -> String {
        if self.config.numbered {
            format!("{segment}\n{index}/{total}{}", self.appendix)
        } else {
            format!("{segment}{}", self.appendix)
        }
    }
}

/// Replace literal `\n` escapes with newlines
pub fn normalize_appendix(appendix: &str) -> String {
    appendix.replace("\\n", "\n")
}

/// Assemble numbered chunks of at most `max_len` chars, each ending with `appendix`
///
/// # Errors
///
/// Returns [`crate::SegmentError::Configuration`] for a budget that leaves no
/// room for content and [`crate::SegmentError::InputFormat`] for a repeated
/// metadata marker.
pub fn assemble(text: &str, max_len: usize, appendix: &str) -> Result<Vec<AnnotatedChunk>> {
    SequenceAssembler::new(SegmentConfig::new(max_len).with_appendix(appendix))?.assemble(text)
}
