//! Chunked editing of whole manuscripts
//!
//! Text-processing services accept a limited amount of text per call. The
//! manuscript body is cut into bounded chunks, each chunk is handed to a
//! [`ChunkEditor`], and the edited chunks are joined back together behind the
//! original metadata block.

use crate::{
    assembler::SequenceAssembler,
    config::SegmentConfig,
    error::{Result, SegmentError},
    metadata::{reattach_metadata, split_metadata},
};
use std::{fmt, str::FromStr};

/// Default word allowance per chunk
pub const DEFAULT_MAX_WORDS: usize = 2000;

/// Chars budgeted per word when sizing chunks
pub const CHARS_PER_WORD: usize = 6;

/// Error type editors report
pub type EditorError = Box<dyn std::error::Error + Send + Sync>;

/// How heavily the editor should rework the text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditStrength {
    /// Fix errors only
    #[default]
    Light,
    /// Fix errors and tighten phrasing
    Medium,
    /// Rework freely
    Heavy,
}

impl EditStrength {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            EditStrength::Light => "light",
            EditStrength::Medium => "medium",
            EditStrength::Heavy => "heavy",
        }
    }
}

impl fmt::Display for EditStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditStrength {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(EditStrength::Light),
            "medium" => Ok(EditStrength::Medium),
            "heavy" => Ok(EditStrength::Heavy),
            other => Err(format!("unknown edit strength: {other}")),
        }
    }
}

/// One chunk handed to an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRequest<'a> {
    /// Requested strength
    pub strength: EditStrength,
    /// 1-based position of the chunk
    pub index: usize,
    /// Number of chunks in the run
    pub total: usize,
    /// Trimmed chunk text
    pub text: &'a str,
}

/// Something that edits one chunk at a time
pub trait ChunkEditor {
    /// Return the edited text for `request`
    fn edit(&mut self, request: &EditRequest<'_>) -> std::result::Result<String, EditorError>;
}

impl<F> ChunkEditor for F
where
    F: FnMut(&EditRequest<'_>) -> std::result::Result<String, EditorError>,
{
    fn edit(&mut self, request: &EditRequest<'_>) -> std::result::Result<String, EditorError> {
        self(request)
    }
}

/// Splits a manuscript for editing and reassembles the result
#[derive(Debug, Clone)]
pub struct CopyEditor {
    max_words: usize,
    strength: EditStrength,
}

impl Default for CopyEditor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS, EditStrength::default())
    }
}

impl CopyEditor {
    /// Create a copy editor
    pub fn new(max_words: usize, strength: EditStrength) -> Self {
        Self {
            max_words,
            strength,
        }
    }

    /// Nominal chunk length in chars
    pub fn max_len(&self) -> usize {
        self.max_words.saturating_mul(CHARS_PER_WORD)
    }

    /// Requested strength
    pub fn strength(&self) -> EditStrength {
        self.strength
    }

    /// Cut the body of `text` into un-numbered, trimmed chunks
    ///
    /// # Errors
    ///
    /// Fails on a repeated metadata marker or a word allowance too small to
    /// hold any text.
    pub fn chunks(&self, text: &str) -> Result<Vec<String>> {
        let (_, body) = split_metadata(text)?;
        self.chunk_body(body)
    }

    fn chunk_body(&self, body: &str) -> Result<Vec<String>> {
        let config = SegmentConfig::new(self.max_len()).numbered(false);
        Ok(SequenceAssembler::new(config)?
            .assemble(body)?
            .into_iter()
            .map(|chunk| chunk.text.trim().to_string())
            .collect())
    }

    /// Edit `text` chunk by chunk and reassemble it
    ///
    /// # Errors
    ///
    /// Fails on a repeated metadata marker, a word allowance too small to hold
    /// any text, or the first chunk the editor rejects.
    pub fn run<E: ChunkEditor + ?Sized>(&self, text: &str, editor: &mut E) -> Result<String> {
        let (head, body) = split_metadata(text)?;
        let chunks = self.chunk_body(body)?;
        let total = chunks.len();

        let mut edited = Vec::with_capacity(total);
        for (i, chunk) in chunks.iter().enumerate() {
            let index = i + 1;
            log::info!("Sending chunk {index} of {total}.");
            let request = EditRequest {
                strength: self.strength,
                index,
                total,
                text: chunk,
            };
            let result = editor
                .edit(&request)
                .map_err(|source| SegmentError::EditFailed {
                    index,
                    total,
                    source,
                })?;
            edited.push(result);
        }

        Ok(reattach_metadata(head, &edited.join("\n\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(request: &EditRequest<'_>) -> std::result::Result<String, EditorError> {
        Ok(request.text.to_uppercase())
    }

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(usize, usize, EditStrength)>,
    }

    impl ChunkEditor for Recorder {
        fn edit(&mut self, request: &EditRequest<'_>) -> std::result::Result<String, EditorError> {
            self.seen.push((request.index, request.total, request.strength));
            Ok(request.text.to_string())
        }
    }

    struct FailOn(usize);

    impl ChunkEditor for FailOn {
        fn edit(&mut self, request: &EditRequest<'_>) -> std::result::Result<String, EditorError> {
            if request.index == self.0 {
                Err("service unavailable".into())
            } else {
                Ok(request.text.to_string())
            }
        }
    }

    #[test]
    fn test_strength_parsing() {
        assert_eq!("light".parse::<EditStrength>(), Ok(EditStrength::Light));
        assert_eq!("HEAVY".parse::<EditStrength>(), Ok(EditStrength::Heavy));
        assert!("brutal".parse::<EditStrength>().is_err());
        assert_eq!(EditStrength::Medium.to_string(), "medium");
        assert_eq!(EditStrength::default(), EditStrength::Light);
    }

    #[test]
    fn test_max_len_from_words() {
        assert_eq!(CopyEditor::default().max_len(), 12_000);
        assert_eq!(CopyEditor::new(10, EditStrength::Heavy).max_len(), 60);
    }

    #[test]
    fn test_single_chunk_roundtrip_with_metadata() {
        let text = "---\ntitle: Rain\n...\n\nIt rained.\n";
        let out = CopyEditor::default().run(text, &mut upper).unwrap();
        assert_eq!(out, "---\ntitle: Rain\n...\n\nIT RAINED.\n");
    }

    #[test]
    fn test_without_metadata() {
        let out = CopyEditor::default().run("quiet words", &mut upper).unwrap();
        assert_eq!(out, "QUIET WORDS\n");
    }

    #[test]
    fn test_chunks_are_unnumbered_and_rejoined_with_blank_line() {
        // 10 words -> 60 chars nominal, 52 of content
        let editor = CopyEditor::new(10, EditStrength::Light);
        let text = "The first paragraph is about forty chars.\nThe second paragraph is similar in length.";
        let chunks = editor.chunks(text).unwrap();
        assert_eq!(
            chunks,
            vec![
                "The first paragraph is about forty chars.",
                "The second paragraph is similar in length."
            ]
        );

        let mut recorder = Recorder::default();
        let out = editor.run(text, &mut recorder).unwrap();
        assert_eq!(
            out,
            "The first paragraph is about forty chars.\n\nThe second paragraph is similar in length.\n"
        );
        assert_eq!(
            recorder.seen,
            vec![(1, 2, EditStrength::Light), (2, 2, EditStrength::Light)]
        );
    }

    #[test]
    fn test_editor_failure_reports_position() {
        let editor = CopyEditor::new(10, EditStrength::Light);
        let text = "The first paragraph is about forty chars.\nThe second paragraph is similar in length.";
        match editor.run(text, &mut FailOn(2)) {
            Err(SegmentError::EditFailed { index, total, .. }) => {
                assert_eq!((index, total), (2, 2));
            }
            other => panic!("expected EditFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_too_few_words_is_a_configuration_error() {
        let editor = CopyEditor::new(1, EditStrength::Light);
        assert!(matches!(
            editor.run("text", &mut upper),
            Err(SegmentError::Configuration { .. })
        ));
    }
}
