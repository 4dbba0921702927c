//! Bounded-length segmentation for manuscripts
//!
//! This crate splits prose into chunks no longer than a given budget while
//! keeping paragraphs, sentences and phrases together where it can. The same
//! engine produces numbered post threads and edit-sized chunks.
//!
//! # Pipeline
//!
//! - [`metadata`]: drops a leading metadata block closed by a `...` line
//! - [`splitter`]: cuts one piece at the delimiter nearest its middle, repeatedly
//! - [`segmenter`]: runs the splitter over paragraph, sentence and phrase tiers
//! - [`assembler`]: numbers the final segments and appends caller text
//!
//! # Example
//!
//! ```rust
//! use mdfic_core::assemble;
//!
//! let chunks = assemble("Hello world.", 1000, "").unwrap();
//! assert_eq!(chunks.len(), 1);
//! assert!(chunks[0].text.ends_with("1/1"));
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod config;
pub mod copyedit;
pub mod error;
pub mod metadata;
pub mod segmenter;
pub mod splitter;
pub mod stats;
pub mod tier;

// Re-export key types
pub use assembler::{assemble, normalize_appendix, AnnotatedChunk, SequenceAssembler};
pub use config::{SegmentConfig, DEFAULT_MAX_LEN, NUMBERING_RESERVE};
pub use copyedit::{ChunkEditor, CopyEditor, EditRequest, EditStrength, EditorError};
pub use error::{Result, SegmentError};
pub use metadata::{reattach_metadata, split_metadata, strip_metadata, METADATA_MARKER};
pub use segmenter::{segment, TieredSegmenter};
pub use splitter::{split, BoundarySplitter};
pub use tier::Tier;
