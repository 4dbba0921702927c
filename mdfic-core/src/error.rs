//! Error types for segmentation and chunked editing

use thiserror::Error;

/// Errors raised before or around segmentation.
///
/// Over-length segments are not errors: when no tier can split a piece it is
/// returned as is and callers are expected to cope with the overrun.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// The metadata marker appears more than once
    #[error("metadata marker found {occurrences} times; expected at most one")]
    InputFormat {
        /// Number of marker occurrences in the input
        occurrences: usize,
    },

    /// The nominal length leaves no room for content
    #[error(
        "max length {max_len} leaves no room for content \
         (appendix uses {appendix_len}, numbering reserves {reserved})"
    )]
    Configuration {
        /// The nominal maximum length requested by the caller
        max_len: usize,
        /// Length of the raw appendix in chars
        appendix_len: usize,
        /// Chars reserved for the numbering suffix
        reserved: usize,
    },

    /// A chunk editor failed on one chunk
    #[error("editing chunk {index} of {total} failed: {source}")]
    EditFailed {
        /// 1-based position of the chunk
        index: usize,
        /// Number of chunks in the run
        total: usize,
        /// The editor's own error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;
