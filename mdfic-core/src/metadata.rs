//! Leading metadata block handling
//!
//! A manuscript may start with a YAML-style block closed by a line holding
//! only `...`. The block is dropped before segmentation and kept verbatim
//! when an edited manuscript is reassembled.

use crate::error::{Result, SegmentError};

/// Line that closes the metadata block, with its surrounding newlines
pub const METADATA_MARKER: &str = "\n...\n";

/// Split `text` into the metadata head and the body.
///
/// The head is everything before the marker, returned verbatim; the body is
/// everything after it. Without a marker the whole text is the body.
///
/// # Errors
///
/// Returns [`SegmentError::InputFormat`] when the marker occurs more than once.
pub fn split_metadata(text: &str) -> Result<(Option<&str>, &str)> {
    let occurrences = text.matches(METADATA_MARKER).count();
    if occurrences > 1 {
        return Err(SegmentError::InputFormat { occurrences });
    }

    Ok(match text.split_once(METADATA_MARKER) {
        Some((head, body)) => (Some(head), body),
        None => (None, text),
    })
}

/// Drop the metadata block, if any, and return the body
///
/// # Errors
///
/// Returns [`SegmentError::InputFormat`] when the marker occurs more than once.
pub fn strip_metadata(text: &str) -> Result<&str> {
    split_metadata(text).map(|(_, body)| body)
}

/// Put a metadata head back in front of a body
pub fn reattach_metadata(head: Option<&str>, body: &str) -> String {
    match head {
        Some(head) => format!("{head}{METADATA_MARKER}\n{body}\n"),
        None => format!("{body}\n"),
    }
}
