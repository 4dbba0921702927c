//! Configuration types for segmentation runs

use crate::error::{Result, SegmentError};

/// Chars reserved for the numbering suffix `"\n###/###"`.
///
/// Three digits for the position and three for the total: runs of 1000 or
/// more chunks render a longer suffix than was reserved and can overrun.
pub const NUMBERING_RESERVE: usize = 8;

/// Default nominal chunk length, one post
pub const DEFAULT_MAX_LEN: usize = 280;

/// Settings for a single assembly run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentConfig {
    /// Nominal maximum length of a rendered chunk, in chars
    pub max_len: usize,
    /// Text appended to every chunk; a literal `\n` escape becomes a newline
    pub appendix: String,
    /// Whether chunks carry the `"\n{index}/{total}"` suffix
    pub numbered: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            appendix: String::new(),
            numbered: true,
        }
    }
}

impl SegmentConfig {
    /// Create a numbered configuration with no appendix
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            ..Self::default()
        }
    }

    /// Set the appendix
    pub fn with_appendix(mut self, appendix: impl Into<String>) -> Self {
        self.appendix = appendix.into();
        self
    }

    /// Turn the numbering suffix on or off
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Content budget per segment after the reservations.
    ///
    /// The appendix is measured before escape normalization and the numbering
    /// reserve is subtracted whether or not numbering is on.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::Configuration`] when nothing would be left
    /// for content.
    pub fn budget(&self) -> Result<usize> {
        let appendix_len = self.appendix.chars().count();
        self.max_len
            .checked_sub(appendix_len)
            .and_then(|rest| rest.checked_sub(NUMBERING_RESERVE))
            .filter(|&budget| budget > 0)
            .ok_or(SegmentError::Configuration {
                max_len: self.max_len,
                appendix_len,
                reserved: NUMBERING_RESERVE,
            })
    }
}
