//! Three-pass segmentation: paragraphs, then sentences, then phrases

use crate::splitter::BoundarySplitter;
use crate::tier::Tier;

/// Runs the boundary splitter once per tier, coarsest first.
///
/// Each pass splits every piece of the previous pass independently and
/// flattens the results in order. A finer tier can shorten a piece a coarser
/// tier gave up on; a piece the phrase tier gives up on stays over-length.
#[derive(Debug, Clone, Copy)]
pub struct TieredSegmenter {
    budget: usize,
}

impl TieredSegmenter {
    /// Create a segmenter with a per-segment budget in chars
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }

    /// The per-segment budget in chars
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Segment `text` into bounded pieces
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut pieces = vec![text.to_string()];

        for tier in Tier::ALL {
            let splitter = BoundarySplitter::new(tier, self.budget);
            pieces = pieces
                .iter()
                .flat_map(|piece| splitter.split(piece))
                .collect();
            log::debug!("{} pass produced {} pieces", tier.name(), pieces.len());
        }

        pieces
    }
}

/// Segment `text` with the given budget
pub fn segment(text: &str, budget: usize) -> Vec<String> {
    TieredSegmenter::new(budget).segment(text)
}
