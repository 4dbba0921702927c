//! Midpoint boundary splitting
//!
//! A piece longer than the limit is cut at the delimiter closest to its
//! middle, and both halves are split again until every piece fits or no
//! usable delimiter is left. Pieces with no usable delimiter are returned
//! as they are, even when they exceed the limit.

use crate::tier::Tier;

/// Splits text on a single delimiter tier
#[derive(Debug, Clone, Copy)]
pub struct BoundarySplitter {
    tier: Tier,
    max_len: usize,
}

impl BoundarySplitter {
    /// Create a splitter for `tier` with a limit of `max_len` chars
    pub fn new(tier: Tier, max_len: usize) -> Self {
        Self { tier, max_len }
    }

    /// The delimiter tier
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// The length limit in chars
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Split `text` into ordered pieces.
    ///
    /// Halves are trimmed after every cut. Work is kept on an explicit stack
    /// (right half pushed first) so the left half is always resolved before
    /// the right one and native stack depth stays constant.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut pending = vec![text];

        while let Some(piece) = pending.pop() {
            let len = piece.chars().count();
            if len <= self.max_len {
                pieces.push(piece.to_string());
                continue;
            }

            match self.midpoint_cut(piece, len) {
                Some(at) => {
                    let (left, right) = piece.split_at(at);
                    pending.push(right.trim());
                    pending.push(left.trim());
                }
                None => {
                    log::debug!(
                        "no usable {} boundary in {len}-char piece (limit {}), keeping it whole",
                        self.tier.name(),
                        self.max_len
                    );
                    pieces.push(piece.to_string());
                }
            }
        }

        pieces
    }

    /// Byte offset just past the delimiter closest to the middle of `text`.
    ///
    /// The distance `|len/2 - pos|` is compared doubled to stay in integers.
    /// Only a strictly smaller distance replaces the running best, so the
    /// leftmost of two equidistant delimiters wins. A delimiter on the last
    /// char is never a candidate.
    fn midpoint_cut(&self, text: &str, len: usize) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;

        for (pos, byte_end) in self.tier.boundaries(text) {
            if pos + 1 >= len {
                continue;
            }
            let distance = len.abs_diff(2 * pos);
            if best.map_or(true, |(best_distance, _)| distance < best_distance) {
                best = Some((distance, byte_end));
            }
        }

        best.map(|(_, byte_end)| byte_end)
    }
}

/// Split `text` on `tier` so each piece is at most `max_len` chars where possible
pub fn split(text: &str, tier: Tier, max_len: usize) -> Vec<String> {
    BoundarySplitter::new(tier, max_len).split(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(split("Hello world.", Tier::Sentence, 100), vec!["Hello world."]);
    }

    #[test]
    fn test_text_at_limit_untouched() {
        assert_eq!(split("abc, def", Tier::Phrase, 8), vec!["abc, def"]);
    }

    #[test]
    fn test_splits_at_closest_to_middle() {
        // len 20, commas at 4 and 11; |10-4|=6 vs |10-11|=1
        let text = "aaaa,bbbbbb,cccccccc";
        assert_eq!(text.chars().count(), 20);
        assert_eq!(
            split(text, Tier::Phrase, 15),
            vec!["aaaa,bbbbbb,", "cccccccc"]
        );
    }

    #[test]
    fn test_equidistant_boundaries_prefer_leftmost() {
        // len 20, commas at 8 and 12, both 2 away from 10
        let text = "aaaaaaaa,bbb,ccccccc";
        assert_eq!(text.chars().count(), 20);
        assert_eq!(
            split(text, Tier::Phrase, 15),
            vec!["aaaaaaaa,", "bbb,ccccccc"]
        );
    }

    #[test]
    fn test_gives_up_without_boundary() {
        let text = "x".repeat(500);
        assert_eq!(split(&text, Tier::Sentence, 50), vec![text]);
    }

    #[test]
    fn test_gives_up_when_only_boundary_is_last_char() {
        let text = "This sentence is far too long for the limit.";
        assert_eq!(split(text, Tier::Sentence, 10), vec![text]);
    }

    #[test]
    fn test_last_char_boundary_never_chosen() {
        // len 6, boundaries at 0 and 5; the final '.' would be closer
        // to the middle but cannot be cut
        assert_eq!(split(".abcd.", Tier::Sentence, 3), vec![".", "abcd."]);
    }

    #[test]
    fn test_halves_are_trimmed() {
        let pieces = split("First part here.  Second part here.", Tier::Sentence, 20);
        assert_eq!(pieces, vec!["First part here.", "Second part here."]);
    }

    #[test]
    fn test_recursive_split_keeps_order() {
        let text = "One. Two. Three. Four. Five. Six. Seven. Eight.";
        let pieces = split(text, Tier::Sentence, 6);
        assert_eq!(
            pieces,
            vec!["One.", "Two.", "Three.", "Four.", "Five.", "Six.", "Seven.", "Eight."]
        );
    }

    #[test]
    fn test_lengths_are_counted_in_chars() {
        // 9 chars, 17 bytes
        let text = "ééééé,ééé";
        assert_eq!(text.chars().count(), 9);
        assert_eq!(split(text, Tier::Phrase, 9), vec![text]);
        assert_eq!(split(text, Tier::Phrase, 8), vec!["ééééé,", "ééé"]);
    }

    #[test]
    fn test_large_input_splits_completely() {
        let text = format!("{}{}", ",".repeat(20_000), "x".repeat(10));
        let pieces = split(&text, Tier::Phrase, 1);
        assert_eq!(pieces.len(), 20_001);
        assert_eq!(pieces.last().map(String::as_str), Some("xxxxxxxxxx"));
    }

    #[test]
    fn test_splitter_accessors() {
        let splitter = BoundarySplitter::new(Tier::Paragraph, 42);
        assert_eq!(splitter.tier(), Tier::Paragraph);
        assert_eq!(splitter.max_len(), 42);
    }
}
