//! Property tests for splitting and assembly

use mdfic_core::*;
use proptest::prelude::*;

fn squeeze(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn prose() -> impl Strategy<Value = String> {
    "[a-zé ,.!?\n]{0,400}"
}

fn tier() -> impl Strategy<Value = Tier> {
    prop_oneof![
        Just(Tier::Paragraph),
        Just(Tier::Sentence),
        Just(Tier::Phrase)
    ]
}

proptest! {
    #[test]
    fn split_preserves_content(text in prose(), tier in tier(), max_len in 1usize..80) {
        let pieces = split(&text, tier, max_len);
        prop_assert_eq!(squeeze(&pieces.concat()), squeeze(&text));
    }

    #[test]
    fn split_pieces_fit_unless_unsplittable(text in prose(), tier in tier(), max_len in 1usize..80) {
        for piece in split(&text, tier, max_len) {
            let len = piece.chars().count();
            if len > max_len {
                let cuttable = tier.boundaries(&piece).iter().any(|&(pos, _)| pos + 1 < len);
                prop_assert!(!cuttable, "{:?} could still be cut", piece);
            }
        }
    }

    #[test]
    fn segment_preserves_content(text in prose(), budget in 1usize..80) {
        let segments = segment(&text, budget);
        prop_assert_eq!(squeeze(&segments.concat()), squeeze(&text));
    }

    #[test]
    fn chunks_are_numbered_against_the_final_total(text in prose(), max_len in 9usize..120) {
        let chunks = assemble(&text, max_len, "").unwrap();
        let total = chunks.len();
        prop_assert!(total >= 1);
        for (i, chunk) in chunks.iter().enumerate() {
            let suffix = format!("\n{}/{}", i + 1, total);
            prop_assert!(chunk.text.ends_with(&suffix));
            prop_assert_eq!(chunk.length, chunk.text.chars().count());
        }
    }

    #[test]
    fn assembly_is_deterministic(text in prose(), max_len in 9usize..120) {
        prop_assert_eq!(
            assemble(&text, max_len, "\\n#tag").unwrap(),
            assemble(&text, max_len, "\\n#tag").unwrap()
        );
    }
}

#[test]
fn midpoint_choice_prefers_closest_then_leftmost() {
    // len 21, commas at 5 and 17: |10.5 - 5| = 5.5 beats |10.5 - 17| = 6.5
    let text = "aaaaa,bbbbbbbbbbb,ccc";
    assert_eq!(text.chars().count(), 21);
    assert_eq!(split(text, Tier::Phrase, 18), vec!["aaaaa,", "bbbbbbbbbbb,ccc"]);

    // len 20, commas at 7 and 13 are both 3 away from 10
    let text = "aaaaaaa,bbbbb,cccccc";
    assert_eq!(text.chars().count(), 20);
    assert_eq!(split(text, Tier::Phrase, 15), vec!["aaaaaaa,", "bbbbb,cccccc"]);
}
