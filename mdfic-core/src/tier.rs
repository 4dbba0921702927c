//! Delimiter tiers used by the splitter
//!
//! Each tier matches a single boundary character. Tiers are applied coarsest
//! first: paragraphs, then sentences, then phrases.

use regex::Regex;
use std::sync::OnceLock;

static PARAGRAPH_DELIM: OnceLock<Regex> = OnceLock::new();
static SENTENCE_DELIM: OnceLock<Regex> = OnceLock::new();
static PHRASE_DELIM: OnceLock<Regex> = OnceLock::new();

/// A delimiter class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Newline
    Paragraph,
    /// One of `.`, `?`, `!`
    Sentence,
    /// Comma
    Phrase,
}

impl Tier {
    /// All tiers in application order
    pub const ALL: [Tier; 3] = [Tier::Paragraph, Tier::Sentence, Tier::Phrase];

    /// Pattern source for this tier
    pub fn pattern_source(self) -> &'static str {
        match self {
            Tier::Paragraph => "\n",
            Tier::Sentence => "[.?!]",
            Tier::Phrase => "[,]",
        }
    }

    /// Compiled pattern, built once per process
    pub fn pattern(self) -> &'static Regex {
        let cell = match self {
            Tier::Paragraph => &PARAGRAPH_DELIM,
            Tier::Sentence => &SENTENCE_DELIM,
            Tier::Phrase => &PHRASE_DELIM,
        };
        cell.get_or_init(|| compile(self.pattern_source()))
    }

    /// Locate every delimiter in `text`.
    ///
    /// Returns `(char_index, byte_end)` for each match, where `char_index` is
    /// the position of the delimiter character and `byte_end` the byte offset
    /// just past it.
    pub fn boundaries(self, text: &str) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        let mut chars_before = 0;
        let mut scanned = 0;

        for m in self.pattern().find_iter(text) {
            chars_before += text[scanned..m.start()].chars().count();
            found.push((chars_before, m.end()));
            chars_before += m.as_str().chars().count();
            scanned = m.end();
        }

        found
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Tier::Paragraph => "paragraph",
            Tier::Sentence => "sentence",
            Tier::Phrase => "phrase",
        }
    }
}

// Sources are fixed literals.
fn compile(source: &str) -> Regex {
    Regex::new(source).expect("tier delimiter patterns are valid regexes")
}
