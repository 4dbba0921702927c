//! Word counts and reading times

/// Default reading speed in words per minute
pub const DEFAULT_WPM: usize = 260;

/// Number of whitespace-separated words in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reading time in whole minutes, rounded half to even
pub fn reading_minutes(words: usize, wpm: usize) -> u64 {
    if wpm == 0 {
        return 0;
    }
    (words as f64 / wpm as f64).round_ties_even() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
        assert_eq!(word_count("it's a well-known fact"), 4);
    }

    #[test]
    fn test_reading_minutes() {
        assert_eq!(reading_minutes(0, 260), 0);
        assert_eq!(reading_minutes(2600, 260), 10);
        assert_eq!(reading_minutes(100, 260), 0);
        assert_eq!(reading_minutes(200, 260), 1);
    }

    #[test]
    fn test_reading_minutes_rounds_half_to_even() {
        assert_eq!(reading_minutes(130, 260), 0);
        assert_eq!(reading_minutes(390, 260), 2);
    }

    #[test]
    fn test_zero_wpm() {
        assert_eq!(reading_minutes(1000, 0), 0);
    }
}
