//! Word-count and reading-time estimates for draft metadata.

/// Average adult reading speed used for the estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Count whitespace-separated words in a draft body.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, never less than one.
#[must_use]
pub fn reading_time_minutes(text: &str) -> usize {
    word_count(text).div_ceil(WORDS_PER_MINUTE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_splits_on_whitespace() {
        assert_eq!(word_count("one two  three\nfour\tfive"), 5);
    }

    #[test]
    fn test_word_count_empty() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t"), 0);
    }

    #[test]
    fn test_reading_time_has_one_minute_floor() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("a few words"), 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let exactly_200 = "word ".repeat(200);
        assert_eq!(reading_time_minutes(&exactly_200), 1);
        let just_over = "word ".repeat(201);
        assert_eq!(reading_time_minutes(&just_over), 2);
    }
}
