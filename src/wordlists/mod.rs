//! Word lists
//!
//! Provides the embedded default list compiled into the binary plus file
//! loading for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LEN;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_is_nonempty() {
        assert!(!WORDS.is_empty());
    }

    #[test]
    fn embedded_words_are_valid() {
        // All words should be five letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), WORD_LEN, "Word '{word}' is not {WORD_LEN} letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }
}
