//! Constraint filtering
//!
//! Shrinks a candidate pool against accumulated feedback. A word survives
//! only if it satisfies every feedback relation; the four predicates are
//! independent and their conjunction does not depend on evaluation order.
//! Filtering preserves the relative order of surviving words.

use crate::core::{Feedback, Word};

/// Filter a pool against feedback
///
/// A word survives iff:
/// 1. it has every in-place letter at its required position;
/// 2. it contains every in-word letter (in-place values plus every
///    out-of-place letter) at least once;
/// 3. for every letter marked absent, its occurrence count stays within the
///    cap given by the in-word letters ([`Feedback::letter_cap`]);
/// 4. it has none of the out-of-place letters at their excluded positions.
///
/// The output is a subsequence of the input: surviving words keep their
/// relative order. Filtering twice with the same feedback returns the same
/// pool.
///
/// # Examples
/// ```
/// use guessmate::core::{Feedback, Word};
/// use guessmate::solver::filter_pool;
///
/// let pool = vec![Word::new("apple").unwrap(), Word::new("mango").unwrap()];
/// let mut feedback = Feedback::new();
/// feedback.record_in_place(4, b'e').unwrap();
///
/// let survivors = filter_pool(&pool, &feedback);
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].text(), "apple");
/// ```
#[must_use]
pub fn filter_pool(pool: &[Word], feedback: &Feedback) -> Vec<Word> {
    let in_word = feedback.in_word_letters();

    pool.iter()
        .filter(|word| satisfies(word, feedback, &in_word))
        .cloned()
        .collect()
}

/// Evaluate the conjunction of the four feedback predicates for one word
fn satisfies(word: &Word, feedback: &Feedback, in_word: &[u8]) -> bool {
    // 1. Exact-position matches
    if feedback
        .in_place()
        .any(|(index, letter)| word.char_at(index) != letter)
    {
        return false;
    }

    // 2. Every in-word letter is present somewhere
    if in_word.iter().any(|&letter| !word.has_letter(letter)) {
        return false;
    }

    // 3. Absent letters stay within their confirmed-present cap
    if feedback.not_in_word().any(|(letter, _)| {
        let cap = in_word.iter().filter(|&&c| c == letter).count();
        word.count_of(letter) > cap
    }) {
        return false;
    }

    // 4. Out-of-place letters are not at their excluded positions
    if feedback
        .out_of_place()
        .any(|(index, letters)| letters.contains(&word.char_at(index)))
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(pool: &[Word]) -> Vec<&str> {
        pool.iter().map(Word::text).collect()
    }

    #[test]
    fn empty_feedback_keeps_everything() {
        let words = pool(&["crane", "slate", "trace"]);
        let survivors = filter_pool(&words, &Feedback::new());
        assert_eq!(survivors, words);
    }

    #[test]
    fn in_place_filters_by_position() {
        // Both survivors end in 'e'
        let words = pool(&["apple", "mango", "peach", "chard", "grape"]);
        let mut feedback = Feedback::new();
        feedback.record_in_place(4, b'e').unwrap();

        let survivors = filter_pool(&words, &feedback);
        assert_eq!(texts(&survivors), vec!["apple", "grape"]);
    }

    #[test]
    fn absent_letter_with_no_presence_removes_nothing_extra() {
        // 'm' marked absent with no in-word 'm': cap 0, but neither
        // survivor contains an 'm' so the pair is unchanged
        let words = pool(&["apple", "mango", "peach", "chard", "grape"]);
        let mut feedback = Feedback::new();
        feedback.record_in_place(4, b'e').unwrap();
        feedback.record_absent(b'm');

        let survivors = filter_pool(&words, &feedback);
        assert_eq!(texts(&survivors), vec!["apple", "grape"]);
    }

    #[test]
    fn absent_letter_cap_zero_excludes() {
        let words = pool(&["crane", "slate", "bloom"]);
        let mut feedback = Feedback::new();
        feedback.record_absent(b'a');

        let survivors = filter_pool(&words, &feedback);
        assert_eq!(texts(&survivors), vec!["bloom"]);
    }

    #[test]
    fn out_of_place_requires_presence_elsewhere() {
        // 't' is in the word but not at position 0: "train" and "trace"
        // have it at position 0, "crane" has no 't' at all
        let words = pool(&["train", "crane", "trace"]);
        let mut feedback = Feedback::new();
        feedback.record_out_of_place(0, b't').unwrap();

        let survivors = filter_pool(&words, &feedback);
        assert!(survivors.is_empty());
    }

    #[test]
    fn out_of_place_survivor() {
        let words = pool(&["train", "slate", "crane"]);
        let mut feedback = Feedback::new();
        feedback.record_out_of_place(0, b't').unwrap();

        // "slate" contains 't' away from position 0
        let survivors = filter_pool(&words, &feedback);
        assert_eq!(texts(&survivors), vec!["slate"]);
    }

    #[test]
    fn occurrence_threshold_allows_confirmed_count() {
        // One 'e' confirmed in-word (misplaced at position 0), one 'e'
        // marked absent: words with a single 'e' elsewhere survive, words
        // with two 'e's exceed the cap
        let words = pool(&["sheen", "opera", "early"]);
        let mut feedback = Feedback::new();
        feedback.record_out_of_place(0, b'e').unwrap();
        feedback.record_absent(b'e');

        let survivors = filter_pool(&words, &feedback);
        // "sheen" has two e's (2 > cap 1); "early" has its 'e' at the
        // excluded position; "opera" has exactly one 'e' away from it
        assert_eq!(texts(&survivors), vec!["opera"]);
    }

    #[test]
    fn order_is_preserved() {
        let words = pool(&["slate", "crane", "trace", "grape", "stare"]);
        let mut feedback = Feedback::new();
        feedback.record_in_place(4, b'e').unwrap();

        let survivors = filter_pool(&words, &feedback);

        // Survivors appear in their original relative order
        let mut last_index = 0;
        for word in &survivors {
            let index = words.iter().position(|w| w == word).unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
        assert_eq!(texts(&survivors), vec!["slate", "crane", "trace", "grape", "stare"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let words = pool(&["train", "slate", "crane", "stare"]);
        let mut feedback = Feedback::new();
        feedback.record_out_of_place(0, b't').unwrap();
        feedback.record_absent(b'n');

        let once = filter_pool(&words, &feedback);
        let twice = filter_pool(&once, &feedback);
        assert_eq!(once, twice);
    }

    #[test]
    fn more_feedback_never_grows_the_pool() {
        let words = pool(&["crane", "slate", "trace", "grape", "stare", "shore"]);

        let mut feedback = Feedback::new();
        feedback.record_in_place(4, b'e').unwrap();
        let first = filter_pool(&words, &feedback);

        feedback.record_out_of_place(1, b'r').unwrap();
        let second = filter_pool(&words, &feedback);

        feedback.record_absent(b'a');
        let third = filter_pool(&words, &feedback);

        assert!(second.len() <= first.len());
        assert!(third.len() <= second.len());

        // Each stricter result is a subset of the looser one
        assert!(second.iter().all(|w| first.contains(w)));
        assert!(third.iter().all(|w| second.contains(w)));
    }

    #[test]
    fn conjunction_of_all_relations() {
        let words = pool(&["shore", "stare", "smote", "snore"]);
        let mut feedback = Feedback::new();
        feedback.record_in_place(0, b's').unwrap();
        feedback.record_in_place(4, b'e').unwrap();
        feedback.record_out_of_place(1, b't').unwrap();
        feedback.record_absent(b'a');

        // Needs: s....e shape, 't' somewhere but not position 1, no 'a'
        let survivors = filter_pool(&words, &feedback);
        assert_eq!(texts(&survivors), vec!["smote"]);
    }
}
