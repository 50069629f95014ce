//! Guess session orchestration
//!
//! A session owns a pool snapshot and the feedback accumulated across
//! rounds. Each round it filters the pool with the current feedback, checks
//! for terminal states, and produces recommendations for the next guess.

use super::filter::filter_pool;
use super::frequency::LetterFrequencies;
use super::policy::{PolicyType, SuggestPolicy};
use super::scorer::WordScores;
use crate::core::{Feedback, LetterMark, WORD_LEN, Word};

/// Lifecycle state of a guess session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// More than one candidate remains; the session accepts feedback
    Active,
    /// Exactly one candidate remained, or the caller asserted the answer
    Solved(Word),
    /// Filtering removed every candidate: the feedback is contradictory or
    /// the answer was never in the pool
    Unsolvable,
}

impl SessionState {
    /// Check whether the session has reached a terminal state
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// The two reference recommendations for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestions<'a> {
    /// Highest normalized distinct-letter score over the current pool
    pub top_score: &'a Word,
    /// First word in pool order
    pub pool_order: &'a Word,
}

/// A single interactive guessing session
///
/// Owns its pool snapshot and feedback exclusively; nothing is shared
/// across sessions. Feedback is append-only: once recorded it persists for
/// the session's lifetime, and there is no rollback.
#[derive(Debug, Clone)]
pub struct GuessSession {
    pool: Vec<Word>,
    feedback: Feedback,
    state: SessionState,
    round: usize,
}

impl GuessSession {
    /// Start a session over a pool
    ///
    /// The pool is taken by ownership: the caller loads the word list once
    /// and hands it over; the session never reloads or caches behind the
    /// caller's back.
    #[must_use]
    pub fn new(pool: Vec<Word>) -> Self {
        Self {
            pool,
            feedback: Feedback::new(),
            state: SessionState::Active,
            round: 0,
        }
    }

    /// Current candidate pool
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Current session state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Accumulated feedback
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Number of completed round transitions
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Run one round transition
    ///
    /// Filters the pool against the accumulated feedback, then settles the
    /// state: zero survivors is [`SessionState::Unsolvable`], one survivor
    /// is [`SessionState::Solved`], otherwise the session stays active.
    /// Calling this in a terminal state is a no-op.
    pub fn advance(&mut self) -> &SessionState {
        if self.state.is_terminal() {
            return &self.state;
        }

        self.pool = filter_pool(&self.pool, &self.feedback);
        self.round += 1;

        self.state = match self.pool.len() {
            0 => SessionState::Unsolvable,
            1 => SessionState::Solved(self.pool[0].clone()),
            _ => SessionState::Active,
        };

        &self.state
    }

    /// The round's reference recommendations
    ///
    /// Returns both the highest-scoring word and the first word in pool
    /// order, or `None` if the pool is empty.
    #[must_use]
    pub fn suggestions(&self) -> Option<Suggestions<'_>> {
        let pool_order = self.pool.first()?;

        let freqs = LetterFrequencies::from_pool(&self.pool).ok()?;
        let scores = WordScores::compute(&self.pool, &freqs).ok()?;
        let top_score = &self.pool[scores.best_index()];

        Some(Suggestions {
            top_score,
            pool_order,
        })
    }

    /// Recommend a word using a caller-selected policy
    #[must_use]
    pub fn recommend(&self, policy: &PolicyType) -> Option<&Word> {
        policy.suggest(&self.pool)
    }

    /// Record a guessed word and its per-position marks
    ///
    /// Applies the round's feedback delta. A guess marked exact at every
    /// position resolves the session immediately. Recording in a terminal
    /// state is a no-op.
    pub fn record(&mut self, guess: &Word, marks: &[LetterMark; WORD_LEN]) {
        if self.state.is_terminal() {
            return;
        }

        self.feedback.record_guess(guess, marks);

        if marks.iter().all(|&mark| mark == LetterMark::Exact) {
            self.state = SessionState::Solved(guess.clone());
        }
    }

    /// Assert that the given word is the answer
    ///
    /// Terminal shortcut for when the caller knows the guess was correct.
    pub fn declare_solved(&mut self, word: Word) {
        self.state = SessionState::Solved(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn marks(line: &str) -> [LetterMark; WORD_LEN] {
        LetterMark::parse_line(line).unwrap()
    }

    #[test]
    fn new_session_is_active() {
        let session = GuessSession::new(pool(&["crane", "slate"]));

        assert_eq!(session.state(), &SessionState::Active);
        assert_eq!(session.round(), 0);
        assert!(session.feedback().is_empty());
        assert_eq!(session.pool().len(), 2);
    }

    #[test]
    fn advance_without_feedback_keeps_pool() {
        let mut session = GuessSession::new(pool(&["crane", "slate", "trace"]));

        session.advance();
        assert_eq!(session.state(), &SessionState::Active);
        assert_eq!(session.pool().len(), 3);
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn advance_to_solved_on_single_survivor() {
        let mut session = GuessSession::new(pool(&["crane", "slate"]));

        // Guessing "crane" against answer "slate": a and e green, c/r/n gray
        let guess = Word::new("crane").unwrap();
        session.record(&guess, &marks("--g-g"));

        match session.advance() {
            SessionState::Solved(word) => assert_eq!(word.text(), "slate"),
            other => panic!("expected solved, got {other:?}"),
        }
    }

    #[test]
    fn advance_to_unsolvable_on_empty_pool() {
        // The out-of-place 't' example: every word is excluded
        let mut session = GuessSession::new(pool(&["train", "crane", "trace"]));

        let guess = Word::new("train").unwrap();
        session.record(&guess, &marks("y----"));

        assert_eq!(session.advance(), &SessionState::Unsolvable);
        assert!(session.pool().is_empty());
        assert!(session.state().is_terminal());
    }

    #[test]
    fn advance_in_terminal_state_is_noop() {
        let mut session = GuessSession::new(pool(&["train", "crane", "trace"]));
        let guess = Word::new("train").unwrap();
        session.record(&guess, &marks("y----"));

        session.advance();
        let round = session.round();
        assert_eq!(session.advance(), &SessionState::Unsolvable);
        assert_eq!(session.round(), round);
    }

    #[test]
    fn all_exact_marks_resolve_session() {
        let mut session = GuessSession::new(pool(&["crane", "slate", "trace"]));

        let guess = Word::new("slate").unwrap();
        session.record(&guess, &marks("ggggg"));

        assert_eq!(session.state(), &SessionState::Solved(guess));
    }

    #[test]
    fn declare_solved_is_terminal() {
        let mut session = GuessSession::new(pool(&["crane", "slate"]));
        let word = Word::new("slate").unwrap();

        session.declare_solved(word.clone());
        assert_eq!(session.state(), &SessionState::Solved(word));

        // Further recording is ignored
        let guess = Word::new("crane").unwrap();
        session.record(&guess, &marks("-----"));
        assert!(session.feedback().is_empty());
    }

    #[test]
    fn feedback_accumulates_across_rounds() {
        let mut session = GuessSession::new(pool(&[
            "apple", "mango", "peach", "chard", "grape",
        ]));

        // Round 1: 'e' confirmed at the final position
        let guess = Word::new("voice").unwrap();
        session.record(&guess, &marks("----g"));
        session.advance();

        let texts: Vec<&str> = session.pool().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple", "grape"]);

        // Round 2: an 'm' absent mark removes nothing from that pair
        let guess = Word::new("mount").unwrap();
        session.record(&guess, &marks("-----"));
        session.advance();

        let texts: Vec<&str> = session.pool().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple", "grape"]);
    }

    #[test]
    fn suggestions_offer_both_policies() {
        let session = GuessSession::new(pool(&["sheen", "crane", "slate"]));

        let suggestions = session.suggestions().unwrap();
        assert_eq!(suggestions.pool_order.text(), "sheen");
        // The repeated-letter word cannot win the score suggestion
        assert_ne!(suggestions.top_score.text(), "sheen");
    }

    #[test]
    fn suggestions_empty_pool() {
        let session = GuessSession::new(Vec::new());
        assert!(session.suggestions().is_none());
    }

    #[test]
    fn empty_initial_pool_becomes_unsolvable() {
        let mut session = GuessSession::new(Vec::new());
        assert_eq!(session.advance(), &SessionState::Unsolvable);
    }

    #[test]
    fn recommend_respects_policy() {
        let session = GuessSession::new(pool(&["sheen", "crane", "slate"]));

        let by_order = session.recommend(&PolicyType::from_name("order"));
        assert_eq!(by_order.unwrap().text(), "sheen");

        let by_score = session.recommend(&PolicyType::from_name("score"));
        assert_ne!(by_score.unwrap().text(), "sheen");
    }
}
