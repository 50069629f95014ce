//! Accumulated guess feedback
//!
//! Tracks the three feedback relations across rounds: letters confirmed at
//! an exact position, letters confirmed present but misplaced, and letters
//! whose occurrence count is capped. Entries are append-only for the
//! lifetime of a session; nothing is ever removed.

use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Classification of one guessed letter
///
/// Supplied per position by whatever collects the feedback (console input,
/// a game server, a test).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMark {
    /// Correct letter at the correct position ("green")
    Exact,
    /// Letter is in the word but not at this position ("yellow")
    Misplaced,
    /// Letter occurrence is capped at its confirmed-present count ("gray")
    Absent,
}

impl LetterMark {
    /// Parse a full line of marks like "GY-G-"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for misplaced
    /// - '-'/'_'/⬜ for absent
    ///
    /// Returns `None` if the line is not exactly [`WORD_LEN`] marks.
    ///
    /// # Examples
    /// ```
    /// use guessmate::core::LetterMark;
    ///
    /// let marks = LetterMark::parse_line("GY-g_").unwrap();
    /// assert_eq!(marks[0], LetterMark::Exact);
    /// assert_eq!(marks[1], LetterMark::Misplaced);
    /// assert_eq!(marks[2], LetterMark::Absent);
    /// ```
    #[must_use]
    pub fn parse_line(s: &str) -> Option<[Self; WORD_LEN]> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut marks = [Self::Absent; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            marks[i] = match ch {
                'G' | 'g' | '🟩' => Self::Exact,
                'Y' | 'y' | '🟨' => Self::Misplaced,
                '-' | '_' | '⬜' => Self::Absent,
                _ => return None,
            };
        }

        Some(marks)
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Position index at or beyond [`WORD_LEN`]
    InvalidPosition(usize),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(index) => {
                write!(f, "Position {index} is outside the word (0..{WORD_LEN})")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Accumulated feedback for one guessing session
///
/// Owned by the session and mutated round to round. The relations:
/// - `in_place`: position → the letter required at that exact position.
///   Re-recording a position applies the last-recorded letter.
/// - `out_of_place`: position → set of letters known to be in the word but
///   not at that position. Recording the same pair twice is a no-op.
/// - `not_in_word`: per-letter count of absent marks. A letter here is not
///   banned outright: a word may still contain it up to the number of times
///   it appears among the in-word letters (see [`Feedback::letter_cap`]).
///
/// The same letter may legitimately be in-place at one position and
/// misplaced at another; both constraints hold simultaneously.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    in_place: FxHashMap<usize, u8>,
    out_of_place: FxHashMap<usize, Vec<u8>>,
    not_in_word: FxHashMap<u8, u8>,
}

impl Feedback {
    /// Create empty feedback state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any feedback has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_place.is_empty() && self.out_of_place.is_empty() && self.not_in_word.is_empty()
    }

    /// Record a letter confirmed at an exact position
    ///
    /// # Errors
    /// Returns [`FeedbackError::InvalidPosition`] if `index >= WORD_LEN`.
    pub fn record_in_place(&mut self, index: usize, letter: u8) -> Result<(), FeedbackError> {
        if index >= WORD_LEN {
            return Err(FeedbackError::InvalidPosition(index));
        }
        self.in_place.insert(index, letter);
        Ok(())
    }

    /// Record a letter confirmed present but not at this position
    ///
    /// # Errors
    /// Returns [`FeedbackError::InvalidPosition`] if `index >= WORD_LEN`.
    pub fn record_out_of_place(&mut self, index: usize, letter: u8) -> Result<(), FeedbackError> {
        if index >= WORD_LEN {
            return Err(FeedbackError::InvalidPosition(index));
        }
        let letters = self.out_of_place.entry(index).or_default();
        if !letters.contains(&letter) {
            letters.push(letter);
        }
        Ok(())
    }

    /// Record an absent mark for a letter
    ///
    /// Counts accumulate; the effective occurrence cap is derived from the
    /// in-word letters, not from this count.
    pub fn record_absent(&mut self, letter: u8) {
        *self.not_in_word.entry(letter).or_insert(0) += 1;
    }

    /// Record a whole guess worth of feedback
    ///
    /// Applies one mark per position: exact marks extend `in_place`,
    /// misplaced marks extend `out_of_place`, and every letter at a
    /// position classified neither way gets an absent mark.
    pub fn record_guess(&mut self, guess: &Word, marks: &[LetterMark; WORD_LEN]) {
        for (index, &mark) in marks.iter().enumerate() {
            let letter = guess.char_at(index);
            match mark {
                LetterMark::Exact => {
                    self.in_place.insert(index, letter);
                }
                LetterMark::Misplaced => {
                    let letters = self.out_of_place.entry(index).or_default();
                    if !letters.contains(&letter) {
                        letters.push(letter);
                    }
                }
                LetterMark::Absent => self.record_absent(letter),
            }
        }
    }

    /// Iterate over (position, letter) exact-position entries
    pub fn in_place(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.in_place.iter().map(|(&index, &letter)| (index, letter))
    }

    /// Iterate over (position, letters) misplaced entries
    pub fn out_of_place(&self) -> impl Iterator<Item = (usize, &[u8])> + '_ {
        self.out_of_place
            .iter()
            .map(|(&index, letters)| (index, letters.as_slice()))
    }

    /// Iterate over (letter, absent-mark count) entries
    pub fn not_in_word(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.not_in_word.iter().map(|(&letter, &count)| (letter, count))
    }

    /// Letters confirmed to be in the word, with multiplicity
    ///
    /// Collects the `in_place` letters plus every letter in the
    /// `out_of_place` sets. Multiplicity feeds [`Feedback::letter_cap`].
    #[must_use]
    pub fn in_word_letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.in_place.values().copied().collect();
        for set in self.out_of_place.values() {
            letters.extend_from_slice(set);
        }
        letters
    }

    /// Maximum allowed occurrences of a letter marked absent
    ///
    /// The cap equals the number of times the letter appears among the
    /// in-word letters: a letter can be confirmed present once and
    /// simultaneously confirmed not to occur a second time. A cap of zero
    /// is the plain "letter absent" case.
    #[must_use]
    pub fn letter_cap(&self, letter: u8) -> usize {
        self.in_word_letters()
            .iter()
            .filter(|&&c| c == letter)
            .count()
    }
}
