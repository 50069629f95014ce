//! Word list ranking command
//!
//! Computes the letter-frequency table and the best-covering words for a
//! word list.

use crate::core::Word;
use crate::solver::{EmptyPoolError, LetterFrequencies, WordScores};

/// Result of ranking a word list
pub struct RankReport {
    /// Number of words in the list
    pub total_words: usize,
    /// Best-covering words with their normalized scores, highest first
    pub top_words: Vec<(String, f64)>,
    /// All letters with their usage probabilities, most frequent first
    pub letters: Vec<(char, f64)>,
}

/// Rank a word list by distinct-letter coverage
///
/// # Errors
///
/// Returns [`EmptyPoolError`] if the list contains no words.
pub fn rank_words(pool: &[Word], top: usize) -> Result<RankReport, EmptyPoolError> {
    let freqs = LetterFrequencies::from_pool(pool)?;
    let scores = WordScores::compute(pool, &freqs)?;

    let top_words = scores
        .rank_indices()
        .into_iter()
        .take(top)
        .map(|index| (pool[index].text().to_string(), scores.get(index)))
        .collect();

    let letters = freqs
        .ranked()
        .into_iter()
        .map(|(letter, probability)| (letter as char, probability))
        .collect();

    Ok(RankReport {
        total_words: pool.len(),
        top_words,
        letters,
    })
}
