//! Distinct-letter coverage scoring
//!
//! Scores each word by the summed usage probability of its distinct letters,
//! then normalizes the scores into a distribution over the pool. A repeated
//! letter earns credit once, which rewards letter diversity over raw
//! frequency.

use super::frequency::{EmptyPoolError, LetterFrequencies};
use crate::core::Word;

/// Normalized scores for a pool, in pool order
///
/// Scores sum to 1 across the pool. The score at index `i` belongs to the
/// word at index `i` of the pool the scores were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct WordScores {
    scores: Vec<f64>,
}

impl WordScores {
    /// Score a pool against its letter frequencies
    ///
    /// `freqs` must be derived from `pool` (or a superset sharing its
    /// letters); the raw scores are normalized by their sum.
    ///
    /// # Errors
    /// Returns [`EmptyPoolError`] if the pool contains no words.
    ///
    /// # Examples
    /// ```
    /// use guessmate::core::Word;
    /// use guessmate::solver::{LetterFrequencies, WordScores};
    ///
    /// let pool = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let freqs = LetterFrequencies::from_pool(&pool).unwrap();
    /// let scores = WordScores::compute(&pool, &freqs).unwrap();
    ///
    /// let total: f64 = scores.iter().sum();
    /// assert!((total - 1.0).abs() < 1e-9);
    /// ```
    pub fn compute(pool: &[Word], freqs: &LetterFrequencies) -> Result<Self, EmptyPoolError> {
        if pool.is_empty() {
            return Err(EmptyPoolError);
        }

        let raw: Vec<f64> = pool
            .iter()
            .map(|word| {
                word.distinct_letters()
                    .map(|letter| freqs.probability(letter))
                    .sum()
            })
            .collect();

        let total: f64 = raw.iter().sum();
        debug_assert!(total > 0.0, "pool letters must appear in the frequencies");

        let scores = raw.into_iter().map(|score| score / total).collect();
        Ok(Self { scores })
    }

    /// Number of scored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check whether any words were scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of the word at a pool index
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.scores[index]
    }

    /// Iterate over scores in pool order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.iter().copied()
    }

    /// Index of the highest-scoring word
    ///
    /// Ties break to the earliest pool index, so the result is stable for a
    /// given pool order.
    #[must_use]
    pub fn best_index(&self) -> usize {
        let mut best = 0;
        for (index, &score) in self.scores.iter().enumerate() {
            if score > self.scores[best] {
                best = index;
            }
        }
        best
    }

    /// Pool indices ordered by descending score
    ///
    /// The sort is stable: equal scores keep their pool order.
    #[must_use]
    pub fn rank_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.scores.len()).collect();
        indices.sort_by(|&a, &b| self.scores[b].total_cmp(&self.scores[a]));
        indices
    }
}

/// Re-sort a pool by descending score
///
/// Computes frequencies and scores over the pool, then returns the words
/// highest-scoring first. Equal scores keep their original relative order.
/// This is the one place pool order is deliberately rewritten; every other
/// pool operation preserves it.
///
/// # Errors
/// Returns [`EmptyPoolError`] if the pool contains no words.
pub fn rank_by_score(pool: &[Word]) -> Result<Vec<Word>, EmptyPoolError> {
    let freqs = LetterFrequencies::from_pool(pool)?;
    let scores = WordScores::compute(pool, &freqs)?;

    Ok(scores
        .rank_indices()
        .into_iter()
        .map(|index| pool[index].clone())
        .collect())
}
