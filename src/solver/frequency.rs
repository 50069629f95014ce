//! Letter-frequency model
//!
//! Computes per-letter usage probability over a candidate pool. Counts every
//! occurrence of a letter across every word, not just presence, then
//! normalizes by the grand total into a probability distribution over the
//! 26-letter alphabet.

use crate::core::Word;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Error for operations that require a non-empty word pool
///
/// Surfaced explicitly instead of letting the normalization divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word pool is empty")
    }
}

impl std::error::Error for EmptyPoolError {}

/// Per-letter usage probabilities over a pool
///
/// Probabilities sum to 1 across the alphabet; letters absent from the pool
/// get probability 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies {
    probs: [f64; ALPHABET_LEN],
}

impl LetterFrequencies {
    /// Compute letter frequencies over a pool
    ///
    /// # Errors
    /// Returns [`EmptyPoolError`] if the pool contains no words.
    ///
    /// # Examples
    /// ```
    /// use guessmate::core::Word;
    /// use guessmate::solver::LetterFrequencies;
    ///
    /// let pool = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let freqs = LetterFrequencies::from_pool(&pool).unwrap();
    ///
    /// // 'a' and 'e' occur twice each across ten letters
    /// assert!((freqs.probability(b'a') - 0.2).abs() < 1e-9);
    /// assert!((freqs.probability(b'z') - 0.0).abs() < 1e-9);
    /// ```
    pub fn from_pool(pool: &[Word]) -> Result<Self, EmptyPoolError> {
        if pool.is_empty() {
            return Err(EmptyPoolError);
        }

        let mut counts = [0u64; ALPHABET_LEN];
        for word in pool {
            for &ch in word.chars() {
                counts[(ch - b'a') as usize] += 1;
            }
        }

        // Every word contributes WORD_LEN letters, so the total is positive
        let total = counts.iter().sum::<u64>() as f64;

        let mut probs = [0.0; ALPHABET_LEN];
        for (slot, &count) in probs.iter_mut().zip(&counts) {
            *slot = count as f64 / total;
        }

        Ok(Self { probs })
    }

    /// Usage probability of a letter
    ///
    /// Letters outside a-z have probability 0.
    #[inline]
    #[must_use]
    pub fn probability(&self, letter: u8) -> f64 {
        letter
            .checked_sub(b'a')
            .and_then(|i| self.probs.get(i as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterate over (letter, probability) pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.probs
            .iter()
            .enumerate()
            .map(|(i, &p)| (b'a' + i as u8, p))
    }

    /// Letters with their probabilities, most frequent first
    ///
    /// Ties keep alphabet order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, f64)> {
        let mut ranked: Vec<(u8, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
