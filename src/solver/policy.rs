//! Suggestion policies
//!
//! Defines the `SuggestPolicy` trait and concrete implementations for
//! picking the recommended guess out of a candidate pool.

use super::frequency::LetterFrequencies;
use super::scorer::WordScores;
use crate::core::Word;

/// A policy for selecting the recommended guess from the current pool
pub trait SuggestPolicy {
    /// Select the recommended word from the pool
    ///
    /// Returns `None` if the pool is empty.
    fn suggest<'a>(&self, pool: &'a [Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of a policy while maintaining static dispatch.
pub enum PolicyType {
    /// Highest normalized distinct-letter score (default)
    TopScore(TopScorePolicy),
    /// First word in pool order
    PoolOrder(PoolOrderPolicy),
    /// Uniformly random pick from the pool
    Random(RandomPolicy),
}

impl SuggestPolicy for PolicyType {
    fn suggest<'a>(&self, pool: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::TopScore(p) => p.suggest(pool),
            Self::PoolOrder(p) => p.suggest(pool),
            Self::Random(p) => p.suggest(pool),
        }
    }
}

impl PolicyType {
    /// Create a policy from a name string
    ///
    /// Supported names: "score", "top-score", "order", "pool-order",
    /// "random". Defaults to the score policy if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "order" | "pool-order" | "first" => Self::PoolOrder(PoolOrderPolicy),
            "random" => Self::Random(RandomPolicy),
            _ => Self::TopScore(TopScorePolicy),
        }
    }
}

/// Highest-score policy
///
/// Computes letter frequencies and distinct-letter scores over the pool and
/// picks the best-scoring word; ties break to the earliest pool index.
pub struct TopScorePolicy;

impl SuggestPolicy for TopScorePolicy {
    fn suggest<'a>(&self, pool: &'a [Word]) -> Option<&'a Word> {
        let freqs = LetterFrequencies::from_pool(pool).ok()?;
        let scores = WordScores::compute(pool, &freqs).ok()?;
        pool.get(scores.best_index())
    }
}

/// Pool-order policy
///
/// Picks the first word. With a pool ranked at startup, pool order is score
/// rank over the ORIGINAL list rather than the narrowed one.
pub struct PoolOrderPolicy;

impl SuggestPolicy for PoolOrderPolicy {
    fn suggest<'a>(&self, pool: &'a [Word]) -> Option<&'a Word> {
        pool.first()
    }
}

/// Random policy
///
/// Uniformly random pick. Useful late in a session when a handful of
/// near-equivalent candidates remain.
pub struct RandomPolicy;

impl SuggestPolicy for RandomPolicy {
    fn suggest<'a>(&self, pool: &'a [Word]) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        pool.choose(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_pool() -> Vec<Word> {
        vec![
            Word::new("sheen").unwrap(),
            Word::new("crane").unwrap(),
            Word::new("slate").unwrap(),
        ]
    }

    #[test]
    fn top_score_prefers_distinct_coverage() {
        let pool = setup_pool();

        let result = TopScorePolicy.suggest(&pool);
        assert!(result.is_some());

        // "sheen" repeats a letter; a five-distinct-letter word wins
        let guess = result.unwrap();
        assert!(guess.text() == "crane" || guess.text() == "slate");
    }

    #[test]
    fn top_score_empty_pool() {
        assert!(TopScorePolicy.suggest(&[]).is_none());
    }

    #[test]
    fn pool_order_picks_first() {
        let pool = setup_pool();

        let result = PoolOrderPolicy.suggest(&pool);
        assert_eq!(result.unwrap().text(), "sheen");
    }

    #[test]
    fn pool_order_empty_pool() {
        assert!(PoolOrderPolicy.suggest(&[]).is_none());
    }

    #[test]
    fn random_picks_from_pool() {
        let pool = setup_pool();

        let result = RandomPolicy.suggest(&pool);
        assert!(result.is_some());
        assert!(pool.contains(result.unwrap()));
    }

    #[test]
    fn random_empty_pool() {
        assert!(RandomPolicy.suggest(&[]).is_none());
    }

    #[test]
    fn from_name_selects_policies() {
        assert!(matches!(
            PolicyType::from_name("order"),
            PolicyType::PoolOrder(_)
        ));
        assert!(matches!(
            PolicyType::from_name("random"),
            PolicyType::Random(_)
        ));
        assert!(matches!(
            PolicyType::from_name("score"),
            PolicyType::TopScore(_)
        ));
        // Unrecognized names fall back to the score policy
        assert!(matches!(
            PolicyType::from_name("nonsense"),
            PolicyType::TopScore(_)
        ));
    }

    #[test]
    fn policy_type_dispatches() {
        let pool = setup_pool();

        let policy = PolicyType::from_name("order");
        assert_eq!(policy.suggest(&pool).unwrap().text(), "sheen");
    }
}
