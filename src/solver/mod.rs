//! Candidate narrowing and recommendation
//!
//! The filtering and scoring engine: letter-frequency statistics,
//! distinct-letter coverage scores, constraint filtering, and the session
//! that drives them round by round.

mod filter;
mod frequency;
mod policy;
mod scorer;
mod session;

pub use filter::filter_pool;
pub use frequency::{ALPHABET_LEN, EmptyPoolError, LetterFrequencies};
pub use policy::{PolicyType, PoolOrderPolicy, RandomPolicy, SuggestPolicy, TopScorePolicy};
pub use scorer::{WordScores, rank_by_score};
pub use session::{GuessSession, SessionState, Suggestions};
