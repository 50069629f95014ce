//! Command implementations

pub mod assist;
pub mod rank;

pub use assist::run_assist;
pub use rank::{RankReport, rank_words};
