//! Core domain types
//!
//! The fundamental types of the assistant: validated candidate words and
//! accumulated guess feedback. Everything here is pure and testable.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterMark};
pub use word::{WORD_LEN, Word, WordError};
