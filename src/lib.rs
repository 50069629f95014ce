//! Guessmate
//!
//! An interactive word-guessing assistant. Given a fixed-length word list
//! and feedback about letter correctness from prior guesses, it narrows the
//! candidate pool and recommends the next guess using letter-frequency
//! statistics and distinct-letter coverage scores.
//!
//! # Quick Start
//!
//! ```rust
//! use guessmate::core::{Feedback, Word};
//! use guessmate::solver::filter_pool;
//!
//! let pool = vec![
//!     Word::new("apple").unwrap(),
//!     Word::new("mango").unwrap(),
//!     Word::new("grape").unwrap(),
//! ];
//!
//! // An 'e' confirmed at the final position
//! let mut feedback = Feedback::new();
//! feedback.record_in_place(4, b'e').unwrap();
//!
//! let survivors = filter_pool(&pool, &feedback);
//! assert_eq!(survivors.len(), 2); // "apple" and "grape"
//! ```

// Core domain types
pub mod core;

// Narrowing and recommendation engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
