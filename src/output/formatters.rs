//! Formatting utilities for terminal output

use crate::core::{LetterMark, WORD_LEN};

/// Format a row of marks as colored squares
#[must_use]
pub fn marks_to_squares(marks: &[LetterMark; WORD_LEN]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            LetterMark::Exact => '🟩',
            LetterMark::Misplaced => '🟨',
            LetterMark::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
