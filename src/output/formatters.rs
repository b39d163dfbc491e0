//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult};
use colored::{ColoredString, Colorize};

/// Color a single tile the way the board shows it
#[must_use]
pub fn colored_tile(letter: char, result: LetterResult) -> ColoredString {
    let tile = format!(" {letter} ");
    match result {
        LetterResult::Correct => tile.black().on_green().bold(),
        LetterResult::Present => tile.black().on_yellow().bold(),
        LetterResult::Absent => tile.white().on_bright_black(),
    }
}

/// Render an evaluated row as colored tiles
#[must_use]
pub fn colored_row(feedback: &Feedback) -> String {
    feedback
        .cells()
        .map(|(letter, result)| colored_tile(letter, result).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
