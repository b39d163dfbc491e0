//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no terminal or I/O concerns.
//! Everything here is pure and deterministic.

mod feedback;
mod normalize;
mod word;

pub use feedback::{Feedback, LetterResult, evaluate};
pub use normalize::{is_diacritic, normalize, strip_diacritic};
pub use word::{WORD_LENGTH, Word, WordError};
