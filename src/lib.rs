//! Termo
//!
//! A Portuguese five-letter word guessing game. Guesses are scored without regard
//! to accents, while the board shows the target's accented spelling.
//!
//! # Quick Start
//!
//! ```rust
//! use termo::core::{LetterResult, Word, evaluate};
//!
//! let guess = Word::new("macas").unwrap();
//! let target = Word::new("maçãs").unwrap();
//!
//! let feedback = evaluate(&guess, &target);
//! assert!(feedback.is_win());
//! assert_eq!(feedback.to_string(), "MAÇÃS");
//! assert_eq!(feedback.results()[2], LetterResult::Correct);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game state machine and input handling
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
