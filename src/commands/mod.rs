//! Command implementations

pub mod check;
pub mod score;
pub mod simple;

pub use check::{CheckReport, check_word_list};
pub use score::{ScoreResult, score_words};
pub use simple::run_simple;
