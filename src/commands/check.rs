//! Word list diagnostics

use crate::wordlists::loader::{inspect, letter_count};

/// Summary of a parsed word list
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub source: String,
    pub accepted: usize,
    pub playable: usize,
    /// Playable words that carry at least one diacritic or Ç
    pub accented: usize,
    pub duplicates: usize,
    /// Entries that are not 5-letter words, with their letter count
    pub rejected: Vec<(String, usize)>,
}

impl CheckReport {
    /// Check if the list can start a game
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.playable > 0
    }
}

/// Parse `raw` and summarize what a game would load from it
#[must_use]
pub fn check_word_list(raw: &str, source: &str) -> CheckReport {
    let report = inspect(raw);

    CheckReport {
        source: source.to_string(),
        accepted: report.accepted,
        playable: report.words.len(),
        accented: report
            .words
            .iter()
            .filter(|word| word.display() != word.letters())
            .count(),
        duplicates: report.duplicates,
        rejected: report
            .rejected
            .into_iter()
            .map(|entry| {
                let letters = letter_count(&entry);
                (entry, letters)
            })
            .collect(),
    }
}
