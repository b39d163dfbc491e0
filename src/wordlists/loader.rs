//! Word list loading utilities
//!
//! Parses the plain-text word list format: one word per line, blank lines ignored,
//! lines starting with `#` treated as comments, case-insensitive.

use super::{LoadError, WordList};
use crate::core::{WORD_LENGTH, Word};
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Marker that starts a comment line
pub const COMMENT_MARKER: char = '#';

/// Accepted lines of a word list, trimmed and uppercased
///
/// No length filtering happens here; every returned entry is a recognized word of
/// the list, whatever its length.
pub fn parse_lines(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_uppercase)
}

/// Load a word list from raw text, keeping only 5-letter entries
///
/// Letters are counted after diacritic decomposition, so `MAÇÃS` is five letters.
/// Duplicate entries keep their first occurrence.
///
/// # Errors
///
/// Returns `LoadError::Empty` if no 5-letter entry survives.
///
/// # Examples
/// ```
/// use termo::wordlists::loader::load;
///
/// let words = load("# frutas\nmaçãs\n\nlimão\nuva\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words.words()[0].text(), "MAÇÃS");
/// ```
pub fn load(raw: &str) -> Result<WordList, LoadError> {
    let report = inspect(raw);
    debug!(
        "Word list parsed: {} lines accepted, {} playable, {} duplicates, {} other lengths",
        report.accepted,
        report.words.len(),
        report.duplicates,
        report.rejected.len()
    );

    if report.words.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(WordList::from_words(report.words))
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Empty` if it
/// contains no 5-letter entry.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loading word list from {}", path.display());
    load(&content)
}

/// Detailed outcome of parsing a word list
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Non-blank, non-comment lines
    pub accepted: usize,
    /// Distinct playable words in file order
    pub words: Vec<Word>,
    /// Playable lines dropped because they repeat an earlier entry
    pub duplicates: usize,
    /// Lines that are not 5-letter words
    pub rejected: Vec<String>,
}

/// Parse a word list and report what was kept and what was dropped
#[must_use]
pub fn inspect(raw: &str) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for line in parse_lines(raw) {
        report.accepted += 1;

        match Word::new(&line) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    report.words.push(word);
                } else {
                    report.duplicates += 1;
                }
            }
            Err(_) => report.rejected.push(line),
        }
    }

    report
}

/// Convert embedded string slice to a `WordList`
///
/// # Errors
///
/// Returns `LoadError::Empty` if the slice holds no 5-letter entry.
pub fn words_from_slice(slice: &[&str]) -> Result<WordList, LoadError> {
    load(&slice.join("\n"))
}

/// Count letters the way the loader does, accents included in their base letter
#[must_use]
pub fn letter_count(entry: &str) -> usize {
    match Word::new(entry) {
        Ok(_) => WORD_LENGTH,
        Err(crate::core::WordError::InvalidLength(len)) => len,
        Err(crate::core::WordError::InvalidCharacters) => entry.chars().count(),
    }
}
