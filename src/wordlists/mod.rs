//! Word repository
//!
//! Holds the playable words, answers accent-insensitive membership queries and picks
//! the target. A list is built once and never mutated afterwards.

mod embedded;
pub mod loader;

pub use embedded::{PALAVRAS, PALAVRAS_COUNT};

use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error raised when a word list cannot be loaded
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read
    Io { path: PathBuf, source: io::Error },
    /// No 5-letter entry survived parsing
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty => write!(f, "No {WORD_LENGTH}-letter words found in the word list"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Error raised when a target is requested from a list with no words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyRepositoryError;

impl fmt::Display for EmptyRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No eligible words to pick a target from")
    }
}

impl std::error::Error for EmptyRepositoryError {}

/// Immutable collection of distinct playable words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[char; WORD_LENGTH]>,
}

impl WordList {
    /// Build a list from words, dropping exact duplicates
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        let mut seen: FxHashSet<Word> = FxHashSet::default();

        for word in words {
            if seen.insert(word.clone()) {
                list.index.insert(*word.letters());
                list.words.push(word);
            }
        }

        list
    }

    /// Load the list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if the embedded list holds no playable word.
    pub fn embedded() -> Result<Self, LoadError> {
        loader::words_from_slice(PALAVRAS)
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether the list holds `word`, ignoring accents
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    /// use termo::wordlists::loader::load;
    ///
    /// let words = load("maçãs\n").unwrap();
    /// assert!(words.contains(&Word::new("MACAS").unwrap()));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.letters())
    }

    /// Pick a target uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `EmptyRepositoryError` if the list is empty.
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, EmptyRepositoryError> {
        self.words.choose(rng).ok_or(EmptyRepositoryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> WordList {
        loader::load("carro\ntermo\nmaçãs\nirmão\n").unwrap()
    }

    #[test]
    fn contains_ignores_accents() {
        let words = sample();
        assert!(words.contains(&Word::new("macas").unwrap()));
        assert!(words.contains(&Word::new("IRMAO").unwrap()));
        assert!(words.contains(&Word::new("térmo").unwrap()));
        assert!(!words.contains(&Word::new("zebra").unwrap()));
    }

    #[test]
    fn from_words_drops_duplicates() {
        let carro = Word::new("carro").unwrap();
        let list = WordList::from_words([carro.clone(), carro.clone(), carro]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn pick_target_is_member() {
        let words = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let target = words.pick_target(&mut rng).unwrap();
            assert!(words.words().contains(target));
        }
    }

    #[test]
    fn pick_target_is_deterministic_for_seed() {
        let words = sample();
        let a = words.pick_target(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = words.pick_target(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pick_target_reaches_every_word() {
        let words = sample();
        let mut rng = StdRng::seed_from_u64(1);
        let mut picked = FxHashSet::default();
        for _ in 0..200 {
            picked.insert(words.pick_target(&mut rng).unwrap().text().to_string());
        }
        assert_eq!(picked.len(), words.len());
    }

    #[test]
    fn pick_target_empty_fails() {
        let empty = WordList::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(empty.pick_target(&mut rng), Err(EmptyRepositoryError));
    }

    #[test]
    fn embedded_list_loads() {
        let words = WordList::embedded().unwrap();
        assert!(!words.is_empty());
        assert_eq!(PALAVRAS.len(), PALAVRAS_COUNT);
        assert!(words.len() <= PALAVRAS_COUNT);
    }

    #[test]
    fn embedded_entries_are_playable() {
        for &entry in PALAVRAS {
            assert!(Word::new(entry).is_ok(), "Entry '{entry}' is not a 5-letter word");
        }
    }
}
