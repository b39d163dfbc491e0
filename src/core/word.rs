//! Word representation
//!
//! A Word stores a 5-letter word in two forms: the accented letters used for display
//! and the diacritic-free base letters used for every comparison.

use super::normalize::is_diacritic;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Number of letters in every playable word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word that keeps its accents for display
///
/// `Ç` and `C` are different words as far as equality goes, but they compare
/// equal through [`Word::letters`], which is what scoring and lookups use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    display: [char; WORD_LENGTH],
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is uppercased. A base letter followed by combining marks counts as
    /// one letter, so precomposed and decomposed input produce the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The letter count is not exactly 5
    /// - A letter is not alphabetic, or its marks have no precomposed form
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    ///
    /// let word = Word::new("maçãs").unwrap();
    /// assert_eq!(word.text(), "MAÇÃS");
    /// assert_eq!(word.letters(), &['M', 'A', 'C', 'A', 'S']);
    ///
    /// assert!(Word::new("longa demais").is_err());
    /// assert!(Word::new("c4rro").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let upper = text.as_ref().to_uppercase();

        // Each group is a base letter plus the marks that follow it
        let mut groups: Vec<(char, String)> = Vec::with_capacity(WORD_LENGTH);
        for ch in upper.nfd() {
            if is_diacritic(ch) {
                match groups.last_mut() {
                    Some((_, group)) => group.push(ch),
                    None => return Err(WordError::InvalidCharacters),
                }
            } else {
                groups.push((ch, ch.to_string()));
            }
        }

        if groups.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(groups.len()));
        }

        let mut display = [' '; WORD_LENGTH];
        let mut letters = [' '; WORD_LENGTH];
        for (i, (base, group)) in groups.iter().enumerate() {
            if !base.is_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }

            let mut composed = group.nfc();
            display[i] = match (composed.next(), composed.next()) {
                (Some(ch), None) => ch,
                _ => return Err(WordError::InvalidCharacters),
            };
            letters[i] = *base;
        }

        Ok(Self {
            text: display.iter().collect(),
            display,
            letters,
        })
    }

    /// Build a word from individual letters, as typed into a guess row
    ///
    /// # Errors
    /// Returns `WordError` under the same conditions as [`Word::new`].
    pub fn from_letters(letters: [char; WORD_LENGTH]) -> Result<Self, WordError> {
        Self::new(letters.iter().collect::<String>())
    }

    /// Get the word as shown to the player, accents included
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the accented letters
    #[inline]
    #[must_use]
    pub const fn display(&self) -> &[char; WORD_LENGTH] {
        &self.display
    }

    /// Get the diacritic-free letters used for comparison
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the accented letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn display_at(&self, position: usize) -> char {
        self.display[position]
    }

    /// Get the comparison letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Count how often a base letter appears
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&ch| ch == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("carro").unwrap();
        assert_eq!(word.text(), "CARRO");
        assert_eq!(word.letters(), &['C', 'A', 'R', 'R', 'O']);
        assert_eq!(word.display(), word.letters());
    }

    #[test]
    fn word_creation_keeps_accents_for_display() {
        let word = Word::new("ações").unwrap();
        assert_eq!(word.text(), "AÇÕES");
        assert_eq!(word.display(), &['A', 'Ç', 'Õ', 'E', 'S']);
        assert_eq!(word.letters(), &['A', 'C', 'O', 'E', 'S']);
    }

    #[test]
    fn word_creation_accented_letter_counts_once() {
        let word = Word::new("MAÇÃS").unwrap();
        assert_eq!(word.display(), &['M', 'A', 'Ç', 'Ã', 'S']);
        assert_eq!(word.letters(), &['M', 'A', 'C', 'A', 'S']);
    }

    #[test]
    fn word_creation_decomposed_input() {
        // "MAC\u{0327}A\u{0303}S" is MAÇÃS spelled with combining marks
        let decomposed = Word::new("MAC\u{0327}A\u{0303}S").unwrap();
        let precomposed = Word::new("MAÇÃS").unwrap();
        assert_eq!(decomposed, precomposed);
        assert_eq!(decomposed.text(), "MAÇÃS");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("grande"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("mar"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("carr0").is_err()); // Number
        assert!(Word::new("car o").is_err()); // Space
        assert!(Word::new("carr!").is_err()); // Punctuation
        assert!(matches!(
            Word::new("\u{0301}ABCD"),
            Err(WordError::InvalidCharacters)
        ));
    }

    #[test]
    fn word_letters_ignore_accents() {
        let accented = Word::new("MAÇÃS").unwrap();
        let plain = Word::new("MACAS").unwrap();
        assert_ne!(accented, plain);
        assert_eq!(plain.letters(), accented.letters());
    }

    #[test]
    fn word_letter_accessors() {
        let word = Word::new("ícone").unwrap();
        assert_eq!(word.text(), "ÍCONE");
        assert_eq!(word.display_at(0), 'Í');
        assert_eq!(word.letter_at(0), 'I');
        assert_eq!(word.letter_at(1), 'C');
    }

    #[test]
    fn word_count_of() {
        let word = Word::new("carro").unwrap();
        assert_eq!(word.count_of('R'), 2);
        assert_eq!(word.count_of('C'), 1);
        assert_eq!(word.count_of('Z'), 0);
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters(['T', 'E', 'R', 'M', 'O']).unwrap();
        assert_eq!(word.text(), "TERMO");
    }

    #[test]
    fn word_display() {
        let word = Word::new("irmão").unwrap();
        assert_eq!(format!("{word}"), "IRMÃO");
    }
}
