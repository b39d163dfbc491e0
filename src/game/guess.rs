//! In-progress guess buffer

use crate::core::{WORD_LENGTH, Word};

/// The row being typed: five slots plus a cursor in `0..=5`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessState {
    slots: [Option<char>; WORD_LENGTH],
    cursor: usize,
}

impl GuessState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Write `letter` at the cursor and advance
    ///
    /// Returns `false` without touching anything when the cursor is already past
    /// the last slot.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.cursor >= WORD_LENGTH {
            return false;
        }

        self.slots[self.cursor] = Some(letter);
        self.cursor += 1;
        true
    }

    /// Step the cursor back and clear that slot
    ///
    /// Returns `false` when the cursor is at the first slot.
    pub fn delete(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        self.slots[self.cursor] = None;
        true
    }

    /// Move the cursor onto slot `column`
    ///
    /// Returns `false` for columns outside the row.
    pub fn select(&mut self, column: usize) -> bool {
        if column >= WORD_LENGTH {
            return false;
        }

        self.cursor = column;
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if every slot holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The typed letters, or `None` while any slot is empty
    #[must_use]
    pub fn letters(&self) -> Option<[char; WORD_LENGTH]> {
        let mut letters = [' '; WORD_LENGTH];
        for (dst, slot) in letters.iter_mut().zip(self.slots) {
            *dst = slot?;
        }
        Some(letters)
    }

    /// The typed letters as a word, if the row is complete and well-formed
    #[must_use]
    pub fn to_word(&self) -> Option<Word> {
        self.letters().and_then(|letters| Word::from_letters(letters).ok())
    }

    /// Text typed so far, with empty slots skipped
    #[must_use]
    pub fn text(&self) -> String {
        self.slots.iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_advances_cursor() {
        let mut guess = GuessState::new();
        assert!(guess.insert('C'));
        assert!(guess.insert('A'));
        assert_eq!(guess.cursor(), 2);
        assert_eq!(guess.text(), "CA");
    }

    #[test]
    fn insert_past_end_is_noop() {
        let mut guess = GuessState::new();
        for ch in "CARRO".chars() {
            assert!(guess.insert(ch));
        }
        assert!(!guess.insert('X'));
        assert_eq!(guess.cursor(), 5);
        assert_eq!(guess.text(), "CARRO");
    }

    #[test]
    fn delete_clears_previous_slot() {
        let mut guess = GuessState::new();
        guess.insert('C');
        guess.insert('A');
        assert!(guess.delete());
        assert_eq!(guess.cursor(), 1);
        assert_eq!(guess.slots()[1], None);
        assert_eq!(guess.slots()[0], Some('C'));
    }

    #[test]
    fn delete_at_start_is_noop() {
        let mut guess = GuessState::new();
        assert!(!guess.delete());
        assert_eq!(guess, GuessState::new());
    }

    #[test]
    fn select_then_insert_overwrites() {
        let mut guess = GuessState::new();
        for ch in "CARRO".chars() {
            guess.insert(ch);
        }
        assert!(guess.select(3));
        guess.insert('T');
        assert_eq!(guess.text(), "CARTO");
        assert_eq!(guess.cursor(), 4);
    }

    #[test]
    fn select_out_of_row_rejected() {
        let mut guess = GuessState::new();
        assert!(!guess.select(5));
        assert_eq!(guess.cursor(), 0);
    }

    #[test]
    fn gap_makes_row_incomplete() {
        let mut guess = GuessState::new();
        guess.select(1);
        for ch in "ARRO".chars() {
            guess.insert(ch);
        }
        // Four letters typed but slot 0 is empty
        assert_eq!(guess.text().chars().count(), 4);
        assert!(!guess.is_complete());
        assert!(guess.letters().is_none());
        assert!(guess.to_word().is_none());
    }

    #[test]
    fn complete_row_becomes_word() {
        let mut guess = GuessState::new();
        for ch in "MAÇÃS".chars() {
            guess.insert(ch);
        }
        assert!(guess.is_complete());
        assert_eq!(guess.to_word().unwrap().text(), "MAÇÃS");
    }

    #[test]
    fn clear_resets() {
        let mut guess = GuessState::new();
        guess.insert('C');
        guess.clear();
        assert_eq!(guess, GuessState::new());
    }
}
