//! Display projection
//!
//! Turns a session into a grid of cells that any front end can draw. Nothing here
//! mutates the session.

use super::session::{GameSession, GameStatus, MAX_ATTEMPTS};
use crate::core::{LetterResult, WORD_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Nothing typed
    Empty,
    /// Typed but not yet submitted
    Typed,
    /// Evaluated
    Scored(LetterResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Option<char>,
    pub state: CellState,
    /// The cursor sits on this cell
    pub selected: bool,
}

impl CellView {
    const EMPTY: Self = Self {
        letter: None,
        state: CellState::Empty,
        selected: false,
    };
}

/// Six rows of five cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: [[CellView; WORD_LENGTH]; MAX_ATTEMPTS],
    /// Row that accepts input, if the game is still on
    pub active_row: Option<usize>,
}

impl GameSession {
    /// Project the session onto the board grid
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    /// use termo::game::{CellState, GameSession};
    ///
    /// let mut session = GameSession::new(Word::new("carro").unwrap());
    /// session.insert_letter('T').unwrap();
    ///
    /// let board = session.view();
    /// assert_eq!(board.rows[0][0].letter, Some('T'));
    /// assert_eq!(board.rows[0][0].state, CellState::Typed);
    /// assert!(board.rows[0][1].selected);
    /// ```
    #[must_use]
    pub fn view(&self) -> BoardView {
        let mut rows = [[CellView::EMPTY; WORD_LENGTH]; MAX_ATTEMPTS];

        for (row, evaluated) in rows.iter_mut().zip(self.history()) {
            for (cell, (letter, result)) in row.iter_mut().zip(evaluated.feedback.cells()) {
                *cell = CellView {
                    letter: Some(letter),
                    state: CellState::Scored(result),
                    selected: false,
                };
            }
        }

        let active_row = (self.status() == GameStatus::InProgress).then_some(self.current_row());

        if let Some(row) = active_row.and_then(|r| rows.get_mut(r)) {
            let guess = self.guess();
            for (col, (cell, slot)) in row.iter_mut().zip(guess.slots()).enumerate() {
                *cell = CellView {
                    letter: *slot,
                    state: if slot.is_some() {
                        CellState::Typed
                    } else {
                        CellState::Empty
                    },
                    selected: col == guess.cursor(),
                };
            }
        }

        BoardView { rows, active_row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::load;

    fn play(session: &mut GameSession, text: &str) {
        let words = load("carro\ncarta\nmaçãs\n").unwrap();
        for letter in text.chars() {
            session.insert_letter(letter).unwrap();
        }
        session.submit_guess(&words).unwrap();
    }

    #[test]
    fn fresh_board_is_empty_with_cursor_on_first_cell() {
        let session = GameSession::new(Word::new("carro").unwrap());
        let board = session.view();

        assert_eq!(board.active_row, Some(0));
        assert!(board.rows[0][0].selected);
        assert!(
            board
                .rows
                .iter()
                .flatten()
                .all(|cell| cell.letter.is_none() && cell.state == CellState::Empty)
        );
    }

    #[test]
    fn scored_rows_then_active_row() {
        let mut session = GameSession::new(Word::new("carro").unwrap());
        play(&mut session, "CARTA");
        session.insert_letter('M').unwrap();

        let board = session.view();
        assert_eq!(
            board.rows[0][3],
            CellView {
                letter: Some('T'),
                state: CellState::Scored(LetterResult::Absent),
                selected: false,
            }
        );
        assert_eq!(board.active_row, Some(1));
        assert_eq!(board.rows[1][0].letter, Some('M'));
        assert!(board.rows[1][1].selected);
        assert_eq!(board.rows[2][0].state, CellState::Empty);
    }

    #[test]
    fn full_row_has_no_selected_cell() {
        let mut session = GameSession::new(Word::new("carro").unwrap());
        for letter in "CARTA".chars() {
            session.insert_letter(letter).unwrap();
        }
        let board = session.view();
        assert!(board.rows[0].iter().all(|cell| !cell.selected));
    }

    #[test]
    fn won_board_shows_target_accents() {
        let mut session = GameSession::new(Word::new("maçãs").unwrap());
        play(&mut session, "MACAS");

        let board = session.view();
        assert_eq!(board.active_row, None);
        let shown: String = board.rows[0].iter().filter_map(|cell| cell.letter).collect();
        assert_eq!(shown, "MAÇÃS");
    }
}
