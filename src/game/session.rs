//! Game session state machine
//!
//! A session owns the target, the evaluated rows and the guess being typed. It is
//! `InProgress` until a guess matches the target (`Won`) or the sixth miss (`Lost`);
//! terminal sessions reject every further action.

use super::guess::GuessState;
use super::input::InputEvent;
use crate::core::{Feedback, LetterResult, WORD_LENGTH, Word, evaluate, strip_diacritic};
use crate::wordlists::{EmptyRepositoryError, WordList};
use log::{debug, info};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of guesses a player gets
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A submitted guess and its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// What happened after a valid submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Miss with attempts left
    Continue { feedback: Feedback },
    /// Guess matched the target
    Won { feedback: Feedback, attempts: usize },
    /// Last attempt missed; carries the target for display
    Lost { feedback: Feedback, target: Word },
}

impl SubmitOutcome {
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        match self {
            Self::Continue { feedback } | Self::Won { feedback, .. } | Self::Lost { feedback, .. } => {
                feedback
            }
        }
    }
}

/// Recoverable errors; none of them changes the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// At least one slot of the row is empty
    IncompleteGuess,
    /// The guess is not in the word list
    UnknownWord(String),
    /// The game is already won or lost
    SessionTerminated,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => write!(f, "Guess must fill all {WORD_LENGTH} letters"),
            Self::UnknownWord(word) => write!(f, "Word not recognized: {word}"),
            Self::SessionTerminated => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// One game: a fixed target and up to six guesses
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    attempts_remaining: usize,
    current_row: usize,
    history: Vec<EvaluatedRow>,
    guess: GuessState,
    status: GameStatus,
}

impl GameSession {
    /// Start a session with a known target
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            attempts_remaining: MAX_ATTEMPTS,
            current_row: 0,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            guess: GuessState::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a session with a target drawn from `words`
    ///
    /// # Errors
    ///
    /// Returns `EmptyRepositoryError` if `words` is empty.
    pub fn start<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Result<Self, EmptyRepositoryError> {
        let target = words.pick_target(rng)?.clone();
        debug!("New game started ({} candidate targets)", words.len());
        Ok(Self::new(target))
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[EvaluatedRow] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &GuessState {
        &self.guess
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::SessionTerminated)
        } else {
            Ok(())
        }
    }

    /// Type a letter into the current row
    ///
    /// A full row ignores the letter.
    ///
    /// # Errors
    ///
    /// Returns `GameError::SessionTerminated` once the game is over.
    pub fn insert_letter(&mut self, letter: char) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.guess.insert(letter);
        Ok(())
    }

    /// Erase the letter before the cursor
    ///
    /// # Errors
    ///
    /// Returns `GameError::SessionTerminated` once the game is over.
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.guess.delete();
        Ok(())
    }

    /// Move the cursor to `column` of the current row
    ///
    /// # Errors
    ///
    /// Returns `GameError::SessionTerminated` once the game is over.
    pub fn select_slot(&mut self, column: usize) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.guess.select(column);
        Ok(())
    }

    /// Drop everything typed in the current row
    ///
    /// # Errors
    ///
    /// Returns `GameError::SessionTerminated` once the game is over.
    pub fn clear_guess(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.guess.clear();
        Ok(())
    }

    /// Submit the current row
    ///
    /// # Errors
    ///
    /// - `GameError::IncompleteGuess` if any slot is empty
    /// - `GameError::UnknownWord` if the guess is not in `words` (accents ignored)
    /// - `GameError::SessionTerminated` once the game is over
    ///
    /// Errors leave the session untouched, including the typed letters.
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    /// use termo::game::{GameSession, GameStatus, SubmitOutcome};
    /// use termo::wordlists::loader::load;
    ///
    /// let words = load("carro\ncarta\n").unwrap();
    /// let mut session = GameSession::new(Word::new("carro").unwrap());
    ///
    /// for letter in "CARRO".chars() {
    ///     session.insert_letter(letter).unwrap();
    /// }
    /// let outcome = session.submit_guess(&words).unwrap();
    ///
    /// assert!(matches!(outcome, SubmitOutcome::Won { attempts: 1, .. }));
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess(&mut self, words: &WordList) -> Result<SubmitOutcome, GameError> {
        self.ensure_in_progress()?;

        if !self.guess.is_complete() {
            return Err(GameError::IncompleteGuess);
        }
        let typed = self.guess.text();
        let guess = self
            .guess
            .to_word()
            .ok_or_else(|| GameError::UnknownWord(typed.clone()))?;

        if !words.contains(&guess) {
            debug!("Rejected unknown word {typed}");
            return Err(GameError::UnknownWord(typed));
        }

        let feedback = evaluate(&guess, &self.target);
        debug!(
            "Row {}: {} {}",
            self.current_row + 1,
            feedback,
            feedback.to_emoji()
        );

        self.history.push(EvaluatedRow {
            guess,
            feedback: feedback.clone(),
        });
        self.guess.clear();

        if feedback.is_win() {
            let attempts = self.history.len();
            self.attempts_remaining = 0;
            self.status = GameStatus::Won;
            info!("Game won in {attempts} attempts");
            return Ok(SubmitOutcome::Won { feedback, attempts });
        }

        self.attempts_remaining -= 1;
        self.current_row += 1;

        if self.attempts_remaining == 0 {
            self.status = GameStatus::Lost;
            info!("Game lost, target was {}", self.target);
            return Ok(SubmitOutcome::Lost {
                feedback,
                target: self.target.clone(),
            });
        }

        Ok(SubmitOutcome::Continue { feedback })
    }

    /// Dispatch an input event
    ///
    /// Returns the outcome for submissions and `None` for editing events.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn apply(
        &mut self,
        event: InputEvent,
        words: &WordList,
    ) -> Result<Option<SubmitOutcome>, GameError> {
        match event {
            InputEvent::Letter(letter) => self.insert_letter(letter).map(|()| None),
            InputEvent::Delete => self.delete_letter().map(|()| None),
            InputEvent::Select(column) => self.select_slot(column).map(|()| None),
            InputEvent::Submit => self.submit_guess(words).map(Some),
        }
    }

    /// Best result seen so far for each base letter
    ///
    /// Correct beats Present beats Absent.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, LetterResult> {
        let mut hints: FxHashMap<char, LetterResult> = FxHashMap::default();

        for row in &self.history {
            for (&letter, &result) in row.guess.letters().iter().zip(row.feedback.results()) {
                let entry = hints.entry(letter).or_insert(result);
                *entry = (*entry).max(result);
            }
        }

        hints
    }

    /// Hint for a letter as typed (accents ignored)
    #[must_use]
    pub fn hint_for(&self, letter: char) -> Option<LetterResult> {
        self.letter_hints().get(&strip_diacritic(letter)).copied()
    }
}
