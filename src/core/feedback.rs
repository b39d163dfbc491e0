//! Guess evaluation
//!
//! Scores a guess against the target letter by letter using Wordle's two-pass rule:
//! - Pass 1 marks exact position matches and consumes those target letters
//! - Pass 2 scans the target left to right for the first unconsumed match
//!
//! Comparison happens on diacritic-free letters. The displayed letter of a matched
//! slot is taken from the target so the player sees the real accents.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of one letter of an evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    /// Letter not in the target (or every copy already accounted for)
    Absent,
    /// Letter in the target, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterResult {
    /// Emoji square for this result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// The evaluated row for one submitted guess
///
/// Produced once per submission and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    results: [LetterResult; WORD_LENGTH],
    display: [char; WORD_LENGTH],
}

impl Feedback {
    /// Per-letter classifications
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.results
    }

    /// Letters to show in the row
    ///
    /// Correct and Present slots carry the target's accented letter, Absent slots the
    /// letter that was typed.
    #[inline]
    #[must_use]
    pub const fn display(&self) -> &[char; WORD_LENGTH] {
        &self.display
    }

    /// Pairs of (shown letter, result) in row order
    pub fn cells(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.display.iter().copied().zip(self.results.iter().copied())
    }

    /// Check if every letter is Correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.results.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Count the number of Correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterResult::Correct)
    }

    /// Count the number of Present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterResult::Present)
    }

    fn count(&self, kind: LetterResult) -> usize {
        self.results.iter().filter(|&&r| r == kind).count()
    }

    /// Convert results to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use termo::core::{Word, evaluate};
    ///
    /// let guess = Word::new("carta").unwrap();
    /// let target = Word::new("carro").unwrap();
    /// assert_eq!(evaluate(&guess, &target).to_emoji(), "🟩🟩🟩⬜⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.results.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display.iter().collect::<String>())
    }
}

/// Evaluate `guess` against `target`
///
/// Pure and deterministic. When the guess repeats a letter more often than the
/// target holds it, the earliest copies (after exact matches) win and later copies
/// are Absent.
///
/// # Examples
/// ```
/// use termo::core::{LetterResult::*, Word, evaluate};
///
/// let guess = Word::new("carta").unwrap();
/// let target = Word::new("carro").unwrap();
/// let feedback = evaluate(&guess, &target);
///
/// assert_eq!(feedback.results(), &[Correct, Correct, Correct, Absent, Absent]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    let guess_letters = guess.letters();
    let target_letters = target.letters();

    let mut results: [Option<LetterResult>; WORD_LENGTH] = [None; WORD_LENGTH];
    let mut display = *guess.display();
    let mut consumed = [false; WORD_LENGTH];

    // First pass: exact position matches
    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess_letters[i] == target_letters[i] {
            results[i] = Some(LetterResult::Correct);
            consumed[i] = true;
            display[i] = target.display_at(i);
        }
    }

    // Second pass: first unconsumed match anywhere else
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if results[i].is_some() {
            continue;
        }

        let matched =
            (0..WORD_LENGTH).find(|&j| !consumed[j] && target_letters[j] == guess_letters[i]);

        results[i] = Some(match matched {
            Some(j) => {
                consumed[j] = true;
                display[i] = target.display_at(j);
                LetterResult::Present
            }
            None => LetterResult::Absent,
        });
    }

    Feedback {
        results: results.map(|r| r.unwrap_or(LetterResult::Absent)),
        display,
    }
}
