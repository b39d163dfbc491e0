//! Input normalization
//!
//! Physical key presses, clicks on the on-screen keyboard and typed lines all become
//! [`InputEvent`]s, so the session never cares where input came from.

use super::keyboard::{VirtualKey, is_accepted_letter};
use crate::core::{WORD_LENGTH, is_diacritic, strip_diacritic};
use crossterm::event::KeyCode;
use std::fmt;

/// One logical player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Type a letter at the cursor
    Letter(char),
    /// Erase the letter before the cursor
    Delete,
    /// Submit the current row
    Submit,
    /// Move the cursor to a column of the current row
    Select(usize),
}

impl InputEvent {
    /// Map a physical key to an event
    ///
    /// Letters are uppercased first; anything outside the playable alphabet is ignored.
    #[must_use]
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Backspace => Some(Self::Delete),
            KeyCode::Enter => Some(Self::Submit),
            KeyCode::Char(ch) => to_letter(ch).map(Self::Letter),
            _ => None,
        }
    }

    /// Map an on-screen key to an event
    #[must_use]
    pub const fn from_virtual_key(key: VirtualKey) -> Self {
        match key {
            VirtualKey::Letter(ch) => Self::Letter(ch),
            VirtualKey::Enter => Self::Submit,
            VirtualKey::Backspace => Self::Delete,
        }
    }
}

/// Uppercase `ch` and keep it only if it is a playable letter
fn to_letter(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(letter), None) if is_accepted_letter(letter) => Some(letter),
        _ => None,
    }
}

/// Error for a typed line that cannot become a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    InvalidLetter(char),
    TooLong(usize),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a playable letter"),
            Self::TooLong(len) => {
                write!(f, "Guess has {len} letters, expected {WORD_LENGTH}")
            }
        }
    }
}

impl std::error::Error for LineError {}

/// Turn a typed line into the events that enter and submit it
///
/// Accented vowels are accepted and reduced to their base letter, since matching
/// ignores accents anyway. Short lines still produce a Submit so the session can
/// reject them as incomplete.
///
/// # Errors
///
/// Returns `LineError` for characters outside the alphabet or lines longer than a row.
///
/// # Examples
/// ```
/// use termo::game::{InputEvent, events_from_line};
///
/// let events = events_from_line("mãe").unwrap();
/// assert_eq!(
///     events,
///     vec![
///         InputEvent::Letter('M'),
///         InputEvent::Letter('A'),
///         InputEvent::Letter('E'),
///         InputEvent::Submit,
///     ]
/// );
/// ```
pub fn events_from_line(line: &str) -> Result<Vec<InputEvent>, LineError> {
    let mut events = Vec::with_capacity(WORD_LENGTH + 1);
    for ch in line.trim().chars().filter(|&ch| !is_diacritic(ch)) {
        let letter = to_letter(ch)
            .or_else(|| to_letter(strip_diacritic(ch)))
            .ok_or(LineError::InvalidLetter(ch))?;
        events.push(InputEvent::Letter(letter));
    }

    if events.len() > WORD_LENGTH {
        return Err(LineError::TooLong(events.len()));
    }

    events.push(InputEvent::Submit);
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_letters_uppercased() {
        assert_eq!(
            InputEvent::from_key(KeyCode::Char('a')),
            Some(InputEvent::Letter('A'))
        );
        assert_eq!(
            InputEvent::from_key(KeyCode::Char('ç')),
            Some(InputEvent::Letter('Ç'))
        );
    }

    #[test]
    fn physical_actions() {
        assert_eq!(
            InputEvent::from_key(KeyCode::Backspace),
            Some(InputEvent::Delete)
        );
        assert_eq!(InputEvent::from_key(KeyCode::Enter), Some(InputEvent::Submit));
    }

    #[test]
    fn physical_other_keys_ignored() {
        assert_eq!(InputEvent::from_key(KeyCode::Char('1')), None);
        assert_eq!(InputEvent::from_key(KeyCode::Char(' ')), None);
        assert_eq!(InputEvent::from_key(KeyCode::Char('é')), None);
        assert_eq!(InputEvent::from_key(KeyCode::Esc), None);
    }

    #[test]
    fn virtual_keys_match_physical() {
        assert_eq!(
            InputEvent::from_virtual_key(VirtualKey::Letter('Q')),
            InputEvent::from_key(KeyCode::Char('q')).unwrap()
        );
        assert_eq!(
            InputEvent::from_virtual_key(VirtualKey::Enter),
            InputEvent::Submit
        );
        assert_eq!(
            InputEvent::from_virtual_key(VirtualKey::Backspace),
            InputEvent::Delete
        );
    }

    #[test]
    fn line_keeps_cedilla() {
        let events = events_from_line("maçãs").unwrap();
        assert_eq!(events[2], InputEvent::Letter('Ç'));
        assert_eq!(events[3], InputEvent::Letter('A'));
        assert_eq!(events.len(), 6);
    }

    #[test]
    fn line_rejects_bad_input() {
        assert_eq!(
            events_from_line("car-o"),
            Err(LineError::InvalidLetter('-'))
        );
        assert_eq!(events_from_line("grande"), Err(LineError::TooLong(6)));
    }

    #[test]
    fn short_line_still_submits() {
        assert_eq!(
            events_from_line("mar").unwrap().last(),
            Some(&InputEvent::Submit)
        );
    }
}
