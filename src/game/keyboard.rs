//! On-screen keyboard layout

use std::fmt;

/// Letter rows of the on-screen keyboard; the last row is framed by Enter and Backspace
const LETTER_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÇ", "ZXCVBNM"];

/// A key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    Letter(char),
    Enter,
    Backspace,
}

impl VirtualKey {
    /// Text printed on the key
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// Check if the key is one of the wide action keys
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Enter | Self::Backspace)
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rows of the on-screen keyboard, top to bottom
#[must_use]
pub fn keyboard_rows() -> Vec<Vec<VirtualKey>> {
    let last = LETTER_ROWS.len() - 1;
    LETTER_ROWS
        .iter()
        .enumerate()
        .map(|(i, letters)| {
            let keys = letters.chars().map(VirtualKey::Letter);
            if i == last {
                std::iter::once(VirtualKey::Enter)
                    .chain(keys)
                    .chain(std::iter::once(VirtualKey::Backspace))
                    .collect()
            } else {
                keys.collect()
            }
        })
        .collect()
}

/// Check if `letter` belongs to the playable alphabet (`A`-`Z` and `Ç`)
#[must_use]
pub fn is_accepted_letter(letter: char) -> bool {
    letter.is_ascii_uppercase() || letter == 'Ç'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_shape() {
        let rows = keyboard_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 10);
        assert_eq!(rows[2].len(), 9);
        assert_eq!(rows[2][0], VirtualKey::Enter);
        assert_eq!(rows[2][8], VirtualKey::Backspace);
        assert_eq!(rows[1][9], VirtualKey::Letter('Ç'));
    }

    #[test]
    fn layout_covers_alphabet() {
        let letters: Vec<char> = keyboard_rows()
            .into_iter()
            .flatten()
            .filter_map(|key| match key {
                VirtualKey::Letter(ch) => Some(ch),
                _ => None,
            })
            .collect();
        assert_eq!(letters.len(), 27);
        assert!(letters.iter().all(|&ch| is_accepted_letter(ch)));
    }

    #[test]
    fn accepted_alphabet() {
        assert!(is_accepted_letter('A'));
        assert!(is_accepted_letter('Ç'));
        assert!(!is_accepted_letter('a'));
        assert!(!is_accepted_letter('Ã'));
        assert!(!is_accepted_letter('1'));
    }

    #[test]
    fn wide_keys() {
        assert!(VirtualKey::Enter.is_wide());
        assert!(!VirtualKey::Letter('A').is_wide());
    }
}
