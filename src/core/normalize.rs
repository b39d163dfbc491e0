//! Accent-insensitive comparison layer
//!
//! Letters are compared on their base form: the text is decomposed (NFD) and
//! every combining diacritical mark in U+0300..=U+036F is dropped.

use unicode_normalization::UnicodeNormalization;

/// Check whether `ch` is a combining diacritical mark that comparison ignores
#[inline]
#[must_use]
pub fn is_diacritic(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

/// Strip diacritics from a whole string
///
/// # Examples
/// ```
/// use termo::core::normalize;
///
/// assert_eq!(normalize("MAÇÃS"), "MACAS");
/// assert_eq!(normalize("CARRO"), "CARRO");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd().filter(|&ch| !is_diacritic(ch)).collect()
}

/// Strip diacritics from a single letter
///
/// Returns the base letter of the decomposition. Letters without a
/// decomposition come back unchanged.
#[must_use]
pub fn strip_diacritic(letter: char) -> char {
    std::iter::once(letter)
        .nfd()
        .find(|&ch| !is_diacritic(ch))
        .unwrap_or(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_precomposed_letters() {
        assert_eq!(normalize("ÁÉÍÓÚ"), "AEIOU");
        assert_eq!(normalize("ÂÊÔÃÕ"), "AEOAO");
        assert_eq!(normalize("Ç"), "C");
    }

    #[test]
    fn strips_decomposed_letters() {
        // "A" followed by a combining tilde
        assert_eq!(normalize("A\u{0303}"), "A");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(normalize("TERMO"), "TERMO");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn single_letter() {
        assert_eq!(strip_diacritic('Ç'), 'C');
        assert_eq!(strip_diacritic('Ã'), 'A');
        assert_eq!(strip_diacritic('Z'), 'Z');
    }

    #[test]
    fn diacritic_range() {
        assert!(is_diacritic('\u{0301}'));
        assert!(is_diacritic('\u{0327}'));
        assert!(!is_diacritic('A'));
        assert!(!is_diacritic('\u{0370}'));
    }
}
