//! Score a single guess against a target

use crate::core::{Feedback, Word, evaluate};
use crate::wordlists::WordList;

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// When `words` is given, both words must be in it (accents ignored).
///
/// # Errors
///
/// Returns an error if either word is malformed or missing from `words`.
///
/// # Examples
/// ```
/// use termo::commands::score_words;
///
/// let result = score_words("carta", "carro", None).unwrap();
/// assert_eq!(result.feedback.to_emoji(), "🟩🟩🟩⬜⬜");
/// ```
pub fn score_words(
    guess: &str,
    target: &str,
    words: Option<&WordList>,
) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target '{target}': {e}"))?;

    if let Some(words) = words {
        for word in [&guess, &target] {
            if !words.contains(word) {
                return Err(format!("Word '{word}' not in word list"));
            }
        }
    }

    let feedback = evaluate(&guess, &target);
    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
