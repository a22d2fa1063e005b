//! Random identifier drawing.

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::error::ArkError;

/// Length of the random identifier segment.
pub const IDENTIFIER_LEN: usize = 8;

/// Retry cap for the anti-repetition rejection loop. With the default
/// 30-symbol alphabet a candidate is rejected with probability well
/// under 25%, so the cap is unreachable in practice.
const MAX_DRAW_ATTEMPTS: usize = 1024;

/// Returns true when the candidate repeats a character in two
/// consecutive positions.
pub(crate) fn has_adjacent_repeat(candidate: &str) -> bool {
    candidate
        .chars()
        .zip(candidate.chars().skip(1))
        .any(|(a, b)| a == b)
}

/// Draws one identifier candidate, each position uniform over the alphabet.
fn draw<R: Rng + ?Sized>(rng: &mut R, alphabet: &Alphabet) -> String {
    (0..IDENTIFIER_LEN)
        .map(|_| alphabet.char_at(rng.random_range(0..alphabet.len())))
        .collect()
}

/// Draws identifiers until one passes the adjacent-repeat check.
pub(crate) fn identifier<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &Alphabet,
) -> Result<String, ArkError> {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let candidate = draw(rng, alphabet);
        if !has_adjacent_repeat(&candidate) {
            return Ok(candidate);
        }
    }
    Err(ArkError::GeneratorExhausted)
}
