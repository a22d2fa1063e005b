//! NCDA check character computation.
//!
//! NCDA (Noid Check Digit Algorithm) weights each symbol by its 1-based
//! position times its zero-based index in the alphabet, then reduces the
//! sum modulo the alphabet size. This detects transpositions and
//! substitutions with high probability, like other check-digit schemes
//! of its class.
//!
//! See: <http://search.cpan.org/~jak/Noid/noid#NOID_CHECK_DIGIT_ALGORITHM>

use crate::alphabet::Alphabet;

/// Computes the NCDA check character for `payload` over `alphabet`.
///
/// Characters absent from the alphabet contribute 0 to the sum. This
/// leniency is deliberate: an out-of-alphabet symbol surfaces as a
/// checksum mismatch during validation, never as a hard error here.
/// An empty payload yields the first alphabet character.
pub fn ncda(payload: &str, alphabet: &Alphabet) -> char {
    let r = alphabet.len();
    let sum: usize = payload
        .chars()
        .enumerate()
        .map(|(i, c)| (i + 1) * alphabet.index_of(c).unwrap_or(0))
        .sum();
    alphabet.char_at(sum % r)
}
