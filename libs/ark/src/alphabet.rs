//! Symbol table for ARK identifiers and checksums.

use crate::error::ArkError;

/// The default restricted alphabet: digits plus consonants, excluding
/// vowels and easily confused glyphs.
pub const DEFAULT_ALPHABET: &str = "0123456789BCDFGHJKLMNPQRSTVWXZ";

/// An ordered set of unique characters defining the valid identifier and
/// checksum symbols. The position of a character is its value in the
/// checksum computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Box<[char]>,
}

impl Alphabet {
    /// Builds an alphabet from an ordered string of symbols.
    ///
    /// Rejects alphabets with fewer than two symbols (a single-symbol
    /// alphabet cannot produce repeat-free identifiers) and alphabets
    /// containing the same character twice (positional values must be
    /// unambiguous).
    pub fn new(symbols: &str) -> Result<Self, ArkError> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() < 2 {
            return Err(ArkError::InvalidAlphabet {
                reason: "alphabet must contain at least 2 characters".to_string(),
            });
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(ArkError::InvalidAlphabet {
                    reason: format!("duplicate character '{c}'"),
                });
            }
        }
        Ok(Self {
            chars: chars.into_boxed_slice(),
        })
    }

    /// Returns the number of symbols (the checksum modulus `R`).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the alphabet has no symbols. Never true for an
    /// alphabet built through [`Alphabet::new`].
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Returns the zero-based positional value of `c`, if present.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&s| s == c)
    }

    /// Returns true if `c` is a symbol of this alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}
