//! Error types for ARK generation and parsing.

use thiserror::Error;

/// Errors that can occur when generating or parsing ARKs.
///
/// Each variant carries the symbolic code of the original INIST scheme,
/// exposed through [`ArkError::code`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArkError {
    /// The NAAN is missing or not exactly 5 characters long.
    #[error("ARK NAAN is mandatory and must be 5 characters long")]
    InvalidNaan,

    /// A subpublisher is required but missing or not exactly 3 characters long.
    #[error("ARK subpublisher is mandatory and must be 3 characters long")]
    InvalidSubpublisher,

    /// The alphabet is empty, degenerate, or contains duplicate characters.
    #[error("invalid ARK alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    /// The raw string does not split into `ark:/<naan>/<name>`.
    #[error("invalid ARK syntax")]
    InvalidSyntax,

    /// The leading segment is not the literal `ark:`.
    #[error("unknown ARK label")]
    InvalidLabel,

    /// The NAAN segment does not match the configured NAAN.
    #[error("unknown ARK NAAN: expected '{expected}', got '{actual}'")]
    UnknownNaan { expected: String, actual: String },

    /// The name does not split into subpublisher, identifier, and checksum.
    #[error("invalid ARK name syntax")]
    InvalidNameSyntax,

    /// The subpublisher segment is not exactly 3 characters long.
    #[error("invalid ARK subpublisher: should be 3 characters long")]
    InvalidSubpublisherLength,

    /// The identifier segment is not exactly 8 characters long.
    #[error("invalid ARK identifier: should be 8 characters long")]
    InvalidIdentifierLength,

    /// The checksum segment is not exactly 1 character long.
    #[error("invalid ARK checksum: should be 1 character long")]
    InvalidChecksumLength,

    /// The anti-repetition draw loop hit its retry cap.
    #[error("identifier generation exhausted its retry budget")]
    GeneratorExhausted,
}

impl ArkError {
    /// Returns the symbolic wire code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ArkError::InvalidNaan => "ark-naan-empty",
            ArkError::InvalidSubpublisher => "ark-subpublisher-empty",
            ArkError::InvalidAlphabet { .. } => "ark-alphabet",
            ArkError::InvalidSyntax => "ark-parts",
            ArkError::InvalidLabel => "ark-label",
            ArkError::UnknownNaan { .. } => "ark-naan",
            ArkError::InvalidNameSyntax => "ark-name-parts",
            ArkError::InvalidSubpublisherLength => "ark-subpublisher-length",
            ArkError::InvalidIdentifierLength => "ark-identifier-length",
            ArkError::InvalidChecksumLength => "ark-checksum-length",
            ArkError::GeneratorExhausted => "ark-generator",
        }
    }

    /// Returns true if this error was raised while parsing a raw ARK string.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ArkError::InvalidSyntax
                | ArkError::InvalidLabel
                | ArkError::UnknownNaan { .. }
                | ArkError::InvalidNameSyntax
                | ArkError::InvalidSubpublisherLength
                | ArkError::InvalidIdentifierLength
                | ArkError::InvalidChecksumLength
        )
    }
}
