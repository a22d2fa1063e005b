//! Parsed ARK records and validation reports.

use serde::{Deserialize, Serialize};

/// A structurally parsed ARK.
///
/// Produced by [`crate::ArkCodec::parse`]. This is a value object: fresh
/// on every parse, no identity beyond field equality. Parsing checks
/// structure only; alphabet membership and checksum correctness are the
/// validator's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ark {
    /// The full raw string, `ark:/<naan>/<name>`.
    pub ark: String,
    /// 5-character Name Assigning Authority Number.
    pub naan: String,
    /// Everything after the second `/`: subpublisher, identifier, and
    /// checksum together.
    pub name: String,
    /// 3-character subpublisher code, empty when disabled.
    pub subpublisher: String,
    /// 8-character random identifier.
    pub identifier: String,
    /// Single check character.
    pub checksum: String,
}

/// Field-by-field validation report.
///
/// Returned by [`crate::ArkCodec::validate`], which never fails: every
/// failure mode collapses into `false` fields. A `false` checksum,
/// subpublisher, or identifier always drags `ark` and `name` down with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArkReport {
    pub ark: bool,
    pub naan: bool,
    pub name: bool,
    pub subpublisher: bool,
    pub identifier: bool,
    pub checksum: bool,
}

impl ArkReport {
    /// Returns true when every field validated.
    pub fn is_valid(&self) -> bool {
        self.ark && self.naan && self.name && self.subpublisher && self.identifier && self.checksum
    }
}

impl Default for ArkReport {
    fn default() -> Self {
        Self {
            ark: true,
            naan: true,
            name: true,
            subpublisher: true,
            identifier: true,
            checksum: true,
        }
    }
}
