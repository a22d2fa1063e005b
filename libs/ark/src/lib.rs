//! # ark-codec
//!
//! Generation, parsing, and validation of ARK (Archival Resource Key)
//! persistent identifiers following the INIST naming-authority scheme.
//!
//! ## Design Principles
//!
//! - ARKs are plain strings with a strict structure; this crate is a pure,
//!   stateless codec over that structure
//! - Parsing is structural only; semantic checks (alphabet membership,
//!   checksum correctness) belong to validation
//! - Validation never fails: every failure mode collapses into a
//!   field-by-field boolean report
//! - The random source is injectable so generation is deterministic in tests
//!
//! ## ARK Format
//!
//! All identifiers use the form `ark:/<NAAN>/[<SUB>-]<IDENTIFIER>-<CHECKSUM>`
//! (hyphens omitted in fixed-width mode):
//!
//! - `NAAN`: 5-character Name Assigning Authority Number
//! - `SUB`: optional 3-character subpublisher code
//! - `IDENTIFIER`: 8 random characters over a restricted alphabet
//! - `CHECKSUM`: one check character computed with the Noid Check Digit
//!   Algorithm over `NAAN + SUB + IDENTIFIER`
//!
//! ## Example
//!
//! ```
//! use ark_codec::{ArkCodec, ArkConfig, Subpublisher};
//!
//! let codec = ArkCodec::new(ArkConfig {
//!     subpublisher: Subpublisher::code("39D"),
//!     ..ArkConfig::default()
//! });
//!
//! let raw = codec.generate()?;
//! let ark = codec.parse(&raw)?;
//! assert_eq!(ark.naan, "67375");
//! assert_eq!(ark.identifier.len(), 8);
//! assert!(codec.validate(&raw).is_valid());
//! # Ok::<(), ark_codec::ArkError>(())
//! ```

mod alphabet;
mod checksum;
mod codec;
mod error;
mod generator;
mod record;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use checksum::ncda;
pub use codec::{ArkCodec, ArkConfig, GenerateOptions, Subpublisher, DEFAULT_NAAN};
pub use error::ArkError;
pub use generator::IDENTIFIER_LEN;
pub use record::{Ark, ArkReport};
