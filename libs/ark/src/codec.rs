//! ARK codec: configuration, generation, parsing, and validation.

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::checksum::ncda;
use crate::error::ArkError;
use crate::generator;
use crate::record::{Ark, ArkReport};

/// The default NAAN, registered to INIST.
pub const DEFAULT_NAAN: &str = "67375";

/// Required NAAN length in characters.
const NAAN_LEN: usize = 5;

/// Required subpublisher length in characters.
const SUBPUBLISHER_LEN: usize = 3;

/// Subpublisher policy for a codec instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subpublisher {
    /// No subpublisher segment at all, neither generated nor expected.
    Disabled,
    /// A subpublisher code. A blank code means the segment is expected
    /// but each generate call must supply one explicitly.
    Code(String),
}

impl Subpublisher {
    /// Shorthand for `Subpublisher::Code`.
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }

    /// Returns true when the subpublisher segment is absent entirely.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl Default for Subpublisher {
    fn default() -> Self {
        Self::Code(String::new())
    }
}

/// Immutable codec configuration, captured at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArkConfig {
    /// 5-character Name Assigning Authority Number.
    pub naan: String,
    /// Subpublisher policy.
    pub subpublisher: Subpublisher,
    /// Symbol table for identifiers and checksums.
    pub alphabet: Alphabet,
    /// Whether segments are joined with `-` or sliced at fixed widths.
    pub hyphenated: bool,
}

impl Default for ArkConfig {
    fn default() -> Self {
        Self {
            naan: DEFAULT_NAAN.to_string(),
            subpublisher: Subpublisher::default(),
            alphabet: Alphabet::default(),
            hyphenated: true,
        }
    }
}

/// Per-call overrides for [`ArkCodec::generate_opts`]. Unset fields fall
/// back to the instance configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub naan: Option<String>,
    pub subpublisher: Option<Subpublisher>,
    pub hyphenated: Option<bool>,
}

/// A configured ARK codec.
///
/// Owns an immutable copy of its configuration; concurrent use from
/// multiple threads is safe, the only non-determinism being the
/// thread-local RNG used by [`ArkCodec::generate`].
#[derive(Debug, Clone)]
pub struct ArkCodec {
    config: ArkConfig,
}

impl ArkCodec {
    /// Creates a codec from a configuration.
    pub fn new(config: ArkConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration captured at construction.
    pub fn config(&self) -> &ArkConfig {
        &self.config
    }

    /// Generates a fresh ARK with the instance configuration.
    pub fn generate(&self) -> Result<String, ArkError> {
        self.generate_with(&mut rand::rng(), GenerateOptions::default())
    }

    /// Generates a fresh ARK with per-call overrides.
    pub fn generate_opts(&self, opts: GenerateOptions) -> Result<String, ArkError> {
        self.generate_with(&mut rand::rng(), opts)
    }

    /// Generates a fresh ARK drawing randomness from `rng`.
    ///
    /// This is the deterministic seam: pass a seeded RNG to reproduce a
    /// generation exactly.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        opts: GenerateOptions,
    ) -> Result<String, ArkError> {
        let naan = opts.naan.as_deref().unwrap_or(&self.config.naan);
        let subpublisher = opts
            .subpublisher
            .as_ref()
            .unwrap_or(&self.config.subpublisher);
        let hyphenated = opts.hyphenated.unwrap_or(self.config.hyphenated);

        if naan.chars().count() != NAAN_LEN {
            return Err(ArkError::InvalidNaan);
        }

        let sub = match subpublisher {
            Subpublisher::Disabled => "",
            Subpublisher::Code(code) => {
                if code.chars().count() != SUBPUBLISHER_LEN {
                    return Err(ArkError::InvalidSubpublisher);
                }
                code.as_str()
            }
        };

        let identifier = generator::identifier(rng, &self.config.alphabet)?;
        let checksum = ncda(&format!("{naan}{sub}{identifier}"), &self.config.alphabet);

        Ok(format_ark(naan, sub, &identifier, checksum, hyphenated))
    }

    /// Parses a raw string into its structural fields.
    ///
    /// Structure only: alphabet membership is not checked and the
    /// checksum is not recomputed here. Use [`ArkCodec::validate`] for
    /// semantic verification.
    pub fn parse(&self, raw: &str) -> Result<Ark, ArkError> {
        let segments: Vec<&str> = raw.split('/').collect();
        if segments.len() != 3 {
            return Err(ArkError::InvalidSyntax);
        }
        if segments[0] != "ark:" {
            return Err(ArkError::InvalidLabel);
        }
        if segments[1] != self.config.naan {
            return Err(ArkError::UnknownNaan {
                expected: self.config.naan.clone(),
                actual: segments[1].to_string(),
            });
        }

        let name = segments[2];
        let disabled = self.config.subpublisher.is_disabled();

        let (subpublisher, identifier, checksum) = if self.config.hyphenated {
            let mut parts: Vec<&str> = name.split('-').collect();
            if disabled {
                // Keep the 3-part shape with an empty placeholder.
                parts.insert(0, "");
            }
            if parts.len() != 3 {
                return Err(ArkError::InvalidNameSyntax);
            }
            (
                parts[0].to_string(),
                parts[1].to_string(),
                parts[2].to_string(),
            )
        } else {
            // Fixed-width slicing: the checksum is always the last
            // character; short names fall through to the length checks.
            let chars: Vec<char> = name.chars().collect();
            let take =
                |start: usize, len: usize| chars.iter().skip(start).take(len).collect::<String>();
            let checksum = chars.last().map(char::to_string).unwrap_or_default();
            if disabled {
                (String::new(), take(0, 8), checksum)
            } else {
                (take(0, 3), take(3, 8), checksum)
            }
        };

        if !disabled && subpublisher.chars().count() != SUBPUBLISHER_LEN {
            return Err(ArkError::InvalidSubpublisherLength);
        }
        if identifier.chars().count() != generator::IDENTIFIER_LEN {
            return Err(ArkError::InvalidIdentifierLength);
        }
        if checksum.chars().count() != 1 {
            return Err(ArkError::InvalidChecksumLength);
        }

        Ok(Ark {
            ark: raw.to_string(),
            naan: segments[1].to_string(),
            name: name.to_string(),
            subpublisher,
            identifier,
            checksum,
        })
    }

    /// Validates a raw string field by field. Never fails: parse errors
    /// are absorbed into the report.
    pub fn validate(&self, raw: &str) -> ArkReport {
        let mut report = ArkReport::default();

        match self.parse(raw) {
            Ok(ark) => {
                let payload = format!("{}{}{}", ark.naan, ark.subpublisher, ark.identifier);
                let expected = ncda(&payload, &self.config.alphabet);
                report.checksum = ark.checksum.chars().next() == Some(expected);
            }
            Err(err) => {
                report.ark = false;
                match err {
                    ArkError::UnknownNaan { .. } => report.naan = false,
                    ArkError::InvalidNameSyntax => {
                        report.name = false;
                        report.checksum = false;
                        report.subpublisher = false;
                        report.identifier = false;
                    }
                    // A malformed subpublisher or identifier corrupts the
                    // checksum payload as well.
                    ArkError::InvalidSubpublisherLength => {
                        report.subpublisher = false;
                        report.checksum = false;
                    }
                    ArkError::InvalidIdentifierLength => {
                        report.identifier = false;
                        report.checksum = false;
                    }
                    ArkError::InvalidChecksumLength => report.checksum = false,
                    // InvalidSyntax and InvalidLabel condemn only the ARK
                    // as a whole; the other fields are indeterminate, not
                    // contradicted.
                    _ => {}
                }
            }
        }

        // A bad sub-part always invalidates the whole name and the whole ARK.
        if !report.checksum || !report.subpublisher || !report.identifier {
            report.ark = false;
            report.name = false;
        }

        report
    }
}

impl Default for ArkCodec {
    fn default() -> Self {
        Self::new(ArkConfig::default())
    }
}

/// Assembles the textual form from validated parts.
fn format_ark(naan: &str, sub: &str, identifier: &str, checksum: char, hyphenated: bool) -> String {
    let sep = if hyphenated { "-" } else { "" };
    if sub.is_empty() {
        format!("ark:/{naan}/{identifier}{sep}{checksum}")
    } else {
        format!("ark:/{naan}/{sub}{sep}{identifier}{sep}{checksum}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn codec_with(config: ArkConfig) -> ArkCodec {
        ArkCodec::new(config)
    }

    fn default_codec() -> ArkCodec {
        codec_with(ArkConfig {
            subpublisher: Subpublisher::code("39D"),
            ..ArkConfig::default()
        })
    }

    // ------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------

    #[test]
    fn test_generate_with_subpublisher() {
        let codec = default_codec();
        let raw = codec.generate().unwrap();
        assert!(raw.starts_with("ark:/67375/39D-"));

        let ark = codec.parse(&raw).unwrap();
        assert_eq!(ark.naan, "67375");
        assert_eq!(ark.subpublisher, "39D");
        assert_eq!(ark.identifier.chars().count(), 8);
        assert_eq!(ark.checksum.chars().count(), 1);
    }

    #[test]
    fn test_generate_without_subpublisher() {
        let codec = codec_with(ArkConfig {
            subpublisher: Subpublisher::Disabled,
            ..ArkConfig::default()
        });
        let raw = codec.generate().unwrap();

        let ark = codec.parse(&raw).unwrap();
        assert_eq!(ark.subpublisher, "");
        assert_eq!(ark.identifier.chars().count(), 8);
        assert_eq!(ark.checksum.chars().count(), 1);
    }

    #[test]
    fn test_generate_fixed_width() {
        let codec = codec_with(ArkConfig {
            subpublisher: Subpublisher::code("015"),
            hyphenated: false,
            ..ArkConfig::default()
        });
        let raw = codec.generate().unwrap();
        assert!(!raw["ark:/".len()..].contains('-'));

        let ark = codec.parse(&raw).unwrap();
        assert_eq!(ark.subpublisher, "015");
        assert_eq!(ark.name.chars().count(), 12);
    }

    #[test]
    fn test_generate_requires_subpublisher_when_blank() {
        // The default configuration enables the subpublisher segment but
        // leaves the code blank; each call must then supply one.
        let codec = ArkCodec::default();
        assert_eq!(codec.generate(), Err(ArkError::InvalidSubpublisher));

        let raw = codec
            .generate_opts(GenerateOptions {
                subpublisher: Some(Subpublisher::code("001")),
                ..GenerateOptions::default()
            })
            .unwrap();
        assert!(raw.starts_with("ark:/67375/001-"));
    }

    #[rstest]
    #[case("")]
    #[case("1234")]
    #[case("123456")]
    fn test_generate_rejects_bad_naan(#[case] naan: &str) {
        let codec = codec_with(ArkConfig {
            naan: naan.to_string(),
            subpublisher: Subpublisher::code("39D"),
            ..ArkConfig::default()
        });
        assert_eq!(codec.generate(), Err(ArkError::InvalidNaan));
    }

    #[rstest]
    #[case("")]
    #[case("39")]
    #[case("39DX")]
    fn test_generate_rejects_bad_subpublisher(#[case] sub: &str) {
        let codec = codec_with(ArkConfig {
            subpublisher: Subpublisher::code(sub),
            ..ArkConfig::default()
        });
        assert_eq!(codec.generate(), Err(ArkError::InvalidSubpublisher));
    }

    #[test]
    fn test_generate_per_call_overrides() {
        let codec = default_codec();
        let raw = codec
            .generate_opts(GenerateOptions {
                naan: Some("12345".to_string()),
                subpublisher: Some(Subpublisher::code("XYZ")),
                hyphenated: Some(false),
            })
            .unwrap();
        assert!(raw.starts_with("ark:/12345/XYZ"));
        assert!(!raw["ark:/".len()..].contains('-'));
    }

    #[test]
    fn test_generate_deterministic_with_seeded_rng() {
        let codec = default_codec();
        let a = codec
            .generate_with(&mut StdRng::seed_from_u64(7), GenerateOptions::default())
            .unwrap();
        let b = codec
            .generate_with(&mut StdRng::seed_from_u64(7), GenerateOptions::default())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_checksum_validates() {
        let codec = default_codec();
        for seed in 0..50 {
            let raw = codec
                .generate_with(&mut StdRng::seed_from_u64(seed), GenerateOptions::default())
                .unwrap();
            assert!(codec.validate(&raw).is_valid(), "invalid ARK '{raw}'");
        }
    }

    // ------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------

    #[test]
    fn test_parse_hyphenated_with_subpublisher() {
        let ark = default_codec().parse("ark:/67375/39D-L2DM2F95-7").unwrap();
        assert_eq!(
            ark,
            Ark {
                ark: "ark:/67375/39D-L2DM2F95-7".to_string(),
                naan: "67375".to_string(),
                name: "39D-L2DM2F95-7".to_string(),
                subpublisher: "39D".to_string(),
                identifier: "L2DM2F95".to_string(),
                checksum: "7".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_hyphenated_without_subpublisher() {
        let codec = codec_with(ArkConfig {
            naan: "12345".to_string(),
            subpublisher: Subpublisher::Disabled,
            ..ArkConfig::default()
        });
        let ark = codec.parse("ark:/12345/SX52MR0K-4").unwrap();
        assert_eq!(ark.subpublisher, "");
        assert_eq!(ark.identifier, "SX52MR0K");
        assert_eq!(ark.checksum, "4");
        assert_eq!(ark.name, "SX52MR0K-4");
    }

    #[test]
    fn test_parse_fixed_width_without_subpublisher() {
        let codec = codec_with(ArkConfig {
            naan: "12345".to_string(),
            subpublisher: Subpublisher::Disabled,
            hyphenated: false,
            ..ArkConfig::default()
        });
        let ark = codec.parse("ark:/12345/NW4CQCGC4").unwrap();
        assert_eq!(ark.subpublisher, "");
        assert_eq!(ark.identifier, "NW4CQCGC");
        assert_eq!(ark.checksum, "4");
    }

    #[test]
    fn test_parse_fixed_width_with_subpublisher() {
        let codec = codec_with(ArkConfig {
            naan: "12345".to_string(),
            subpublisher: Subpublisher::code("XYZ"),
            hyphenated: false,
            ..ArkConfig::default()
        });
        let ark = codec.parse("ark:/12345/XYZSHML4WGPD").unwrap();
        assert_eq!(ark.subpublisher, "XYZ");
        assert_eq!(ark.identifier, "SHML4WGP");
        assert_eq!(ark.checksum, "D");
    }

    #[rstest]
    #[case("", ArkError::InvalidSyntax)]
    #[case("ark:67375/39D-L2DM2F95-7", ArkError::InvalidSyntax)]
    #[case("ark:/67375/39D/L2DM2F95-7", ArkError::InvalidSyntax)]
    #[case("ook:/67375/39D-L2DM2F95-7", ArkError::InvalidLabel)]
    #[case("ark:/67375/39D-L2DM2F95", ArkError::InvalidNameSyntax)]
    #[case("ark:/67375/39D-L2DM2F95-7-X", ArkError::InvalidNameSyntax)]
    #[case("ark:/67375/39-L2DM2F95-4", ArkError::InvalidSubpublisherLength)]
    #[case("ark:/67375/39D-L2-4", ArkError::InvalidIdentifierLength)]
    #[case("ark:/67375/39D-L2DM2F95-77", ArkError::InvalidChecksumLength)]
    #[case("ark:/67375/39D-L2DM2F95-", ArkError::InvalidChecksumLength)]
    fn test_parse_errors(#[case] raw: &str, #[case] expected: ArkError) {
        assert_eq!(default_codec().parse(raw), Err(expected));
    }

    #[test]
    fn test_parse_unknown_naan() {
        let err = default_codec()
            .parse("ark:/99999/39D-L2DM2F95-7")
            .unwrap_err();
        assert_eq!(
            err,
            ArkError::UnknownNaan {
                expected: "67375".to_string(),
                actual: "99999".to_string(),
            }
        );
        assert_eq!(err.code(), "ark-naan");
    }

    #[test]
    fn test_parse_does_not_verify_checksum() {
        // 'Z' is structurally fine even though the correct check
        // character differs; only validate() recomputes it.
        let ark = default_codec().parse("ark:/67375/39D-L2DM2F95-Z").unwrap();
        assert_eq!(ark.checksum, "Z");
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    fn report(
        ark: bool,
        naan: bool,
        name: bool,
        subpublisher: bool,
        identifier: bool,
        checksum: bool,
    ) -> ArkReport {
        ArkReport {
            ark,
            naan,
            name,
            subpublisher,
            identifier,
            checksum,
        }
    }

    #[test]
    fn test_validate_valid_ark() {
        let result = default_codec().validate("ark:/67375/39D-L2DM2F95-S");
        assert_eq!(result, report(true, true, true, true, true, true));
    }

    #[test]
    fn test_validate_wrong_checksum() {
        let result = default_codec().validate("ark:/67375/39D-L2DM2F95-5");
        assert_eq!(result, report(false, true, false, true, true, false));
    }

    #[test]
    fn test_validate_mutated_identifier_flips_checksum() {
        let codec = default_codec();
        assert!(codec.validate("ark:/67375/39D-6W3GQPXD-V").is_valid());
        // One substituted identifier character breaks the checksum.
        let result = codec.validate("ark:/67375/39D-6W3GQPXD-A");
        assert_eq!(result, report(false, true, false, true, true, false));
    }

    #[test]
    fn test_validate_short_identifier() {
        let result = default_codec().validate("ark:/67375/39D-6W3PXD-J");
        assert_eq!(result, report(false, true, false, true, false, false));
    }

    #[test]
    fn test_validate_short_subpublisher() {
        let result = default_codec().validate("ark:/67375/39-6W3GQPXD-J");
        assert_eq!(result, report(false, true, false, false, true, false));
    }

    #[test]
    fn test_validate_wrong_naan() {
        // Only the ARK and NAAN are condemned; the rest is indeterminate.
        let result = default_codec().validate("ark:/37375/39D-L2DM2F95-7");
        assert_eq!(result, report(false, false, true, true, true, true));
    }

    #[rstest]
    #[case("not-an-ark")]
    #[case("ark:67375/39D-L2DM2F95-7")]
    #[case("ook:/67375/39D-L2DM2F95-7")]
    fn test_validate_syntax_and_label_condemn_only_ark(#[case] raw: &str) {
        let result = default_codec().validate(raw);
        assert_eq!(result, report(false, true, true, true, true, true));
    }

    #[test]
    fn test_validate_bad_name_syntax() {
        let result = default_codec().validate("ark:/67375/39DL2DM2F95S");
        assert_eq!(result, report(false, true, false, false, false, false));
    }

    #[test]
    fn test_validate_missing_checksum() {
        let result = default_codec().validate("ark:/67375/39D-L2DM2F95-");
        assert_eq!(result, report(false, true, false, true, true, false));
    }

    #[test]
    fn test_validate_fixed_width() {
        let codec = codec_with(ArkConfig {
            naan: "12345".to_string(),
            subpublisher: Subpublisher::code("XYZ"),
            hyphenated: false,
            ..ArkConfig::default()
        });
        assert!(codec.validate("ark:/12345/XYZSHML4WGP2").is_valid());
        assert!(!codec.validate("ark:/12345/XYZSHML4WGP3").is_valid());
    }

    #[test]
    fn test_validate_out_of_alphabet_surfaces_as_checksum_mismatch() {
        // 'A' is outside the alphabet. It is tolerated structurally and
        // counts as 0 in the payload, so the stored checksum no longer
        // matches (with high probability), but no structural field flips.
        let codec = default_codec();
        let result = codec.validate("ark:/67375/39D-A2DM2F95-S");
        assert_eq!(result.subpublisher, true);
        assert_eq!(result.identifier, true);
        assert_eq!(result.naan, true);
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    fn arb_subpublisher() -> impl Strategy<Value = Subpublisher> {
        prop_oneof![
            Just(Subpublisher::Disabled),
            proptest::collection::vec(0..30usize, 3).prop_map(|ix| {
                let alphabet = Alphabet::default();
                Subpublisher::Code(ix.into_iter().map(|i| alphabet.char_at(i)).collect())
            }),
        ]
    }

    proptest! {
        #[test]
        fn prop_generated_arks_roundtrip(
            seed in any::<u64>(),
            subpublisher in arb_subpublisher(),
            hyphenated in any::<bool>(),
        ) {
            let codec = codec_with(ArkConfig {
                subpublisher: subpublisher.clone(),
                hyphenated,
                ..ArkConfig::default()
            });
            let mut rng = StdRng::seed_from_u64(seed);
            let raw = codec.generate_with(&mut rng, GenerateOptions::default()).unwrap();

            let ark = codec.parse(&raw).unwrap();
            prop_assert_eq!(&ark.ark, &raw);
            prop_assert_eq!(&ark.naan, "67375");
            prop_assert_eq!(ark.identifier.chars().count(), 8);
            prop_assert_eq!(ark.checksum.chars().count(), 1);
            match &subpublisher {
                Subpublisher::Disabled => prop_assert_eq!(&ark.subpublisher, ""),
                Subpublisher::Code(code) => prop_assert_eq!(&ark.subpublisher, code),
            }

            prop_assert!(codec.validate(&raw).is_valid());
        }
    }
}
