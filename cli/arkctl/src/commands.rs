//! CLI commands.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use ark_codec::{Alphabet, ArkCodec, ArkConfig, ArkError, Subpublisher};

use crate::output::{self, OutputFormat};

/// Generate, parse, and validate ARK persistent identifiers.
#[derive(Debug, Parser)]
#[command(name = "arkctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name Assigning Authority Number (5 characters).
    #[arg(long, global = true, env = "ARKCTL_NAAN")]
    naan: Option<String>,

    /// Subpublisher code (3 characters).
    #[arg(long, global = true, env = "ARKCTL_SUBPUBLISHER")]
    subpublisher: Option<String>,

    /// Omit the subpublisher segment entirely.
    #[arg(long, global = true, conflicts_with = "subpublisher")]
    no_subpublisher: bool,

    /// Identifier alphabet (ordered, unique characters).
    #[arg(long, global = true)]
    alphabet: Option<String>,

    /// Join segments without hyphens (fixed-width form).
    #[arg(long, global = true)]
    no_hyphen: bool,

    /// Output format (text or json).
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate fresh ARKs.
    Generate {
        /// Number of ARKs to generate.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Parse an ARK into its structural fields.
    Parse {
        /// The raw ARK string.
        ark: String,
    },

    /// Validate an ARK field by field. Exits non-zero when any field fails.
    Validate {
        /// The raw ARK string.
        ark: String,
    },
}

impl Cli {
    /// Runs the selected command, returning the process exit code.
    pub fn run(self) -> Result<i32> {
        let codec = ArkCodec::new(self.config()?);

        match self.command {
            Commands::Generate { count } => {
                for _ in 0..count {
                    println!("{}", codec.generate().map_err(with_code)?);
                }
            }
            Commands::Parse { ref ark } => {
                let record = codec.parse(ark).map_err(with_code)?;
                output::print_record(&record, self.format);
            }
            Commands::Validate { ref ark } => {
                let report = codec.validate(ark);
                output::print_report(ark, &report, self.format);
                if !report.is_valid() {
                    return Ok(1);
                }
            }
        }

        Ok(0)
    }

    /// Maps the global flags onto a codec configuration.
    fn config(&self) -> Result<ArkConfig> {
        let mut config = ArkConfig::default();
        if let Some(naan) = &self.naan {
            config.naan = naan.clone();
        }
        if self.no_subpublisher {
            config.subpublisher = Subpublisher::Disabled;
        } else if let Some(code) = &self.subpublisher {
            config.subpublisher = Subpublisher::code(code);
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = Alphabet::new(alphabet).map_err(with_code)?;
        }
        if self.no_hyphen {
            config.hyphenated = false;
        }
        Ok(config)
    }
}

/// Attaches the symbolic error code to the message.
fn with_code(err: ArkError) -> anyhow::Error {
    anyhow!("{err} [{}]", err.code())
}
