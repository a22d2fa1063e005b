//! arkctl - CLI for the ARK identifier codec.
//!
//! Generates, parses, and validates ARK persistent identifiers from the
//! command line. A thin surface over the `ark-codec` library; all
//! semantics live there.

use anyhow::Result;
use clap::Parser;

mod commands;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    std::process::exit(cli.run()?);
}
