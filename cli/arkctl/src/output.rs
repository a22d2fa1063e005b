//! Output formatting for CLI commands.

use ark_codec::{Ark, ArkReport};
use clap::ValueEnum;
use colored::Colorize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable field listing.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// Print a parsed ARK record.
pub fn print_record(record: &Ark, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            print_field("ark", &record.ark);
            print_field("naan", &record.naan);
            print_field("name", &record.name);
            print_field("subpublisher", &record.subpublisher);
            print_field("identifier", &record.identifier);
            print_field("checksum", &record.checksum);
        }
        OutputFormat::Json => print_json(record),
    }
}

/// Print a validation report.
pub fn print_report(raw: &str, report: &ArkReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{raw}");
            print_check("ark", report.ark);
            print_check("naan", report.naan);
            print_check("name", report.name);
            print_check("subpublisher", report.subpublisher);
            print_check("identifier", report.identifier);
            print_check("checksum", report.checksum);
        }
        OutputFormat::Json => print_json(report),
    }
}

fn print_field(label: &str, value: &str) {
    println!("{:<14} {}", label.dimmed(), value);
}

fn print_check(label: &str, ok: bool) {
    let mark = if ok { "ok".green() } else { "fail".red() };
    println!("{:<14} {}", label.dimmed(), mark);
}

fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{} {e}", "serialization error:".red()),
    }
}
