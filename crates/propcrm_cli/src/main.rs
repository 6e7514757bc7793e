//! Command-line probe over `propcrm_core`.
//!
//! # Responsibility
//! - Confirm core linkage (`ping`, version).
//! - List and decode vocabulary codes with each vocabulary's own policy.
//!
//! # Invariants
//! - Exit code 2 for unknown vocabularies and rejected codes.
//! - File logging starts only when `PROPCRM_LOG_DIR` is set; otherwise
//!   warnings and errors go to stderr.

use clap::{Parser, Subcommand};
use log::info;
use propcrm_core::{
    default_log_level, entries, init_logging, init_stderr_logging, lookup, parse_vocabulary_kind,
    VocabularyEntry, VocabularyKind,
};
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "PROPCRM_LOG_LEVEL";
const LOG_DIR_ENV: &str = "PROPCRM_LOG_DIR";
const STDERR_LOG_LEVEL: &str = "warn";
const USAGE_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "propcrm", version, about = "PayProp vocabulary probe")]
struct Cli {
    /// Print entries as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every known vocabulary name.
    Vocabularies,
    /// Print every entry of one vocabulary.
    List { vocabulary: String },
    /// Decode one wire code.
    Decode { vocabulary: String, code: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    start_logging_from_env();

    match cli.command {
        None => {
            println!("propcrm_core ping={}", propcrm_core::ping());
            println!("propcrm_core version={}", propcrm_core::core_version());
            ExitCode::SUCCESS
        }
        Some(Command::Vocabularies) => {
            for kind in VocabularyKind::all() {
                println!("{}", kind.as_str());
            }
            ExitCode::SUCCESS
        }
        Some(Command::List { vocabulary }) => match parse_vocabulary_kind(&vocabulary) {
            Ok(kind) => {
                let listed = entries(kind);
                if cli.json {
                    print_json(&listed)
                } else {
                    listed.iter().for_each(print_entry);
                    ExitCode::SUCCESS
                }
            }
            Err(err) => usage_error(&err),
        },
        Some(Command::Decode { vocabulary, code }) => {
            let kind = match parse_vocabulary_kind(&vocabulary) {
                Ok(kind) => kind,
                Err(err) => return usage_error(&err),
            };
            match lookup(kind, &code) {
                Ok(entry) if cli.json => print_json(&entry),
                Ok(entry) => {
                    print_entry(&entry);
                    ExitCode::SUCCESS
                }
                Err(err) => usage_error(&err),
            }
        }
    }
}

fn start_logging_from_env() {
    let level = std::env::var(LOG_LEVEL_ENV).ok();
    let started = match std::env::var(LOG_DIR_ENV) {
        Ok(log_dir) => init_logging(level.as_deref().unwrap_or(default_log_level()), &log_dir),
        Err(_) => init_stderr_logging(level.as_deref().unwrap_or(STDERR_LOG_LEVEL)),
    };
    match started {
        Ok(()) => info!("event=cli_start module=cli status=ok"),
        Err(err) => eprintln!("propcrm: logging disabled: {err}"),
    }
}

fn print_entry(entry: &VocabularyEntry) {
    println!(
        "{}\t{}\t{}\t{}",
        entry.vocabulary, entry.code, entry.identity, entry.label
    );
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("propcrm: {err}");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(err: &dyn std::error::Error) -> ExitCode {
    eprintln!("propcrm: {err}");
    ExitCode::from(USAGE_ERROR)
}
