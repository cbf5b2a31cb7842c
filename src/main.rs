//! Anonymization CLI application.
//!
//! Binary front end for the anonymizer library: argument parsing, logging
//! setup, and batch reporting. Running without a subcommand drops into an
//! interactive menu offering the two batch directions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use anonymizer::{AnonymizePipeline, BatchSummary, RestorePipeline, DEFAULT_MAPPING_FILE};

/// Default directory scanned for source documents.
const DEFAULT_INPUT_DIR: &str = "out";

/// Default directory receiving anonymized documents.
const DEFAULT_ANONYMIZED_DIR: &str = "anonymized";

/// Default directory receiving restored documents.
const DEFAULT_RESTORED_DIR: &str = "restored";

/// Document Anonymization Tool
///
/// Anonymize the name and student id carried in a batch of documents, or
/// restore a previously anonymized batch from its saved mapping.
#[derive(Parser)]
#[command(name = "anonymizer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Anonymize documents and write the re-identification mapping
    Anonymize {
        /// Directory containing the source documents
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
        input: PathBuf,

        /// Directory receiving the anonymized documents
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_ANONYMIZED_DIR)]
        output: PathBuf,

        /// Path of the mapping document to write
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_MAPPING_FILE)]
        mapping: PathBuf,
    },

    /// Restore anonymized documents using a saved mapping
    Restore {
        /// Directory containing the anonymized documents
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_ANONYMIZED_DIR)]
        input: PathBuf,

        /// Directory receiving the restored documents
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_RESTORED_DIR)]
        output: PathBuf,

        /// Path of the mapping document to read
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_MAPPING_FILE)]
        mapping: PathBuf,
    },
}

/// Selection made on the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Anonymize,
    Restore,
}

/// Maps raw menu input to a choice. Anything other than `1` or `2` is
/// rejected.
fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Anonymize),
        "2" => Some(MenuChoice::Restore),
        _ => None,
    }
}

/// Shows the two-action menu and reads one selection from stdin.
fn prompt_menu_choice() -> Result<Option<MenuChoice>> {
    println!("1. anonymize documents");
    println!("2. restore documents");
    print!("Select an action (1 or 2): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(parse_menu_choice(&line))
}

fn run_anonymize(input: &Path, output: &Path, mapping: &Path) -> Result<()> {
    let mut pipeline = AnonymizePipeline::new();
    match pipeline.run(input, output, mapping) {
        Ok(summary) => {
            report_summary("anonymized", &summary, output);
            println!("✓ Mapping saved → {}", mapping.display());
        }
        Err(err) => eprintln!("✗ Anonymization aborted: {err}"),
    }
    Ok(())
}

fn run_restore(input: &Path, output: &Path, mapping: &Path) -> Result<()> {
    let pipeline = RestorePipeline::new();
    match pipeline.run(input, output, mapping) {
        Ok(summary) => report_summary("restored", &summary, output),
        Err(err) => eprintln!("✗ Restoration aborted: {err}"),
    }
    Ok(())
}

/// Renders the end-of-run report.
fn report_summary(action: &str, summary: &BatchSummary, output: &Path) {
    if summary.total() == 0 {
        println!("⚠ No documents found to process");
        return;
    }

    println!(
        "✓ Successfully {action} {} document(s) → {}",
        summary.processed,
        output.display()
    );
    if summary.copied_through > 0 {
        println!(
            "⚠ {} file(s) copied through unchanged",
            summary.copied_through
        );
    }
    if summary.failed > 0 {
        println!("⚠ {} file(s) skipped after errors", summary.failed);
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Anonymize {
            input,
            output,
            mapping,
        }) => run_anonymize(input, output, mapping),
        Some(Commands::Restore {
            input,
            output,
            mapping,
        }) => run_restore(input, output, mapping),
        None => match prompt_menu_choice()? {
            Some(MenuChoice::Anonymize) => run_anonymize(
                Path::new(DEFAULT_INPUT_DIR),
                Path::new(DEFAULT_ANONYMIZED_DIR),
                Path::new(DEFAULT_MAPPING_FILE),
            ),
            Some(MenuChoice::Restore) => run_restore(
                Path::new(DEFAULT_ANONYMIZED_DIR),
                Path::new(DEFAULT_RESTORED_DIR),
                Path::new(DEFAULT_MAPPING_FILE),
            ),
            None => {
                eprintln!("✗ Invalid selection: enter 1 or 2");
                Ok(())
            }
        },
    }
}
