//! Command-line interface for ccdex.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::document::extract;
use crate::error::Result;

/// ccdex - Extract structured records from clinical document XML.
#[derive(Parser)]
#[command(name = "ccdex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a clinical document and print the extracted JSON.
    Parse {
        /// Path to the XML or JSON document
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, pretty } => parse_command(&file, pretty),
    }
}

/// Execute the parse command.
fn parse_command(file: &Path, pretty: bool) -> Result<()> {
    let source = fs::read_to_string(file)?;
    let document = extract(&source)?;

    // summary on stderr so stdout stays pipeable JSON
    eprintln!(
        "{} {} ({} problem{})",
        style("Parsed").bold(),
        style(document.document_type.as_str()).cyan(),
        document.problems.len(),
        if document.problems.len() == 1 { "" } else { "s" }
    );

    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{json}");

    Ok(())
}
