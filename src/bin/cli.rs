//! Command-line interface for the sbmldoc library
//!
//! This binary provides a CLI to inspect and convert SBML Level 1 documents:
//! - Printing a summary of a document's model
//! - Resolving every by-name reference and reporting the ones that fail
//! - Converting between the XML and JSON renditions
//!
//! # Usage
//!
//! ```bash
//! # Print a document summary
//! sbmldoc info model.xml
//!
//! # Resolve all by-name references
//! sbmldoc validate model.xml
//!
//! # Convert between XML and JSON
//! sbmldoc convert --input model.xml --output model.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::error;
use sbmldoc::prelude::*;

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Print a summary of an SBML document
    Info {
        /// Path to the SBML file (XML or JSON)
        path: PathBuf,
    },
    /// Resolve every by-name reference of a document's model
    Validate {
        /// Path to the SBML file (XML or JSON)
        path: PathBuf,
    },
    /// Convert a document between the XML and JSON renditions
    Convert {
        /// Path to the input file (format chosen by extension)
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the output file (format chosen by extension)
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Main entry point for the CLI application
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Info { path } => info(path),
        Commands::Validate { path } => validate(path),
        Commands::Convert { input, output } => convert(input, output),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Loads a document, choosing the rendition by file extension.
fn load(path: &Path) -> Result<SbmlDocument, IOError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        _ => load_sbml(path),
    }
}

fn info(path: &Path) -> Result<ExitCode, IOError> {
    let document = load(path)?;
    println!("{document}");
    Ok(ExitCode::SUCCESS)
}

fn validate(path: &Path) -> Result<ExitCode, IOError> {
    let document = load(path)?;
    let model = document.require_model()?;

    let report = validate_references(model);
    if report.is_ok() {
        println!("{}", "all references resolved".green());
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &report.issues {
        println!("{} {issue}", "unresolved:".red().bold());
    }
    println!("{} issue(s) found", report.issues.len());
    Ok(ExitCode::FAILURE)
}

fn convert(input: &Path, output: &Path) -> Result<ExitCode, IOError> {
    let document = load(input)?;
    match output.extension().and_then(|ext| ext.to_str()) {
        Some("json") => save_json(output, &document)?,
        _ => save_sbml(output, &document)?,
    }
    println!(
        "wrote {} ({})",
        output.display(),
        if output.extension().and_then(|e| e.to_str()) == Some("json") {
            "json"
        } else {
            "xml"
        }
    );
    Ok(ExitCode::SUCCESS)
}
