// src/cli.rs
use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use std::fs;
use std::path::PathBuf;

use crate::core::analyzer::analyze;
use crate::utils::{print_detail, print_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyze (must end in .txt)
    pub file: Option<PathBuf>,

    /// Show the extended report (paragraphs, word lengths, common words)
    #[arg(short, long)]
    pub detail: bool,

    /// Print the statistics as JSON instead of the text report
    #[arg(short, long)]
    pub json: bool,
}

/// Runs the tool: validates the path, reads the file, computes the
/// statistics and prints the requested report.
///
/// Without a file argument the usage text is printed and the run counts
/// as a success.
///
/// # Errors
///
/// This function may return an error if:
/// * The path does not end in `.txt`
/// * The path does not refer to an existing file
/// * The file cannot be read
pub fn run(args: Args) -> Result<()> {
    let Some(path) = args.file else {
        Args::command().print_help()?;
        return Ok(());
    };

    if !path.to_string_lossy().ends_with(".txt") {
        bail!("Not a .txt file: {}", path.display());
    }

    if !path.is_file() {
        bail!("File not found: {}", path.display());
    }

    let bytes =
        fs::read(&path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let file_name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    let stats = analyze(&file_name, &bytes);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_report(&stats);
        if args.detail {
            print_detail(&stats);
        }
    }

    Ok(())
}
