// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewmatch CLI - batch view-name matching from the command line.
//!
//! Consumers that hold a live sheet model enumerate their view labels,
//! run the matcher here (or through the library), and apply the returned
//! pairings to their own objects. The CLI works on plain label lists:
//!
//! - `viewmatch match <SOURCE> --candidates <LABEL>... [--mode MODE]`
//! - `viewmatch batch <FILE> --source-sheet <NAME> [--mode MODE]`
//! - `viewmatch next-number <FILE> [--prefix PREFIX]`
//!
//! `batch` reads a JSON file of the form
//! `{ "sheets": { "<sheet name>": ["<view label>", ...], ... } }`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use viewmatch_core::{find_best_match, next_sheet_number, plan_sheet_matches, MatchMode};

mod output;

#[derive(Parser)]
#[command(name = "viewmatch", version, about = "View-name matching for BIM sheet workflows")]
struct Cli {
    /// Raise log verbosity to debug (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match one source label against candidate labels
    Match {
        /// Source view label
        source: String,

        /// Candidate labels, scanned in the order given
        #[arg(short, long, num_args = 1.., required = true)]
        candidates: Vec<String>,

        /// Matching mode: exact, pattern or floor
        #[arg(short, long, default_value = "pattern")]
        mode: String,
    },

    /// Plan matches from one sheet's views to every other sheet
    Batch {
        /// JSON file with the sheets and their view labels
        file: PathBuf,

        /// Sheet whose views are the match sources
        #[arg(short, long)]
        source_sheet: String,

        /// Matching mode: exact, pattern or floor
        #[arg(short, long, default_value = "pattern")]
        mode: String,
    },

    /// Print the next free sheet number for a prefix
    NextNumber {
        /// Text file with one existing sheet number per line
        file: PathBuf,

        /// Sheet number prefix, e.g. "A"
        #[arg(short, long, default_value = "")]
        prefix: String,
    },
}

/// Batch input: sheet name to ordered view labels.
#[derive(Debug, Deserialize)]
struct BatchInput {
    sheets: BTreeMap<String, Vec<String>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Match {
            source,
            candidates,
            mode,
        } => run_match(&source, &candidates, &mode, cli.json),
        Command::Batch {
            file,
            source_sheet,
            mode,
        } => run_batch(&file, &source_sheet, &mode, cli.json),
        Command::NextNumber { file, prefix } => run_next_number(&file, &prefix, cli.json),
    }
}

fn parse_mode(mode: &str) -> Result<MatchMode> {
    mode.parse::<MatchMode>().map_err(Into::into)
}

fn run_match(source: &str, candidates: &[String], mode: &str, json: bool) -> Result<()> {
    let mode = parse_mode(mode)?;
    let result = find_best_match(source, candidates, mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_match(source, result.as_ref());
    }
    Ok(())
}

fn run_batch(file: &Path, source_sheet: &str, mode: &str, json: bool) -> Result<()> {
    let mode = parse_mode(mode)?;

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let input: BatchInput = serde_json::from_str(&content)
        .with_context(|| format!("invalid batch input in {}", file.display()))?;

    tracing::debug!(
        sheets = input.sheets.len(),
        source_sheet,
        %mode,
        "planning sheet matches"
    );

    let report = plan_sheet_matches(&input.sheets, source_sheet, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }
    Ok(())
}

fn run_next_number(file: &Path, prefix: &str, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let existing: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let next = next_sheet_number(&existing, prefix);

    if json {
        println!("{}", serde_json::json!({ "prefix": prefix, "next": next }));
    } else {
        output::print_next_number(prefix, next);
    }
    Ok(())
}
