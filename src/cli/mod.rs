//! Command-line interface for rt-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Match a feature list against a compound library by name and retention time
//! - **inventory**: Look up a list of molecules in a storage inventory
//!
//! ## Usage
//!
//! ```text
//! # Exact name matching, retention times within 0.5
//! rt-matcher match -F features.csv -L library.csv
//!
//! # Fuzzy names, confirm each near match interactively, save to file
//! rt-matcher match -F features.csv -L library.csv --use-fuzzy-matching -i -o matches.csv
//!
//! # Where are these molecules stored?
//! rt-matcher inventory -m molecules.txt -I inventory.csv --use-fuzzy-matching
//! ```

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::parsing::delimiter_for;

pub mod inventory;
pub mod matches;
pub mod prompt;

#[derive(Parser)]
#[command(name = "rt-matcher")]
#[command(author = "Leo Ghafari")]
#[command(version)]
#[command(about = "Match compounds between lists based on their name and RT values")]
#[command(
    long_about = "rt-matcher finds matches between two lists of compounds (e.g. detected features and a reference library).\n\nEach list is a CSV file with entries formatted as 'name, RT'. Two compounds match when their names match (exactly, or within one edit with fuzzy matching) and their retention times differ by less than the tolerance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match features against a compound library
    Match(matches::MatchArgs),

    /// Find molecules in an inventory
    Inventory(inventory::InventoryArgs),
}

/// Name matching flags shared by all subcommands
#[derive(clap::Args, Debug, Clone)]
pub struct NameMatchingArgs {
    /// Enable fuzzy matching. Names within one edit of each other
    /// (Levenshtein distance) are treated as matches
    #[arg(long)]
    pub use_fuzzy_matching: bool,

    /// Ask for confirmation before accepting each fuzzy match
    #[arg(short, long)]
    pub interactive: bool,

    /// Field delimiter (defaults to tab for .tsv files, comma otherwise)
    #[arg(long)]
    pub delimiter: Option<char>,
}

impl NameMatchingArgs {
    pub fn strategy(&self) -> crate::core::NameStrategy {
        if self.use_fuzzy_matching {
            crate::core::NameStrategy::Fuzzy
        } else {
            crate::core::NameStrategy::Exact
        }
    }

    pub fn delimiter_for(&self, path: &Path) -> char {
        self.delimiter.unwrap_or_else(|| delimiter_for(path))
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Render an optional retention time the way results show it
pub fn format_rt(rt: Option<f64>) -> String {
    rt.map_or_else(|| "NA".to_string(), |v| v.to_string())
}
