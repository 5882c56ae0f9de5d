use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::cli::prompt::ConfirmPrompt;
use crate::cli::{NameMatchingArgs, OutputFormat};
use crate::core::{Compound, StockEntry, Tolerance};
use crate::matching::{CompoundMatcher, MatchOutcome, MatchingConfig};
use crate::parsing::delimited::{parse_inventory_file, parse_name_list_file};

#[derive(Args)]
pub struct InventoryArgs {
    /// Input file listing the molecules to look for, one full name per line
    #[arg(short, long, required = true)]
    pub molecules: PathBuf,

    /// CSV input file for the inventory, formatted as 'name, location'
    #[arg(short = 'I', long, required = true)]
    pub inventory: PathBuf,

    #[command(flatten)]
    pub names: NameMatchingArgs,

    /// Output file to store matches in. If not provided, matches are only displayed
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Matches for one molecule, in inventory order
#[derive(Debug)]
pub struct Lookup<'a> {
    pub molecule: &'a Compound,
    pub found: Vec<MatchOutcome<'a, Compound, StockEntry>>,
}

/// Group matches under the molecule they belong to.
///
/// Every molecule gets an entry, in input order, even when nothing matched.
pub fn group_by_molecule<'a>(
    molecules: &'a [Compound],
    matches: &[MatchOutcome<'a, Compound, StockEntry>],
) -> Vec<Lookup<'a>> {
    let mut remaining = matches.iter().peekable();

    molecules
        .iter()
        .map(|molecule| {
            let mut found = Vec::new();
            while let Some(m) = remaining.next_if(|m| std::ptr::eq(m.left, molecule)) {
                found.push(*m);
            }
            Lookup { molecule, found }
        })
        .collect()
}

/// Execute inventory subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be parsed, the output cannot be written,
/// or interactive confirmation fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InventoryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let molecules = parse_name_list_file(&args.molecules)?;
    let inventory =
        parse_inventory_file(&args.inventory, args.names.delimiter_for(&args.inventory))?;

    if verbose {
        eprintln!(
            "Looking up {} molecules in {} inventory entries",
            molecules.len(),
            inventory.len()
        );
    }

    // Inventories have no retention times, so every name match is reported
    let engine = CompoundMatcher::new(MatchingConfig {
        strategy: args.names.strategy(),
        tolerance: Tolerance::Unbounded,
        name_only: true,
    });

    let matches = if args.names.interactive {
        let mut prompt = ConfirmPrompt::stdio();
        engine.find_matches_confirmed(&molecules, &inventory, |a, b| prompt.confirm(a, b))?
    } else {
        engine.find_matches(&molecules, &inventory)
    };

    let lookups = group_by_molecule(&molecules, &matches);

    if let Some(path) = &args.output {
        let mut out = BufWriter::new(File::create(path)?);
        save_lookups(&lookups, &mut out)?;
        out.flush()?;
        if verbose {
            eprintln!("{} entries written to {}", matches.len(), path.display());
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_lookups(&lookups),
        OutputFormat::Json => print_json_lookups(&lookups)?,
        OutputFormat::Tsv => print_tsv_lookups(&lookups),
    }

    Ok(())
}

/// Write a `molecule, location, matching name` table
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn save_lookups(lookups: &[Lookup<'_>], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "molecule, location, matching name")?;
    for lookup in lookups {
        for m in &lookup.found {
            writeln!(
                out,
                "{}, {}, {}",
                lookup.molecule.name, m.right.location, m.right.name
            )?;
        }
    }
    Ok(())
}

fn print_text_lookups(lookups: &[Lookup<'_>]) {
    for lookup in lookups {
        if lookup.found.is_empty() {
            println!("{} can not be found", lookup.molecule.name);
            continue;
        }

        println!("{} can be found in:", lookup.molecule.name);
        for m in &lookup.found {
            println!("\t-{}  (as {})", m.right.location, m.right.name);
        }
    }
}

fn print_json_lookups(lookups: &[Lookup<'_>]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = lookups
        .iter()
        .map(|lookup| {
            serde_json::json!({
                "molecule": lookup.molecule.name,
                "found": lookup
                    .found
                    .iter()
                    .map(|m| serde_json::json!({
                        "location": m.right.location,
                        "name": m.right.name,
                        "kind": m.kind(),
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_lookups(lookups: &[Lookup<'_>]) {
    println!("molecule\tlocation\tmatching_name\tkind");
    for lookup in lookups {
        for m in &lookup.found {
            println!(
                "{}\t{}\t{}\t{}",
                lookup.molecule.name,
                m.right.location,
                m.right.name,
                m.kind()
            );
        }
    }
}
