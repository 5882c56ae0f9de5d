use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::prompt::ConfirmPrompt;
use crate::cli::{format_rt, NameMatchingArgs, OutputFormat};
use crate::core::types::{Tolerance, DEFAULT_TOLERANCE};
use crate::matching::{CompoundMatcher, MatchOutcome, MatchingConfig};
use crate::parsing::delimited::parse_compound_file;
use crate::utils::validation::validate_tolerance;

#[derive(Args)]
pub struct MatchArgs {
    /// CSV input file for the list of features
    #[arg(short = 'F', long, required = true)]
    pub features: PathBuf,

    /// CSV input file for the compound library
    #[arg(short = 'L', long, required = true)]
    pub library: PathBuf,

    /// RT tolerance threshold. Two compounds match if their names match and
    /// their RT values differ by strictly less than this amount
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Accept any RT difference, as long as both RT values are known
    #[arg(long, conflicts_with = "tolerance")]
    pub any_rt: bool,

    /// Report name matches even when their RT values disagree or are missing
    #[arg(long)]
    pub name_only: bool,

    #[command(flatten)]
    pub names: NameMatchingArgs,

    /// Output file to store matches in. If not provided, matches are only displayed
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl MatchArgs {
    /// Build the engine configuration from command line flags
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or not finite.
    pub fn config(&self) -> anyhow::Result<MatchingConfig> {
        let tolerance = if self.any_rt {
            Tolerance::Unbounded
        } else {
            Tolerance::Within(validate_tolerance(self.tolerance)?)
        };

        Ok(MatchingConfig {
            strategy: self.names.strategy(),
            tolerance,
            name_only: self.name_only,
        })
    }
}

/// Execute match subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be parsed, the output cannot be written,
/// or interactive confirmation fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.config()?;

    let features = parse_compound_file(&args.features, args.names.delimiter_for(&args.features))?;
    let library = parse_compound_file(&args.library, args.names.delimiter_for(&args.library))?;

    if verbose {
        eprintln!(
            "Loaded {} features and {} library compounds",
            features.len(),
            library.len()
        );
        eprintln!(
            "Matching names {:?}, RT tolerance {}{}",
            config.strategy,
            config.tolerance,
            if config.name_only { " (name only)" } else { "" }
        );
    }

    if args.names.interactive && !args.names.use_fuzzy_matching {
        warn!("--interactive has no effect without --use-fuzzy-matching");
    }

    let engine = CompoundMatcher::new(config);
    let matches = if args.names.interactive {
        let mut prompt = ConfirmPrompt::stdio();
        engine.find_matches_confirmed(&features, &library, |a, b| prompt.confirm(a, b))?
    } else {
        engine.find_matches(&features, &library)
    };

    if let Some(path) = &args.output {
        let mut out = BufWriter::new(File::create(path)?);
        save_matches(&matches, &mut out)?;
        out.flush()?;
        println!("{} entries written...", matches.len());
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_matches(&matches),
        OutputFormat::Json => print_json_matches(&matches, &config)?,
        OutputFormat::Tsv => print_tsv_matches(&matches),
    }

    Ok(())
}

/// Write matches as `name, rt, name, rt, QUALIFIER` rows
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn save_matches(matches: &[MatchOutcome<'_>], out: &mut impl Write) -> std::io::Result<()> {
    for m in matches {
        writeln!(
            out,
            "{}, {}, {}, {}, {}",
            m.left.name,
            format_rt(m.left.retention_time),
            m.right.name,
            format_rt(m.right.retention_time),
            m.kind()
        )?;
    }
    Ok(())
}

fn print_text_matches(matches: &[MatchOutcome<'_>]) {
    if matches.is_empty() {
        eprintln!("No matches found.");
        return;
    }

    for m in matches {
        println!(
            "{} match found: {} (RT {}) -- {} (RT {})",
            m.kind(),
            m.left.name,
            format_rt(m.left.retention_time),
            m.right.name,
            format_rt(m.right.retention_time)
        );
    }
}

fn print_json_matches(matches: &[MatchOutcome<'_>], config: &MatchingConfig) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "config": config,
        "match_count": matches.len(),
        "matches": matches
            .iter()
            .map(|m| serde_json::json!({
                "feature": m.left,
                "library": m.right,
                "kind": m.kind(),
                "is_within_tolerance": m.is_within_tolerance,
            }))
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_matches(matches: &[MatchOutcome<'_>]) {
    println!("feature\tfeature_rt\tlibrary\tlibrary_rt\tkind\twithin_tolerance");
    for m in matches {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            m.left.name,
            format_rt(m.left.retention_time),
            m.right.name,
            format_rt(m.right.retention_time),
            m.kind(),
            m.is_within_tolerance
        );
    }
}
