use clap::Parser;
use tracing_subscriber::EnvFilter;

use rt_matcher::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("rt_matcher=debug,info")
    } else {
        EnvFilter::new("rt_matcher=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Match(args) => {
            cli::matches::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Inventory(args) => {
            cli::inventory::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
