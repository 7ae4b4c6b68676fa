use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use fsds::cli::{Cli, OutputFormat};
use fsds::scanner::{DistributionReporter, JsonReporter, TextReporter, compute_distribution};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create async runtime")?;

    runtime.block_on(async {
        for root in &cli.roots {
            let stdout = io::stdout();
            let mut reporter: Box<dyn DistributionReporter> = match cli.format {
                OutputFormat::Text if cli.sort => Box::new(TextReporter::sorted(stdout)),
                OutputFormat::Text => Box::new(TextReporter::new(stdout)),
                OutputFormat::Json => Box::new(JsonReporter::new(stdout)),
            };

            compute_distribution(root, reporter.as_mut()).await?;

            if cli.format == OutputFormat::Text {
                println!();
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("fsds=debug,warn")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("fsds=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
