//! swatchlab - evaluate rendering intents for hex colors
//!
//! Converts each input through Lab, applies every rendering intent and prints
//! the resulting swatch and CMYK separation.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use swatchlab_core::{RenderIntent, evaluate_batch};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser, Debug)]
#[command(name = "swatchlab")]
#[command(author, version, about = "Evaluate rendering intents for hex colors")]
#[command(long_about = "
Converts sRGB hex colors to CIE Lab (D50), applies each rendering intent and
shows the CMYK separation and the swatch it renders back to.

Examples:
  swatchlab 629c67                        # All intents as a table
  swatchlab '#629c67' ff8000 --format json
  swatchlab 629c67 --intent perceptual --intent naive
  swatchlab -vv 000000 ffffff             # Trace every stage
")]
struct Cli {
    /// Hex colors (`rrggbb` or `#rrggbb`)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Only show these intents (perceptual, relative, saturation, absolute, naive)
    #[arg(short, long = "intent")]
    intents: Vec<RenderIntent>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned text table
    Table,
    /// JSON array, one object per input
    Json,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    debug!(inputs = cli.inputs.len(), threads = cli.threads, "starting");
    let results = evaluate_batch(&cli.inputs);

    let mut reports = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (input, result) in cli.inputs.iter().zip(results) {
        match result.with_context(|| format!("Failed to evaluate '{input}'")) {
            Ok(rows) => reports.push(report::InputReport::new(input, rows, &cli.intents)),
            Err(e) => {
                failed += 1;
                eprintln!("Error: {e:#}");
            }
        }
    }

    match cli.format {
        Format::Table => report::print_table(&reports),
        Format::Json => report::print_json(&reports)?,
    }

    info!(success = reports.len(), failed, "done");
    if failed > 0 {
        bail!("{failed} of {} inputs failed", cli.inputs.len());
    }

    Ok(())
}
