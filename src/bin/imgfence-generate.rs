use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use imgfence::generate::{existing_row_count, generate_rows, write_csv};

/// Generate a synthetic image library CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file to create, or to append to if it exists
    #[arg(short, long, default_value = "image_library.csv")]
    output: PathBuf,

    /// Number of rows to generate
    #[arg(short = 'n', long, default_value_t = 5000)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let existing = existing_row_count(&args.output)?;
    let append = args.output.exists();
    if append {
        tracing::info!("Appending to {:?} after {} rows", args.output, existing);
    }

    let rows = generate_rows(&mut rng, args.count, existing);
    write_csv(&args.output, &rows, append)
        .with_context(|| format!("Generator: Failed to write {} rows", rows.len()))?;

    println!(
        "Wrote {} rows to {} ({} total)",
        rows.len(),
        args.output.display(),
        existing + rows.len()
    );
    Ok(())
}
