#![warn(clippy::pedantic)]

mod logger;
mod readings;
mod report;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug};
use motus_domain::Workout;

/// Compute workout statistics from recorded sensor readings
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// JSON file with readings to process instead of the built-in sample batch
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Enable debug output
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    })
    .context("failed to initialize logging")?;

    let readings = match &cli.input {
        Some(path) => readings::from_file(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => readings::sample_batch(),
    };

    debug!("processing {} readings", readings.len());

    let mut stdout = io::stdout().lock();

    for reading in &readings {
        let workout = Workout::from_reading(&reading.workout_type, &reading.data)?;
        report::emit(&mut stdout, &workout).context("failed to write summary")?;
    }

    Ok(())
}
