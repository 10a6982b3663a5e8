// src/main.rs

#![allow(non_snake_case)]

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error};

use Hz_Comparison_Render::constants::{CHART_TITLE, OUTPUT_FILENAME};
use Hz_Comparison_Render::crate_version;
use Hz_Comparison_Render::display::{show_chart, DisplayOutcome};
use Hz_Comparison_Render::logging::init_logging;
use Hz_Comparison_Render::plot_functions::plot_hubble_comparison::plot_hubble_comparison;

/// Renders H(z) for ΛCDM and the Siamese CPL model with schematic data and H0 bands.
#[derive(Parser, Debug)]
#[command(author, version = crate_version(), about)]
struct Args {
    /// Path of the PNG to write
    #[arg(long, short, default_value = OUTPUT_FILENAME)]
    output: PathBuf,

    /// Write the PNG only, do not open a window
    #[arg(long)]
    no_display: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    println!("Rendering H(z) comparison...");
    let chart = plot_hubble_comparison(&args.output)?;

    if args.no_display {
        debug!("display disabled on the command line");
        return Ok(());
    }
    if let DisplayOutcome::Skipped(reason) = show_chart(&chart, CHART_TITLE) {
        println!("  Display skipped ({reason}); chart is on disk.");
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    if let Err(e) = run(&args) {
        error!(error = %e, "rendering failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

// src/main.rs
