//! Command-line interface for sciutil.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **locate**: Find the nearest reference entry for each query value
//! - **convert**: Convert times between unix seconds, MATLAB datenum and ISO 8601
//!
//! ## Usage
//!
//! ```text
//! # Nearest index of a single value in a one-column file
//! sciutil locate altitude.txt 350.2
//!
//! # Align two instruments: nearest SWEA sample for every MAG timestamp
//! sciutil locate swea_times.csv --queries mag_times.csv --format json
//!
//! # Convert a datenum to ISO 8601
//! sciutil convert --from datenum --to iso 737522.5
//! ```

use clap::{Parser, Subcommand};

pub mod convert;
pub mod locate;

#[derive(Parser)]
#[command(name = "sciutil")]
#[command(version)]
#[command(about = "Nearest-index lookup and time conversion for scientific data")]
#[command(
    long_about = "sciutil finds the index of the closest entry in a reference series for each query value.\n\nReference series can hold numbers or timestamps, read from tab- or comma-separated files (optionally gzip compressed). Ties resolve to the first matching index."
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
    /// Find the nearest reference index for each query value
    Locate(locate::LocateArgs),

    /// Convert times between representations
    Convert(convert::ConvertArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
