use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skywatch", version, about = "Scores live flight snapshots and reports the most interesting aircraft")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a snapshot, score it and report the top flight
    Run {
        /// Skip WhatsApp delivery and print the message instead
        #[arg(long)]
        dry_run: bool,
        /// Override the config directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Text-generation provider (openai or ollama)
        #[arg(long)]
        provider: Option<String>,
        /// Model override for the summary
        #[arg(long)]
        model: Option<String>,
    },
    /// Print the static zone table
    Zones,
    /// Score a hypothetical observation
    Score {
        /// Aircraft type code, e.g. F22
        #[arg(long)]
        aircraft: String,
        /// Latitude in degrees
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Longitude in degrees
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },
}
