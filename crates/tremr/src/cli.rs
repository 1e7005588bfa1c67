use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tremr")]
#[command(version)]
#[command(about = "Watches PHIVOLCS bulletins and alerts on nearby earthquakes")]
pub struct Cli {
    /// Data directory (defaults to $TREMR_HOME, then ~/.tremr)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Monitor continuously until Ctrl-C
    Run {
        /// Read events from a local JSON file instead of the live feed
        #[arg(long)]
        mock: Option<PathBuf>,
    },

    /// Run a single monitoring cycle and exit
    Check {
        /// Read events from a local JSON file instead of the live feed
        #[arg(long)]
        mock: Option<PathBuf>,
    },

    /// Test connectivity to the live feed
    Connection,

    /// Create the config file, optionally updating settings
    Init(InitArgs),

    /// Show configuration and seen-event store
    Status,

    /// Print version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Observer latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Observer longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// Alert radius in kilometres
    #[arg(long = "radius")]
    pub radius_km: Option<f64>,

    /// Minimum magnitude to alert on
    #[arg(long)]
    pub min_magnitude: Option<f64>,

    /// Seconds between polls
    #[arg(long = "interval")]
    pub poll_interval_seconds: Option<u64>,

    /// Free-text label for the observer location
    #[arg(long)]
    pub address: Option<String>,

    /// Play a warning sound with each alert
    #[arg(long)]
    pub sound: Option<bool>,
}
