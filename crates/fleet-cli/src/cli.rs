//! CLI definition using clap

use clap::{Parser, Subcommand};
use fleet_domain::GeoPosition;
use fleet_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleet-sim")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle fleet simulation: fuel, range, licensing and trips")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Great-circle distance between two positions ("lon,lat")
    Distance {
        /// Start position, e.g. "13.4,52.5"
        #[arg(allow_hyphen_values = true)]
        from: GeoPosition,

        /// End position, e.g. "2.3,48.8"
        #[arg(allow_hyphen_values = true)]
        to: GeoPosition,
    },

    /// Check whether a vehicle can reach a destination on its current tank
    Plan {
        /// Roster TOML file
        roster: PathBuf,

        /// Vehicle id from the roster
        vehicle: String,

        /// Destination ("lon,lat")
        #[arg(allow_hyphen_values = true)]
        to: GeoPosition,
    },

    /// Show the status of every vehicle in a roster
    Status {
        /// Roster TOML file. Uses config value if not specified.
        roster: Option<PathBuf>,
    },

    /// Drive a vehicle to a destination
    Drive {
        /// Roster TOML file
        roster: PathBuf,

        /// Vehicle id from the roster
        vehicle: String,

        /// Destination ("lon,lat")
        #[arg(allow_hyphen_values = true)]
        to: GeoPosition,

        /// Refuel by this amount before leaving
        #[arg(long, short = 'r')]
        refuel: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set log level (error, warn, info, debug, trace)
        #[arg(long)]
        set_log_level: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default roster file
        #[arg(long)]
        set_roster: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
