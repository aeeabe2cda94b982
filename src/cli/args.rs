//! Command-line argument parsing and validation

use crate::core::city::City;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bike-share explorer - statistics over US bike-share trip data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "bikeshare")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short = 'd', long = "data-dir", global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Subcommand to execute (interactive explorer when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Explore a city's trips interactively
    Explore,

    /// Print every report for a city without prompting
    Report {
        /// City to report on (chicago, new york, washington)
        #[arg(short = 'c', long, value_parser = parse_city)]
        city: City,

        /// Only include trips from this month (e.g. june)
        #[arg(short = 'm', long)]
        month: Option<String>,

        /// Only include trips from this weekday (e.g. friday)
        #[arg(long)]
        day: Option<String>,
    },

    /// List known cities and where their data is expected
    Cities,
}

impl Args {
    /// The command to run, defaulting to the interactive explorer
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Explore)
    }
}

fn parse_city(value: &str) -> Result<City, String> {
    value.parse::<City>().map_err(|e| e.to_string())
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
