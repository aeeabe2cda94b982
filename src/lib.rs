//! # Bike-share Explorer
//!
//! Descriptive statistics over US bike-share trip data (Chicago, New York,
//! Washington). Trip records are loaded from per-city CSV files, optionally
//! narrowed to one month and/or weekday, and summarised.
//!
//! ## Features
//!
//! - CSV loading with timestamp parsing and derived month/weekday
//! - Month and weekday filters validated against the data itself
//! - Paged row viewer
//! - Travel time, station, duration and user reports
//! - Interactive menu loop plus a non-interactive `report` command
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare_explorer::core::{City, FilterCriteria, RecordLoader};
//! use bikeshare_explorer::core::stats::run_all_reports;
//! use chrono::Month;
//!
//! let set = RecordLoader::new("data").load(City::Chicago)?;
//! let june = FilterCriteria::new(Some(Month::June), None).apply(&set);
//! run_all_reports(&june, &mut std::io::stdout(), 40)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod session;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr; stdout is reserved for prompts and reports.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
