//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{
        city::City,
        filter::{
            FilterCriteria, available_months, available_weekdays_matching, resolve_month,
            resolve_weekday,
        },
        loader::RecordLoader,
        record::{RecordSet, month_name, weekday_name},
        stats::run_all_reports,
    },
    error::BikeshareError,
    session::Explorer,
};
use anyhow::Context;
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Explore => execute_explore_command(config),
        Command::Report { city, month, day } => {
            execute_report_command(config, *city, month.as_deref(), day.as_deref())
        }
        Command::Cities => execute_cities_command(config),
    }
}

/// Execute the interactive explorer
#[instrument(skip(config))]
fn execute_explore_command(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Explorer::new(config, stdin.lock(), stdout.lock())
        .run()
        .context("Interactive session failed")
}

/// Execute the non-interactive report command
#[instrument(skip(config))]
fn execute_report_command(
    config: &Config,
    city: City,
    month: Option<&str>,
    day: Option<&str>,
) -> anyhow::Result<()> {
    let set = RecordLoader::new(&config.data_dir)
        .load(city)
        .with_context(|| format!("Failed to load trip data for {city}"))?;

    let criteria = resolve_criteria(&set, month, day)?;
    let total = set.len();
    let filtered = criteria.into_filtered(set);
    debug!(
        "Reporting on {} of {} {} trips ({})",
        filtered.len(),
        total,
        city,
        criteria.describe()
    );

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "Trip statistics for {} ({}): {} of {} trips",
        city,
        criteria.describe(),
        filtered.len(),
        total
    )?;
    run_all_reports(&filtered, &mut out, config.display.separator_width)
        .context("Failed to print reports")?;
    Ok(())
}

/// Turn `--month`/`--day` values into criteria, accepting only values
/// present in the data
fn resolve_criteria(
    set: &RecordSet,
    month: Option<&str>,
    day: Option<&str>,
) -> Result<FilterCriteria, BikeshareError> {
    let mut criteria = FilterCriteria::default();

    if let Some(month) = month {
        let available = available_months(set);
        criteria.month = Some(resolve_month(month, &available).ok_or_else(|| {
            let names: Vec<_> = available.iter().map(|m| month_name(*m)).collect();
            BikeshareError::validation(format!(
                "No trips in month '{month}'. Available months: {}",
                names.join(", ")
            ))
        })?);
    }

    if let Some(day) = day {
        let available = available_weekdays_matching(set, &criteria);
        criteria.weekday = Some(resolve_weekday(day, &available).ok_or_else(|| {
            let names: Vec<_> = available.iter().map(|d| weekday_name(*d)).collect();
            BikeshareError::validation(format!(
                "No trips on day '{day}'. Available days: {}",
                names.join(", ")
            ))
        })?);
    }

    Ok(criteria)
}

/// Execute the cities command
#[instrument(skip(config))]
fn execute_cities_command(config: &Config) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for city in City::ALL {
        let path = config.data_path(city);
        let status = if path.is_file() { "found" } else { "missing" };
        writeln!(out, "{:<12} {} ({})", city.display_name(), path.display(), status)?;
    }
    Ok(())
}
