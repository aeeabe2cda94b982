//! Descriptive statistics over a record set
//!
//! Four independent reports (travel times, stations, trip duration, users),
//! each computed from the set it is given and printed to a writer.

use crate::{
    core::{
        frequency::FrequencyTable,
        record::{RecordSet, month_name, weekday_name},
    },
    error::{BikeshareError, Result},
    utils::format::{convert_fractional_seconds, separator},
};
use chrono::{Month, Weekday};
use std::{io::Write, time::Instant};
use tracing::{debug, instrument};

/// Printed by any report whose input set is empty
pub const NO_DATA: &str = "No data matches the current filters.";

/// A statistic block that can be computed from a record set and printed
pub trait Report: Sized {
    /// Heading shown while the report is computed
    const TITLE: &'static str;

    fn compute(set: &RecordSet) -> Self;

    fn render(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Compute and print one report, followed by its timing and a separator
#[instrument(skip_all, fields(report = R::TITLE, records = set.len()))]
pub fn run_report<R: Report, W: Write>(
    set: &RecordSet,
    out: &mut W,
    separator_width: usize,
) -> Result<R> {
    let started = Instant::now();
    let write_err = |e| BikeshareError::input("write report", e);

    writeln!(out, "\nCalculating {}...\n", R::TITLE).map_err(write_err)?;
    let report = R::compute(set);
    report.render(&mut *out).map_err(write_err)?;

    let elapsed = started.elapsed().as_secs_f64();
    debug!("{} took {:.6}s", R::TITLE, elapsed);
    writeln!(out, "\nThis took {elapsed:.6} seconds.").map_err(write_err)?;
    writeln!(out, "{}", separator(separator_width)).map_err(write_err)?;
    Ok(report)
}

/// Print all four reports in order
pub fn run_all_reports<W: Write>(set: &RecordSet, out: &mut W, separator_width: usize) -> Result<()> {
    run_report::<TimeStats, _>(set, out, separator_width)?;
    run_report::<StationStats, _>(set, out, separator_width)?;
    run_report::<DurationStats, _>(set, out, separator_width)?;
    run_report::<UserStats, _>(set, out, separator_width)?;
    Ok(())
}

/// Most frequent times of travel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub most_common_month: Option<Month>,
    pub most_common_weekday: Option<Weekday>,
    pub most_common_hour: Option<u32>,
}

impl Report for TimeStats {
    const TITLE: &'static str = "The Most Frequent Times of Travel";

    fn compute(set: &RecordSet) -> Self {
        let months: FrequencyTable<Month> = set.iter().map(|r| r.month()).collect();
        let weekdays: FrequencyTable<Weekday> = set.iter().map(|r| r.weekday()).collect();
        let hours: FrequencyTable<u32> = set.iter().map(|r| r.start_hour()).collect();

        Self {
            most_common_month: months.mode().copied(),
            most_common_weekday: weekdays.mode().copied(),
            most_common_hour: hours.mode().copied(),
        }
    }

    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        match (self.most_common_month, self.most_common_weekday, self.most_common_hour) {
            (Some(month), Some(weekday), Some(hour)) => {
                writeln!(out, "Most common Month: {}", month_name(month))?;
                writeln!(out, "Most common Day of Week: {}", weekday_name(weekday))?;
                writeln!(out, "Most common Hour of Day: {hour}")
            }
            _ => writeln!(out, "{NO_DATA}"),
        }
    }
}

/// Most popular stations and trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub trips: usize,
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    pub most_common_trip: Option<String>,
}

impl Report for StationStats {
    const TITLE: &'static str = "The Most Popular Stations and Trip";

    fn compute(set: &RecordSet) -> Self {
        let starts: FrequencyTable<&str> = set.iter().filter_map(|r| r.known_start_station()).collect();
        let ends: FrequencyTable<&str> = set.iter().filter_map(|r| r.known_end_station()).collect();
        let trips: FrequencyTable<String> = set.iter().filter_map(|r| r.trip_label()).collect();

        Self {
            trips: set.len(),
            most_common_start: starts.mode().map(|s| s.to_string()),
            most_common_end: ends.mode().map(|s| s.to_string()),
            most_common_trip: trips.mode().cloned(),
        }
    }

    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.trips == 0 {
            return writeln!(out, "{NO_DATA}");
        }
        let or_unknown = |value: &Option<String>| value.as_deref().unwrap_or("unknown").to_string();
        writeln!(out, "Most common Start Station: {}", or_unknown(&self.most_common_start))?;
        writeln!(out, "Most common End Station: {}", or_unknown(&self.most_common_end))?;
        writeln!(out, "Most common Trip: {}", or_unknown(&self.most_common_trip))
    }
}

/// Total and average trip duration
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    /// Sum of all durations, in seconds
    pub total_seconds: f64,
    /// `None` when there are no trips
    pub mean_seconds: Option<f64>,
}

impl Report for DurationStats {
    const TITLE: &'static str = "Trip Duration";

    fn compute(set: &RecordSet) -> Self {
        let total_seconds: f64 = set.iter().map(|r| r.trip_duration).sum();
        let trips = set.len();
        let mean_seconds = (trips > 0).then(|| total_seconds / trips as f64);

        Self {
            trips,
            total_seconds,
            mean_seconds,
        }
    }

    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let Some(mean) = self.mean_seconds else {
            return writeln!(out, "{NO_DATA}");
        };
        writeln!(out, "Total Travel Time in seconds: {:.2}", self.total_seconds)?;
        writeln!(
            out,
            "Total Travel Time in h:m:s: {}",
            convert_fractional_seconds(self.total_seconds)
        )?;
        writeln!(out, "Average Travel Time in seconds: {mean:.2}")?;
        writeln!(
            out,
            "Average Travel Time in h:m:s: {}",
            convert_fractional_seconds(mean)
        )
    }
}

/// Gender and birth-year figures, only for sources that record them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

impl Demographics {
    fn compute(set: &RecordSet) -> Self {
        let genders: FrequencyTable<&str> = set.iter().filter_map(|r| r.gender.as_deref()).collect();
        let years: FrequencyTable<i32> = set.iter().filter_map(|r| r.birth_year).collect();

        Self {
            genders: owned_counts(genders),
            earliest_birth_year: years.values().min().copied(),
            latest_birth_year: years.values().max().copied(),
            most_common_birth_year: years.mode().copied(),
        }
    }
}

/// Bikeshare user breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub trips: usize,
    pub user_types: Vec<(String, usize)>,
    /// `None` when the source has no gender/birth-year columns
    pub demographics: Option<Demographics>,
}

impl Report for UserStats {
    const TITLE: &'static str = "User Stats";

    fn compute(set: &RecordSet) -> Self {
        let user_types: FrequencyTable<&str> =
            set.iter().filter_map(|r| r.user_type.as_deref()).collect();

        Self {
            trips: set.len(),
            user_types: owned_counts(user_types),
            demographics: set.has_demographics().then(|| Demographics::compute(set)),
        }
    }

    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.trips == 0 {
            writeln!(out, "{NO_DATA}")?;
        } else {
            writeln!(out, "Count of users:")?;
            write_counts(out, &self.user_types)?;
        }

        match &self.demographics {
            None => {
                writeln!(out, "Sorry! No available data about gender")?;
                writeln!(out, "Sorry! No available data about Year Of Birth")
            }
            Some(_) if self.trips == 0 => Ok(()),
            Some(demographics) => {
                writeln!(out, "Count of genders:")?;
                write_counts(out, &demographics.genders)?;
                writeln!(
                    out,
                    "Earliest Year Of Birth: {}",
                    year_or_unknown(demographics.earliest_birth_year)
                )?;
                writeln!(
                    out,
                    "Most recent Year Of Birth: {}",
                    year_or_unknown(demographics.latest_birth_year)
                )?;
                writeln!(
                    out,
                    "Most common Year Of Birth: {}",
                    year_or_unknown(demographics.most_common_birth_year)
                )
            }
        }
    }
}

fn owned_counts(table: FrequencyTable<&str>) -> Vec<(String, usize)> {
    table
        .sorted_counts()
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

fn write_counts(out: &mut dyn Write, counts: &[(String, usize)]) -> std::io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "  (none recorded)");
    }
    for (value, count) in counts {
        writeln!(out, "  {value}: {count}")?;
    }
    Ok(())
}

fn year_or_unknown(year: Option<i32>) -> String {
    year.map_or_else(|| "unknown".to_string(), |y| y.to_string())
}
