//! Trip record loading
//!
//! Reads a city's CSV file into a [`RecordSet`], parsing timestamps and
//! numeric columns without any dataframe machinery.

use crate::{
    core::{
        city::City,
        record::{RecordSet, TripRecord},
    },
    error::{BikeshareError, Result},
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::{
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

/// Timestamp layouts seen in the published trip data
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
];

/// One CSV row as it appears on disk
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Loads trip records from a data directory
#[derive(Debug, Clone)]
pub struct RecordLoader {
    data_dir: PathBuf,
}

impl RecordLoader {
    /// Create a loader reading city files from `data_dir`
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the file holding a city's trips
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Load every record for `city`, in file order
    #[instrument(skip(self))]
    pub fn load(&self, city: City) -> Result<RecordSet> {
        let path = self.path_for(city);
        debug!("Opening trip data: {}", path.display());

        let file = std::fs::File::open(&path).map_err(|e| {
            BikeshareError::load(city.display_name(), &path, e.to_string(), e)
        })?;

        let set = load_from_reader(city, &path, file)?;
        debug!(
            "Loaded {} trip records for {} from {}",
            set.len(),
            city,
            path.display()
        );
        Ok(set)
    }
}

/// Parse CSV trip data from any reader. `path` is only used in error messages.
pub fn load_from_reader<R: Read>(city: City, path: &Path, reader: R) -> Result<RecordSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| BikeshareError::load(city.display_name(), path, "unreadable header row", e))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(BikeshareError::load_message(
            city.display_name(),
            path,
            format!("missing required column '{missing}'"),
        ));
    }

    let has_demographics = headers.iter().any(|h| h == "Gender")
        && headers.iter().any(|h| h == "Birth Year");
    debug!("Columns: {:?} (demographics: {})", headers, has_demographics);

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<RawTrip>().enumerate() {
        let row = index as u64 + 1;
        let raw = result.map_err(|e| BikeshareError::parse(path, row, e.to_string()))?;
        records.push(convert_row(raw, path, row)?);
    }

    Ok(RecordSet::new(city, has_demographics, records))
}

fn convert_row(raw: RawTrip, path: &Path, row: u64) -> Result<TripRecord> {
    let invalid = |column: &str, value: &str| {
        BikeshareError::parse(path, row, format!("invalid {column} '{value}'"))
    };

    let start_time =
        parse_timestamp(&raw.start_time).ok_or_else(|| invalid("Start Time", &raw.start_time))?;
    let end_time =
        parse_timestamp(&raw.end_time).ok_or_else(|| invalid("End Time", &raw.end_time))?;
    let trip_duration = parse_duration(&raw.trip_duration)
        .ok_or_else(|| invalid("Trip Duration", &raw.trip_duration))?;
    let birth_year = match non_empty(raw.birth_year) {
        Some(value) => {
            Some(parse_birth_year(&value).ok_or_else(|| invalid("Birth Year", &value))?)
        }
        None => None,
    };

    Ok(TripRecord::new(
        start_time,
        end_time,
        raw.start_station,
        raw.end_station,
        trip_duration,
        non_empty(raw.user_type),
        non_empty(raw.gender),
        birth_year,
    ))
}

/// Parse a timestamp in any of the supported layouts
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Parse a duration in seconds, accepting integers and decimals
pub fn parse_duration(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
}

/// Parse a birth year written either as `1992` or `1992.0`
pub fn parse_birth_year(value: &str) -> Option<i32> {
    let value = value.trim();
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|year| year.is_finite() && year.fract() == 0.0)
        .map(|year| year as i32)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
