//! Trip records and the record sets they live in

use crate::core::city::City;
use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use std::fmt;

/// English full name of a weekday
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English full name of a month
pub fn month_name(month: Month) -> &'static str {
    month.name()
}

/// A single bike-share trip
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// When the trip started
    pub start_time: NaiveDateTime,
    /// When the trip ended
    pub end_time: NaiveDateTime,
    /// Station the bike was taken from
    pub start_station: String,
    /// Station the bike was returned to
    pub end_station: String,
    /// Trip duration in seconds
    pub trip_duration: f64,
    /// Subscriber, Customer, ...
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    month: Month,
    weekday: Weekday,
}

impl TripRecord {
    /// Create a record, deriving month and weekday from the start time
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        trip_duration: f64,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        let month = Month::try_from(start_time.month() as u8).unwrap_or(Month::January);
        Self {
            start_time,
            end_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            trip_duration,
            user_type,
            gender,
            birth_year,
            month,
            weekday: start_time.weekday(),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    /// Hour of day (0-23) the trip started
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Start station, `None` when the cell was blank
    pub fn known_start_station(&self) -> Option<&str> {
        known(&self.start_station)
    }

    /// End station, `None` when the cell was blank
    pub fn known_end_station(&self) -> Option<&str> {
        known(&self.end_station)
    }

    /// Start and end station joined into a single route label.
    ///
    /// `None` unless both stations are known.
    pub fn trip_label(&self) -> Option<String> {
        Some(format!(
            "{} to {}",
            self.known_start_station()?,
            self.known_end_station()?
        ))
    }
}

fn known(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

impl fmt::Display for TripRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} | {}s | {} -> {} | {} | {} | {} | {} {}",
            self.start_time,
            self.end_time,
            self.trip_duration,
            self.start_station,
            self.end_station,
            self.user_type.as_deref().unwrap_or("-"),
            self.gender.as_deref().unwrap_or("-"),
            self.birth_year
                .map_or_else(|| "-".to_string(), |year| year.to_string()),
            self.month_name(),
            self.weekday_name(),
        )
    }
}

/// An ordered collection of trips from one city
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    city: City,
    has_demographics: bool,
    records: Vec<TripRecord>,
}

impl RecordSet {
    /// Create a record set for a city
    pub fn new(city: City, has_demographics: bool, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            has_demographics,
            records,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    /// Whether the source carried gender and birth-year columns
    pub fn has_demographics(&self) -> bool {
        self.has_demographics
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    /// Drop the records not matching `predicate`, reusing this set's storage
    pub fn into_matching<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(&TripRecord) -> bool,
    {
        self.records.retain(predicate);
        self
    }

    /// New set with the records matching `predicate`, original order kept
    pub fn retain_matching<F>(&self, predicate: F) -> Self
    where
        F: Fn(&TripRecord) -> bool,
    {
        Self {
            city: self.city,
            has_demographics: self.has_demographics,
            records: self
                .records
                .iter()
                .filter(|record| predicate(record))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveDate;

    /// Build a record starting at the given date/hour with a 10 minute trip
    pub fn trip(
        (year, month, day): (i32, u32, u32),
        hour: u32,
        start: &str,
        end: &str,
        duration: f64,
    ) -> TripRecord {
        let start_time = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap();
        let end_time = start_time + chrono::Duration::minutes(10);
        TripRecord::new(
            start_time,
            end_time,
            start,
            end,
            duration,
            Some("Subscriber".to_string()),
            None,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::trip;
    use super::*;

    #[test]
    fn test_derived_fields_follow_start_time() {
        // 2017-06-23 was a Friday
        let record = trip((2017, 6, 23), 15, "A", "B", 600.0);
        assert_eq!(record.month(), Month::June);
        assert_eq!(record.month_name(), "June");
        assert_eq!(record.weekday(), Weekday::Fri);
        assert_eq!(record.weekday_name(), "Friday");
        assert_eq!(record.start_hour(), 15);
    }

    #[test]
    fn test_trip_label() {
        let record = trip((2017, 1, 1), 9, "Canal St", "Clark St", 60.0);
        assert_eq!(record.trip_label().as_deref(), Some("Canal St to Clark St"));
    }

    #[test]
    fn test_blank_stations_are_unknown() {
        let record = trip((2017, 1, 1), 9, "", "Clark St", 60.0);
        assert_eq!(record.known_start_station(), None);
        assert_eq!(record.known_end_station(), Some("Clark St"));
        assert_eq!(record.trip_label(), None);
    }

    #[test]
    fn test_retain_matching_keeps_order_and_source() {
        let set = RecordSet::new(
            City::Chicago,
            true,
            vec![
                trip((2017, 1, 1), 9, "A", "B", 1.0),
                trip((2017, 2, 1), 9, "C", "D", 2.0),
                trip((2017, 1, 2), 9, "E", "F", 3.0),
            ],
        );

        let january = set.retain_matching(|r| r.month() == Month::January);
        let stations: Vec<_> = january.iter().map(|r| r.start_station.as_str()).collect();

        assert_eq!(stations, vec!["A", "E"]);
        assert_eq!(set.len(), 3);
        assert_eq!(january.city(), City::Chicago);
        assert!(january.has_demographics());
    }

    #[test]
    fn test_into_matching_keeps_order() {
        let set = RecordSet::new(
            City::Washington,
            false,
            vec![
                trip((2017, 1, 1), 9, "A", "B", 1.0),
                trip((2017, 2, 1), 9, "C", "D", 2.0),
                trip((2017, 1, 2), 9, "E", "F", 3.0),
            ],
        );

        let january = set.into_matching(|r| r.month() == Month::January);
        let stations: Vec<_> = january.iter().map(|r| r.start_station.as_str()).collect();

        assert_eq!(stations, vec!["A", "E"]);
        assert_eq!(january.city(), City::Washington);
        assert!(!january.has_demographics());
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        assert_eq!(month_name(Month::December), "December");
    }
}
