//! Month and weekday filtering
//!
//! Selections are validated against the values actually present in a
//! record set, never against a fixed calendar list.

use crate::core::{
    frequency::FrequencyTable,
    record::{RecordSet, TripRecord, month_name, weekday_name},
};
use chrono::{Month, Weekday};
use tracing::{debug, instrument};

/// Which filters the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    None,
    Month,
    Day,
    Both,
}

impl FilterMode {
    /// Parse a menu answer ("none", "month", "day", "both")
    pub fn lookup(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn filters_month(self) -> bool {
        matches!(self, Self::Month | Self::Both)
    }

    pub fn filters_day(self) -> bool {
        matches!(self, Self::Day | Self::Both)
    }
}

/// Optional month and weekday predicates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub month: Option<Month>,
    pub weekday: Option<Weekday>,
}

impl FilterCriteria {
    pub fn new(month: Option<Month>, weekday: Option<Weekday>) -> Self {
        Self { month, weekday }
    }

    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.weekday.is_none()
    }

    /// Whether `record` satisfies every set predicate
    pub fn matches(&self, record: &TripRecord) -> bool {
        self.month.is_none_or(|month| record.month() == month)
            && self.weekday.is_none_or(|weekday| record.weekday() == weekday)
    }

    /// Copy of the records matching every set predicate, in their original order
    #[instrument(skip(set))]
    pub fn apply(&self, set: &RecordSet) -> RecordSet {
        let filtered = set.retain_matching(|record| self.matches(record));
        debug!("Filter kept {} of {} records", filtered.len(), set.len());
        filtered
    }

    /// Narrow an owned set in place. Empty criteria hand the set back untouched.
    #[instrument(skip(set), fields(records = set.len()))]
    pub fn into_filtered(self, set: RecordSet) -> RecordSet {
        if self.is_empty() {
            return set;
        }
        let total = set.len();
        let filtered = set.into_matching(|record| self.matches(record));
        debug!("Filter kept {} of {} records", filtered.len(), total);
        filtered
    }

    /// Human readable summary such as "June, Friday" or "no filter"
    pub fn describe(&self) -> String {
        match (self.month, self.weekday) {
            (None, None) => "no filter".to_string(),
            (Some(month), None) => month_name(month).to_string(),
            (None, Some(weekday)) => weekday_name(weekday).to_string(),
            (Some(month), Some(weekday)) => {
                format!("{}, {}", month_name(month), weekday_name(weekday))
            }
        }
    }
}

/// Keep only records from `month`
pub fn filter_by_month(set: &RecordSet, month: Month) -> RecordSet {
    FilterCriteria::new(Some(month), None).apply(set)
}

/// Keep only records from `weekday`
pub fn filter_by_weekday(set: &RecordSet, weekday: Weekday) -> RecordSet {
    FilterCriteria::new(None, Some(weekday)).apply(set)
}

/// Months present in the set, in order of first appearance
pub fn available_months(set: &RecordSet) -> Vec<Month> {
    let table: FrequencyTable<Month> = set.iter().map(|record| record.month()).collect();
    table.values().copied().collect()
}

/// Weekdays present in the set, in order of first appearance
pub fn available_weekdays(set: &RecordSet) -> Vec<Weekday> {
    available_weekdays_matching(set, &FilterCriteria::default())
}

/// Weekdays present among the records `criteria` keeps, in order of first appearance
pub fn available_weekdays_matching(set: &RecordSet, criteria: &FilterCriteria) -> Vec<Weekday> {
    let table: FrequencyTable<Weekday> = set
        .iter()
        .filter(|record| criteria.matches(record))
        .map(|record| record.weekday())
        .collect();
    table.values().copied().collect()
}

/// Match user input against the available months, ignoring case
pub fn resolve_month(input: &str, available: &[Month]) -> Option<Month> {
    let input = input.trim();
    available
        .iter()
        .copied()
        .find(|month| month_name(*month).eq_ignore_ascii_case(input))
}

/// Match user input against the available weekdays, ignoring case
pub fn resolve_weekday(input: &str, available: &[Weekday]) -> Option<Weekday> {
    let input = input.trim();
    available
        .iter()
        .copied()
        .find(|weekday| weekday_name(*weekday).eq_ignore_ascii_case(input))
}
