//! Core functionality for trip analysis
//!
//! Contains loading, filtering and the statistics computed over trip records.

pub mod city;
pub mod filter;
pub mod frequency;
pub mod loader;
pub mod record;
pub mod stats;

pub use city::City;
pub use filter::{FilterCriteria, FilterMode};
pub use frequency::FrequencyTable;
pub use loader::RecordLoader;
pub use record::{RecordSet, TripRecord};
