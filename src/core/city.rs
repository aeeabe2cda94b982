//! The closed set of cities with trip data

use crate::error::BikeshareError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A city whose trip records can be explored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    /// Every known city, in menu order
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Human readable name
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYork => "New York",
            Self::Washington => "Washington",
        }
    }

    /// Name of the city's source file inside the data directory
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYork => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }

    /// Look up a city from free-form user input.
    ///
    /// Case and surrounding whitespace are ignored; spaces, dashes and
    /// underscores are interchangeable.
    pub fn lookup(input: &str) -> Option<Self> {
        let normalized: String = input
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();
        let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

        match normalized.as_str() {
            "chicago" => Some(Self::Chicago),
            "new york" | "new york city" | "nyc" => Some(Self::NewYork),
            "washington" => Some(Self::Washington),
            _ => None,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| {
            BikeshareError::validation(format!(
                "Unknown city '{s}'. Choose one of: chicago, new york, washington"
            ))
        })
    }
}
