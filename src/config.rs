//! Configuration management for the explorer
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, core::city::City, error::BikeshareError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Directory holding the per-city CSV files
    pub data_dir: PathBuf,
    /// Report layout
    pub display: DisplayConfig,
}

/// Report layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Width of the dashed line printed after each report
    pub separator_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            data_dir: PathBuf::from("."),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { separator_width: 40 }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, BikeshareError> {
        let config = Self {
            debug: args.debug,
            data_dir: args.data_dir.clone(),
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), BikeshareError> {
        if !self.data_dir.is_dir() {
            return Err(BikeshareError::config(format!(
                "Data directory not found: {}",
                self.data_dir.display()
            )));
        }

        if self.display.separator_width == 0 {
            return Err(BikeshareError::config("Separator width must be positive"));
        }

        Ok(())
    }

    /// Path of a city's trip file
    pub fn data_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}
