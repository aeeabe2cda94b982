//! Utility modules for common functionality
//!
//! Provides formatting helpers shared by the reports.

pub mod format;

pub use format::convert_seconds;
