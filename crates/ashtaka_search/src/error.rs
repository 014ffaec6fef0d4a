//! Error types for birth-data resolution and date scans.

use std::path::PathBuf;

use ashtaka_base::{AyanamshaSystem, ChartError};
use chrono::NaiveDateTime;

/// Invalid user input, rejected before any resolver call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("invalid date {0:?} (expected YYYY-MM-DD or DD-MM-YYYY)")]
    InvalidDate(String),
    #[error("invalid time {0:?} (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),
    #[error("latitude {0} outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} outside [-180, 180]")]
    Longitude(f64),
    #[error("UTC offset {0} outside [-14, 14] hours")]
    UtcOffset(f64),
    #[error("invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid SAV table: {0}")]
    InvalidSav(&'static str),
    /// Shifting the local time to UTC leaves the representable date range.
    #[error("{local} at UTC offset {offset_hours} falls outside the supported date range")]
    UtcOutOfRange {
        local: NaiveDateTime,
        offset_hours: f64,
    },
}

/// Failure inside a longitude resolver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The source has no data for this instant and place.
    #[error("no ephemeris entry for {utc} UTC")]
    NotCovered { utc: NaiveDateTime },
    /// Any other backend failure.
    #[error("resolver backend: {0}")]
    Backend(String),
}

/// Errors from the search/orchestration layer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("resolve failed: {0}")]
    Resolve(#[from] ResolveError),
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),
    /// Longitudes use a different sidereal reference than the engine.
    #[error("ayanamsha mismatch: expected {expected}, found {found}")]
    AyanamshaMismatch {
        expected: AyanamshaSystem,
        found: String,
    },
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed ephemeris JSON: {0}")]
    Json(#[from] serde_json::Error),
}
