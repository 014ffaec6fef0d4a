//! Orchestration over the pure Ashtakavarga/Gochara core.
//!
//! This crate provides:
//! - Birth data parsing and validation
//! - The longitude resolver boundary and a JSON ephemeris-table resolver
//! - Natal chart, Ashtakavarga, connections, and Gochara entry points
//! - A parallel auspicious-date scan over a calendar month

pub mod birth;
pub mod error;
pub mod jyotish;
pub mod muhurta;
pub mod resolver;

pub use birth::{BirthData, GeoLocation};
pub use error::{InputError, ResolveError, SearchError};
pub use jyotish::{
    TRANSIT_TIME_UTC, ashtakavarga_for_birth, connections_for_birth, gochara_for_date,
    gochara_with_natal, natal_chart_for_birth, transit_snapshot,
};
pub use muhurta::{
    AuspiciousDate, AuspiciousDates, ScanConfig, auspicious_dates, month_dates, score_date,
    top_dates,
};
pub use resolver::{EphemerisTable, LOCATION_TOLERANCE_DEG, LongitudeResolver};
