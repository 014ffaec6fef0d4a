//! Longitude resolver boundary.
//!
//! Ephemeris computation is delegated: a [`LongitudeResolver`] hands back
//! already-sidereal longitudes for an instant and place. [`EphemerisTable`]
//! is the bundled implementation, a precomputed JSON table of positions.
//!
//! Table format:
//!
//! ```json
//! {
//!   "ayanamsha": "lahiri",
//!   "entries": [
//!     {
//!       "utc": "1978-09-18T12:05:00",
//!       "latitude": 13.0827,
//!       "longitude": 80.2707,
//!       "bodies": { "sun": { "longitude": 151.6, "speed": 0.98 }, "lagna": { "longitude": 324.8 } }
//!     }
//!   ]
//! }
//! ```
//!
//! Entries without `latitude`/`longitude` match any location (transit
//! positions do not depend on the observer's place at whole-sign precision).

use std::collections::BTreeMap;
use std::path::Path;

use ashtaka_base::{AyanamshaSystem, Body, BodyLongitude, PINNED_AYANAMSHA, ResolvedLongitudes};
use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::birth::GeoLocation;
use crate::error::{ResolveError, SearchError};

/// Location tolerance when matching table entries, in degrees.
pub const LOCATION_TOLERANCE_DEG: f64 = 0.01;

/// Source of sidereal longitudes. Shared across scan worker threads.
pub trait LongitudeResolver: Sync {
    /// Sidereal reference the returned longitudes use.
    fn ayanamsha(&self) -> AyanamshaSystem;

    /// Longitudes of every body the source knows at `utc`, seen from `location`.
    fn resolve(
        &self,
        utc: NaiveDateTime,
        location: GeoLocation,
    ) -> Result<ResolvedLongitudes, ResolveError>;
}

// ---------------------------------------------------------------------------
// JSON ephemeris table
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawTable {
    ayanamsha: String,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    utc: NaiveDateTime,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    bodies: BTreeMap<String, BodyLongitude>,
}

#[derive(Debug, Clone, PartialEq)]
struct TableEntry {
    location: Option<GeoLocation>,
    longitudes: ResolvedLongitudes,
}

impl TableEntry {
    fn matches(&self, location: GeoLocation) -> bool {
        match self.location {
            None => true,
            Some(loc) => {
                (loc.latitude_deg - location.latitude_deg).abs() <= LOCATION_TOLERANCE_DEG
                    && (loc.longitude_deg - location.longitude_deg).abs()
                        <= LOCATION_TOLERANCE_DEG
            }
        }
    }
}

/// Precomputed sidereal positions keyed by UTC minute.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisTable {
    ayanamsha: AyanamshaSystem,
    entries: BTreeMap<NaiveDateTime, Vec<TableEntry>>,
}

fn to_minute(utc: NaiveDateTime) -> NaiveDateTime {
    utc.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(utc)
}

impl EphemerisTable {
    /// Empty table for the given ayanamsha.
    pub fn new(ayanamsha: AyanamshaSystem) -> Self {
        Self {
            ayanamsha,
            entries: BTreeMap::new(),
        }
    }

    /// Add positions for `utc` (truncated to the minute). `None` location
    /// matches every observer.
    pub fn insert(
        &mut self,
        utc: NaiveDateTime,
        location: Option<GeoLocation>,
        longitudes: ResolvedLongitudes,
    ) {
        self.entries
            .entry(to_minute(utc))
            .or_default()
            .push(TableEntry {
                location,
                longitudes,
            });
    }

    /// Parse a JSON table. Unknown ayanamsha names and body keys are errors.
    pub fn from_json_str(json: &str) -> Result<Self, SearchError> {
        let raw: RawTable = serde_json::from_str(json)?;
        let ayanamsha: AyanamshaSystem =
            raw.ayanamsha
                .parse()
                .map_err(|_| SearchError::AyanamshaMismatch {
                    expected: PINNED_AYANAMSHA,
                    found: raw.ayanamsha.clone(),
                })?;

        let mut table = Self::new(ayanamsha);
        for entry in raw.entries {
            let location = match (entry.latitude, entry.longitude) {
                (Some(lat), Some(lon)) => Some(GeoLocation::new(lat, lon)?),
                _ => None,
            };
            let mut longitudes = ResolvedLongitudes::new();
            for (key, value) in entry.bodies {
                let body: Body = key.parse()?;
                longitudes.insert(body, value);
            }
            table.insert(entry.utc, location, longitudes);
        }
        log::debug!(
            "ephemeris table: {} instants, ayanamsha {}",
            table.entries.len(),
            table.ayanamsha
        );
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let json = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Number of distinct UTC minutes covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LongitudeResolver for EphemerisTable {
    fn ayanamsha(&self) -> AyanamshaSystem {
        self.ayanamsha
    }

    fn resolve(
        &self,
        utc: NaiveDateTime,
        location: GeoLocation,
    ) -> Result<ResolvedLongitudes, ResolveError> {
        self.entries
            .get(&to_minute(utc))
            .and_then(|candidates| candidates.iter().find(|e| e.matches(location)))
            .map(|e| e.longitudes.clone())
            .ok_or(ResolveError::NotCovered { utc })
    }
}
