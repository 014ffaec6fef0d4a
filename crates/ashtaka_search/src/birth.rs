//! Birth data parsing and validation.
//!
//! Everything here runs before a resolver is consulted: malformed dates,
//! times, or coordinates fail fast with an [`InputError`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d-%m-%Y"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Geographic location of an event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Validated constructor.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, InputError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(InputError::Latitude(latitude_deg));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(InputError::Longitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// A validated birth record: local civil date/time, place, and UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthData {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: GeoLocation,
    /// Hours east of UTC (IST = 5.5).
    pub utc_offset_hours: f64,
}

impl BirthData {
    /// Parse and validate raw birth fields.
    ///
    /// `dob` accepts `YYYY-MM-DD` or `DD-MM-YYYY`; `tob` accepts `HH:MM`
    /// or `HH:MM:SS`.
    pub fn parse(
        dob: &str,
        tob: &str,
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, InputError> {
        let date = parse_date(dob)?;
        let time = parse_time(tob)?;
        let location = GeoLocation::new(latitude, longitude)?;
        if !utc_offset_hours.is_finite() || !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(InputError::UtcOffset(utc_offset_hours));
        }
        Ok(Self {
            date,
            time,
            location,
            utc_offset_hours,
        })
    }

    pub fn local_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Local civil time minus the UTC offset.
    pub fn utc_datetime(&self) -> Result<NaiveDateTime, InputError> {
        let local = self.local_datetime();
        let offset_s = (self.utc_offset_hours * 3600.0).round() as i64;
        TimeDelta::try_seconds(offset_s)
            .and_then(|offset| local.checked_sub_signed(offset))
            .ok_or(InputError::UtcOutOfRange {
                local,
                offset_hours: self.utc_offset_hours,
            })
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, InputError> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| InputError::InvalidDate(s.to_string()))
}

pub fn parse_time(s: &str) -> Result<NaiveTime, InputError> {
    let s = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| InputError::InvalidTime(s.to_string()))
}
