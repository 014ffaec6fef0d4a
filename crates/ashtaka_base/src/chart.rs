//! Chart positions built from resolved sidereal longitudes.
//!
//! A [`NatalChart`] or [`TransitSnapshot`] is built once from a
//! [`ResolvedLongitudes`] map and never mutated afterwards. Every body
//! position carries its 1-based sign, degrees within the sign, nakshatra,
//! and retrograde flag.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::graha::{Body, Graha, SAPTA_GRAHAS};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{Rashi, house_of, normalize_360, rashi_from_longitude};

/// Raw resolver output for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLongitude {
    /// Sidereal ecliptic longitude in degrees.
    pub longitude: f64,
    /// Daily motion in degrees; negative means retrograde.
    #[serde(default)]
    pub speed: Option<f64>,
}

impl BodyLongitude {
    pub const fn new(longitude: f64) -> Self {
        Self {
            longitude,
            speed: None,
        }
    }

    pub const fn with_speed(longitude: f64, speed: f64) -> Self {
        Self {
            longitude,
            speed: Some(speed),
        }
    }
}

/// Sidereal longitudes for a set of bodies at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedLongitudes {
    bodies: BTreeMap<Body, BodyLongitude>,
}

impl ResolvedLongitudes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: Body, value: BodyLongitude) {
        self.bodies.insert(body, value);
    }

    /// Builder-style insert.
    pub fn with(mut self, body: impl Into<Body>, value: BodyLongitude) -> Self {
        self.insert(body.into(), value);
        self
    }

    pub fn get(&self, body: Body) -> Option<&BodyLongitude> {
        self.bodies.get(&body)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, &BodyLongitude)> {
        self.bodies.iter().map(|(b, v)| (*b, v))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl FromIterator<(Body, BodyLongitude)> for ResolvedLongitudes {
    fn from_iter<I: IntoIterator<Item = (Body, BodyLongitude)>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

/// Position of one body in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub body: Body,
    /// Normalized sidereal longitude [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// 1-based sign index (1 = Mesha).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0, 30).
    pub degrees_in_sign: f64,
    pub nakshatra: NakshatraInfo,
    pub retrograde: bool,
}

impl Position {
    /// Map a resolved longitude onto a position.
    ///
    /// Rahu and Ketu are always flagged retrograde; other bodies are
    /// retrograde only when a negative speed was supplied.
    pub fn new(body: Body, value: BodyLongitude) -> Result<Self, ChartError> {
        if !value.longitude.is_finite() {
            return Err(ChartError::InvalidLongitude {
                body,
                value: value.longitude,
            });
        }
        let longitude = normalize_360(value.longitude);
        let info = rashi_from_longitude(longitude);
        let retrograde = match body {
            Body::Graha(g) if g.is_node() => true,
            _ => value.speed.is_some_and(|s| s < 0.0),
        };
        Ok(Self {
            body,
            longitude,
            rashi: info.rashi,
            sign_index: info.sign_index,
            degrees_in_sign: info.degrees_in_rashi,
            nakshatra: nakshatra_from_longitude(longitude),
            retrograde,
        })
    }
}

fn map_positions(longitudes: &ResolvedLongitudes) -> Result<BTreeMap<Body, Position>, ChartError> {
    longitudes
        .iter()
        .map(|(body, value)| Position::new(body, *value).map(|p| (body, p)))
        .collect()
}

// ---------------------------------------------------------------------------
// Natal chart
// ---------------------------------------------------------------------------

/// Positions for one birth event, framed by the ascendant sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalChart {
    positions: BTreeMap<Body, Position>,
    ascendant_sign: u8,
}

impl NatalChart {
    /// Build from resolver output. The Lagna is required; any graha may be absent.
    pub fn from_longitudes(longitudes: &ResolvedLongitudes) -> Result<Self, ChartError> {
        let positions = map_positions(longitudes)?;
        let ascendant_sign = positions
            .get(&Body::Lagna)
            .map(|p| p.sign_index)
            .ok_or(ChartError::MissingBody(Body::Lagna))?;
        log::debug!(
            "natal chart: {} bodies, ascendant sign {}",
            positions.len(),
            ascendant_sign
        );
        Ok(Self {
            positions,
            ascendant_sign,
        })
    }

    /// Build from whole signs only (1-based, Sun..Saturn order).
    ///
    /// Each body is placed at the middle of its sign. Useful when only sign
    /// placements are known, which is all Ashtakavarga needs.
    pub fn from_signs(graha_signs: &[u8; 7], lagna_sign: u8) -> Result<Self, ChartError> {
        let mid = |sign: u8| -> Result<BodyLongitude, ChartError> {
            if (1..=12).contains(&sign) {
                Ok(BodyLongitude::new(f64::from(sign - 1) * 30.0 + 15.0))
            } else {
                Err(ChartError::InvalidSignIndex(sign))
            }
        };
        let mut longitudes = ResolvedLongitudes::new();
        for (graha, &sign) in SAPTA_GRAHAS.iter().zip(graha_signs) {
            longitudes.insert(Body::Graha(*graha), mid(sign)?);
        }
        longitudes.insert(Body::Lagna, mid(lagna_sign)?);
        Self::from_longitudes(&longitudes)
    }

    /// 1-based sign of the ascendant.
    pub fn ascendant_sign(&self) -> u8 {
        self.ascendant_sign
    }

    pub fn position(&self, body: impl Into<Body>) -> Option<&Position> {
        self.positions.get(&body.into())
    }

    /// 1-based sign of a body, if present.
    pub fn sign_of(&self, body: impl Into<Body>) -> Option<u8> {
        self.position(body).map(|p| p.sign_index)
    }

    /// House of a body relative to the natal ascendant, if present.
    pub fn house_of(&self, body: impl Into<Body>) -> Option<u8> {
        self.sign_of(body).map(|s| house_of(s, self.ascendant_sign))
    }

    pub fn contains(&self, body: impl Into<Body>) -> bool {
        self.positions.contains_key(&body.into())
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    /// Grahas present in the chart, in traditional order.
    pub fn grahas(&self) -> impl Iterator<Item = Graha> + '_ {
        self.positions.keys().filter_map(|b| b.graha())
    }
}

// ---------------------------------------------------------------------------
// Transit snapshot
// ---------------------------------------------------------------------------

/// Positions of transiting bodies on an evaluation date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitSnapshot {
    date: NaiveDate,
    positions: BTreeMap<Body, Position>,
}

impl TransitSnapshot {
    /// Build from resolver output. No body is required.
    pub fn from_longitudes(
        date: NaiveDate,
        longitudes: &ResolvedLongitudes,
    ) -> Result<Self, ChartError> {
        Ok(Self {
            date,
            positions: map_positions(longitudes)?,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn position(&self, body: impl Into<Body>) -> Option<&Position> {
        self.positions.get(&body.into())
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lagna_only(lon: f64) -> ResolvedLongitudes {
        ResolvedLongitudes::new().with(Body::Lagna, BodyLongitude::new(lon))
    }

    #[test]
    fn natal_requires_lagna() {
        let lons = ResolvedLongitudes::new().with(Graha::Surya, BodyLongitude::new(10.0));
        assert_eq!(
            NatalChart::from_longitudes(&lons),
            Err(ChartError::MissingBody(Body::Lagna))
        );
    }

    #[test]
    fn rejects_non_finite_longitude() {
        let lons = lagna_only(10.0).with(Graha::Chandra, BodyLongitude::new(f64::NAN));
        assert!(matches!(
            NatalChart::from_longitudes(&lons),
            Err(ChartError::InvalidLongitude { body: Body::Graha(Graha::Chandra), .. })
        ));
    }

    #[test]
    fn houses_relative_to_lagna() {
        let lons = lagna_only(324.8)
            .with(Graha::Surya, BodyLongitude::new(151.6))
            .with(Graha::Chandra, BodyLongitude::new(358.2));
        let chart = NatalChart::from_longitudes(&lons).unwrap();
        assert_eq!(chart.ascendant_sign(), 11);
        assert_eq!(chart.house_of(Body::Lagna), Some(1));
        assert_eq!(chart.house_of(Graha::Surya), Some(8));
        assert_eq!(chart.house_of(Graha::Chandra), Some(2));
        assert_eq!(chart.house_of(Graha::Shani), None);
    }

    #[test]
    fn retrograde_flags() {
        let lons = lagna_only(0.0)
            .with(Graha::Shani, BodyLongitude::with_speed(200.0, -0.02))
            .with(Graha::Guru, BodyLongitude::with_speed(100.0, 0.1))
            .with(Graha::Rahu, BodyLongitude::with_speed(50.0, 0.01))
            .with(Graha::Ketu, BodyLongitude::new(230.0));
        let chart = NatalChart::from_longitudes(&lons).unwrap();
        assert!(chart.position(Graha::Shani).unwrap().retrograde);
        assert!(!chart.position(Graha::Guru).unwrap().retrograde);
        assert!(chart.position(Graha::Rahu).unwrap().retrograde);
        assert!(chart.position(Graha::Ketu).unwrap().retrograde);
    }

    #[test]
    fn from_signs_places_mid_sign() {
        let chart = NatalChart::from_signs(&[5, 12, 6, 6, 3, 7, 5], 11).unwrap();
        assert_eq!(chart.sign_of(Graha::Surya), Some(5));
        assert_eq!(chart.sign_of(Graha::Chandra), Some(12));
        let pos = chart.position(Graha::Surya).unwrap();
        assert!((pos.degrees_in_sign - 15.0).abs() < 1e-10);
    }

    #[test]
    fn from_signs_rejects_bad_sign() {
        assert_eq!(
            NatalChart::from_signs(&[0, 1, 1, 1, 1, 1, 1], 1),
            Err(ChartError::InvalidSignIndex(0))
        );
        assert_eq!(
            NatalChart::from_signs(&[1; 7], 13),
            Err(ChartError::InvalidSignIndex(13))
        );
    }

    #[test]
    fn transit_snapshot_keeps_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let lons = ResolvedLongitudes::new().with(Graha::Guru, BodyLongitude::new(45.0));
        let snap = TransitSnapshot::from_longitudes(date, &lons).unwrap();
        assert_eq!(snap.date(), date);
        assert_eq!(snap.position(Graha::Guru).unwrap().sign_index, 2);
        assert!(snap.position(Body::Lagna).is_none());
    }
}
