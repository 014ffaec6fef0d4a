//! Jyotish orchestration: birth data in, charts and reports out.
//!
//! Bridges a [`LongitudeResolver`] and the pure calculation modules in
//! `ashtaka_base`. Every entry point checks the resolver's ayanamsha first.

use ashtaka_base::{
    AshtakavargaResult, GocharaConfig, GocharaReport, NatalChart, PINNED_AYANAMSHA,
    PlanetConnection, TransitSnapshot, calculate_ashtakavarga, natal_connections, score_transits,
};
use chrono::{NaiveDate, NaiveTime};

use crate::birth::{BirthData, GeoLocation};
use crate::error::SearchError;
use crate::resolver::LongitudeResolver;

/// Transit positions for a calendar date are taken at this UTC time.
pub const TRANSIT_TIME_UTC: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(t) => t,
    None => NaiveTime::MIN,
};

fn check_ayanamsha(resolver: &dyn LongitudeResolver) -> Result<(), SearchError> {
    let found = resolver.ayanamsha();
    if found != PINNED_AYANAMSHA {
        return Err(SearchError::AyanamshaMismatch {
            expected: PINNED_AYANAMSHA,
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Resolve the birth instant and build the natal chart.
pub fn natal_chart_for_birth(
    resolver: &dyn LongitudeResolver,
    birth: &BirthData,
) -> Result<NatalChart, SearchError> {
    check_ayanamsha(resolver)?;
    let utc = birth.utc_datetime()?;
    let longitudes = resolver.resolve(utc, birth.location)?;
    let chart = NatalChart::from_longitudes(&longitudes)?;
    log::debug!(
        "natal chart for {utc} UTC: ascendant sign {}",
        chart.ascendant_sign()
    );
    Ok(chart)
}

/// BAV for all eight bodies, SAV, and sodhana for a birth.
pub fn ashtakavarga_for_birth(
    resolver: &dyn LongitudeResolver,
    birth: &BirthData,
) -> Result<AshtakavargaResult, SearchError> {
    let chart = natal_chart_for_birth(resolver, birth)?;
    Ok(calculate_ashtakavarga(&chart))
}

/// Natal planet connections for a birth.
pub fn connections_for_birth(
    resolver: &dyn LongitudeResolver,
    birth: &BirthData,
) -> Result<Vec<PlanetConnection>, SearchError> {
    let chart = natal_chart_for_birth(resolver, birth)?;
    Ok(natal_connections(&chart))
}

/// Transit positions on `date` at [`TRANSIT_TIME_UTC`].
pub fn transit_snapshot(
    resolver: &dyn LongitudeResolver,
    date: NaiveDate,
    location: GeoLocation,
) -> Result<TransitSnapshot, SearchError> {
    check_ayanamsha(resolver)?;
    let longitudes = resolver.resolve(date.and_time(TRANSIT_TIME_UTC), location)?;
    Ok(TransitSnapshot::from_longitudes(date, &longitudes)?)
}

/// Score transits on `date` against an already built natal chart.
pub fn gochara_with_natal(
    resolver: &dyn LongitudeResolver,
    natal: &NatalChart,
    location: GeoLocation,
    date: NaiveDate,
    config: &GocharaConfig,
) -> Result<GocharaReport, SearchError> {
    let snapshot = transit_snapshot(resolver, date, location)?;
    Ok(score_transits(natal, &snapshot, config))
}

/// Gochara report for a birth on `date`.
pub fn gochara_for_date(
    resolver: &dyn LongitudeResolver,
    birth: &BirthData,
    date: NaiveDate,
    config: &GocharaConfig,
) -> Result<GocharaReport, SearchError> {
    let natal = natal_chart_for_birth(resolver, birth)?;
    gochara_with_natal(resolver, &natal, birth.location, date, config)
}
