//! Auspicious-date scan over a calendar month.
//!
//! Every date of the month is resolved at 12:00 UTC, scored with Gochara
//! against one natal chart, and optionally adjusted by the natal SAV of
//! the houses being transited. Dates are scored in parallel; a date that
//! fails to resolve is logged and left out.

use ashtaka_base::gochara::GREEN_THRESHOLD;
use ashtaka_base::{GocharaConfig, GocharaReport, RagStatus, SAV_CAP, rag_status};
use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::birth::BirthData;
use crate::error::{InputError, SearchError};
use crate::jyotish::{gochara_with_natal, natal_chart_for_birth};
use crate::resolver::LongitudeResolver;

/// Planets considered when writing reasons for a date.
const REASON_CANDIDATES: usize = 5;
/// Maximum reasons kept per date.
const MAX_REASONS: usize = 5;
/// Houses listed in the SAV reason.
const SAV_REASON_HOUSES: usize = 2;

/// Tunables of the month scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Number of best dates reported. Default: 10.
    pub top_n: usize,
    /// SAV at or above this earns the bonus. Default: 30.
    pub strong_sav_threshold: u8,
    /// SAV below this costs the penalty. Default: 22.
    pub weak_sav_threshold: u8,
    /// Default: 5.0.
    pub strong_sav_bonus: f64,
    /// Default: 3.0.
    pub weak_sav_penalty: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            strong_sav_threshold: 30,
            weak_sav_threshold: 22,
            strong_sav_bonus: 5.0,
            weak_sav_penalty: 3.0,
        }
    }
}

/// One scored date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuspiciousDate {
    pub date: NaiveDate,
    /// Final score in [0, 100].
    pub score: f64,
    /// Gochara overall average before the SAV adjustment.
    pub base_score: f64,
    pub rag: RagStatus,
    pub reasons: Vec<String>,
}

/// Result of a month scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuspiciousDates {
    pub year: i32,
    pub month: u32,
    /// Every scored date, chronological.
    pub dates: Vec<AuspiciousDate>,
    /// The `top_n` best dates, chronological.
    pub top: Vec<AuspiciousDate>,
    /// Number of dates scored.
    pub analysed: usize,
    /// Dates that could not be scored.
    pub skipped: Vec<NaiveDate>,
}

/// All dates of a calendar month.
pub fn month_dates(year: i32, month: u32) -> Result<Vec<NaiveDate>, InputError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(InputError::InvalidMonth { year, month })?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect())
}

/// Apply the SAV adjustment and write reasons for one Gochara report.
pub fn score_date(
    report: &GocharaReport,
    sav: Option<&[u8; 12]>,
    config: &ScanConfig,
) -> AuspiciousDate {
    let base_score = report.overall.average_score;
    let mut modifier = 0.0;
    let mut sav_reasons = Vec::new();

    if let Some(sav) = sav {
        for t in &report.transits {
            let points = sav[usize::from(t.transit_house - 1)];
            if points >= config.strong_sav_threshold {
                modifier += config.strong_sav_bonus;
            } else if points < config.weak_sav_threshold {
                modifier -= config.weak_sav_penalty;
            } else {
                continue;
            }
            sav_reasons.push(format!("H{} (SAV {points})", t.transit_house));
        }
    }
    let score = (base_score + modifier).clamp(0.0, 100.0);

    let mut ranked: Vec<_> = report.transits.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    let mut reasons: Vec<String> = ranked
        .iter()
        .take(REASON_CANDIDATES)
        .filter(|t| t.score >= GREEN_THRESHOLD)
        .map(|t| format!("{} in H{} ({})", t.body, t.transit_house, t.rag.name()))
        .collect();
    if !sav_reasons.is_empty() {
        let listed = sav_reasons.len().min(SAV_REASON_HOUSES);
        reasons.push(format!("SAV: {}", sav_reasons[..listed].join(", ")));
    }
    reasons.truncate(MAX_REASONS);

    AuspiciousDate {
        date: report.date,
        score,
        base_score,
        rag: rag_status(score),
        reasons,
    }
}

/// The `n` best dates (ties to the earlier date), returned chronologically.
pub fn top_dates(dates: &[AuspiciousDate], n: usize) -> Vec<AuspiciousDate> {
    let mut best = dates.to_vec();
    best.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.date.cmp(&b.date)));
    best.truncate(n);
    best.sort_by_key(|d| d.date);
    best
}

/// Scan a month for favourable dates.
///
/// The natal chart is built once; its failure fails the scan. Per-date
/// failures are logged and listed in [`AuspiciousDates::skipped`].
pub fn auspicious_dates(
    resolver: &dyn LongitudeResolver,
    birth: &BirthData,
    year: i32,
    month: u32,
    sav: Option<&[u8; 12]>,
    gochara: &GocharaConfig,
    config: &ScanConfig,
) -> Result<AuspiciousDates, SearchError> {
    if let Some(sav) = sav {
        if sav.iter().any(|&p| p > SAV_CAP) {
            return Err(InputError::InvalidSav("house value above 54").into());
        }
    }
    let days = month_dates(year, month)?;
    let natal = natal_chart_for_birth(resolver, birth)?;

    let outcomes: Vec<Result<AuspiciousDate, NaiveDate>> = days
        .par_iter()
        .map(|&date| {
            match gochara_with_natal(resolver, &natal, birth.location, date, gochara) {
                Ok(report) => Ok(score_date(&report, sav, config)),
                Err(e) => {
                    log::warn!("auspicious scan: skipping {date}: {e}");
                    Err(date)
                }
            }
        })
        .collect();

    let mut dates = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(d) => dates.push(d),
            Err(date) => skipped.push(date),
        }
    }
    dates.sort_by_key(|d| d.date);
    let top = top_dates(&dates, config.top_n);
    log::debug!(
        "auspicious scan {year}-{month:02}: {} scored, {} skipped",
        dates.len(),
        skipped.len()
    );

    Ok(AuspiciousDates {
        year,
        month,
        analysed: dates.len(),
        dates,
        top,
        skipped,
    })
}
