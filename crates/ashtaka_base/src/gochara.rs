//! Gochara (transit) scoring against a natal chart.
//!
//! Each transiting graha is placed into the natal house frame, scored from
//! the quality of that house (adjusted for the graha's nature) and the
//! graha's natal dignity, and classified into a RAG band. Scores are then
//! aggregated into an overall health figure and a ranking of activated houses.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bhava::{
    house_quality_score, house_signification, is_dusthana, is_kendra, is_trikona, is_upachaya,
};
use crate::chart::{NatalChart, TransitSnapshot};
use crate::drishti::aspected_houses;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::nakshatra::Nakshatra;
use crate::rashi::house_of;
use crate::relationships::{Dignity, GrahaNature, dignity_in_sign, graha_nature, houses_owned};

/// Score at or above which a transit is Green.
pub const GREEN_THRESHOLD: f64 = 70.0;
/// Score at or above which a transit is Amber (below Green).
pub const AMBER_THRESHOLD: f64 = 40.0;

/// Weight of house quality in the house ranking.
const RANKING_QUALITY_WEIGHT: f64 = 0.4;
/// Weight of activation intensity in the house ranking.
const RANKING_INTENSITY_WEIGHT: f64 = 0.6;
/// Intensity points per activating graha, capped at 100.
const INTENSITY_PER_ACTIVATION: f64 = 20.0;

/// Tunable weights of the per-graha transit score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GocharaConfig {
    /// Weight of the nature-adjusted house score. Default: 0.6.
    pub house_weight: f64,
    /// Weight of the natal dignity score. Default: 0.4.
    pub dignity_weight: f64,
    /// Multiplier applied to retrograde non-node grahas. Default: 0.9.
    pub retrograde_factor: f64,
}

impl Default for GocharaConfig {
    fn default() -> Self {
        Self {
            house_weight: 0.6,
            dignity_weight: 0.4,
            retrograde_factor: 0.9,
        }
    }
}

// ---------------------------------------------------------------------------
// RAG
// ---------------------------------------------------------------------------

/// Traffic-light classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RagStatus {
    Green,
    Amber,
    Red,
}

impl RagStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Amber => "AMBER",
            Self::Red => "RED",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "supportive",
            Self::Amber => "mixed",
            Self::Red => "challenging",
        }
    }
}

/// `>= 70` Green, `>= 40` Amber, otherwise Red.
pub fn rag_status(score: f64) -> RagStatus {
    if score >= GREEN_THRESHOLD {
        RagStatus::Green
    } else if score >= AMBER_THRESHOLD {
        RagStatus::Amber
    } else {
        RagStatus::Red
    }
}

// ---------------------------------------------------------------------------
// Component scores
// ---------------------------------------------------------------------------

pub const fn dignity_score(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 100.0,
        Dignity::OwnSign => 90.0,
        Dignity::Friend => 70.0,
        Dignity::Neutral => 50.0,
        Dignity::Enemy => 30.0,
        Dignity::Debilitated => 10.0,
        Dignity::NotApplicable => 50.0,
    }
}

/// House quality adjusted for the transiting graha's nature.
///
/// Benefics: +10 in kendra or trikona, -5 in dusthana.
/// Malefics: +10 in upachaya, else +5 in dusthana, else -10.
pub fn nature_adjusted_house_score(graha: Graha, house: u8) -> f64 {
    let base = house_quality_score(house);
    match graha_nature(graha) {
        GrahaNature::Benefic if is_kendra(house) || is_trikona(house) => base + 10.0,
        GrahaNature::Benefic if is_dusthana(house) => base - 5.0,
        GrahaNature::Malefic if is_upachaya(house) => base + 10.0,
        GrahaNature::Malefic if is_dusthana(house) => base + 5.0,
        GrahaNature::Malefic => base - 10.0,
        GrahaNature::Benefic | GrahaNature::Neutral => base,
    }
}

/// Weighted combination, retrograde factor, clamp to [0, 100].
///
/// The retrograde factor never applies to Rahu/Ketu.
pub fn combine_score(
    graha: Graha,
    house_score: f64,
    dignity_score: f64,
    retrograde: bool,
    config: &GocharaConfig,
) -> f64 {
    let modifier = if retrograde && !graha.is_node() {
        config.retrograde_factor
    } else {
        1.0
    };
    let raw = (house_score * config.house_weight + dignity_score * config.dignity_weight) * modifier;
    raw.clamp(0.0, 100.0)
}

/// Houses activated by a transiting graha (sorted, deduplicated).
///
/// The transit house, its aspects, and, when the lord of the transit
/// nakshatra is in the natal chart, that lord's natal house and the houses
/// it owns from the natal lagna.
pub fn activated_houses(
    graha: Graha,
    transit_house: u8,
    nakshatra_lord: Graha,
    natal: &NatalChart,
) -> Vec<u8> {
    let mut houses = vec![transit_house];
    houses.extend(aspected_houses(graha, transit_house));
    if let Some(lord_house) = natal.house_of(nakshatra_lord) {
        houses.push(lord_house);
        houses.extend(houses_owned(nakshatra_lord, natal.ascendant_sign()));
    }
    houses.sort_unstable();
    houses.dedup();
    houses
}

// ---------------------------------------------------------------------------
// Per-graha score
// ---------------------------------------------------------------------------

/// Transit evaluation of one graha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitScore {
    pub body: Graha,
    pub natal_house: u8,
    pub transit_house: u8,
    /// 1-based transit sign.
    pub transit_sign: u8,
    /// Degrees within the transit sign.
    pub transit_degree: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub nakshatra_lord: Graha,
    /// Natal dignity.
    pub dignity: Dignity,
    pub retrograde: bool,
    pub activated_houses: Vec<u8>,
    pub house_score: f64,
    pub dignity_score: f64,
    pub score: f64,
    pub rag: RagStatus,
}

/// Score one graha. None when it is absent from either chart.
pub fn score_transit(
    graha: Graha,
    natal: &NatalChart,
    transit: &TransitSnapshot,
    config: &GocharaConfig,
) -> Option<TransitScore> {
    let natal_pos = natal.position(graha)?;
    let transit_pos = transit.position(graha)?;

    let asc = natal.ascendant_sign();
    let natal_house = house_of(natal_pos.sign_index, asc);
    let transit_house = house_of(transit_pos.sign_index, asc);
    let nak = transit_pos.nakshatra;

    let dignity = dignity_in_sign(graha, natal_pos.sign_index);
    let house_score = nature_adjusted_house_score(graha, transit_house);
    let d_score = dignity_score(dignity);
    let score = combine_score(graha, house_score, d_score, transit_pos.retrograde, config);

    Some(TransitScore {
        body: graha,
        natal_house,
        transit_house,
        transit_sign: transit_pos.sign_index,
        transit_degree: transit_pos.degrees_in_sign,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
        nakshatra_lord: nak.lord,
        dignity,
        retrograde: transit_pos.retrograde,
        activated_houses: activated_houses(graha, transit_house, nak.lord, natal),
        house_score,
        dignity_score: d_score,
        score,
        rag: rag_status(score),
    })
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Mean of all transit scores with RAG bucket counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallHealth {
    pub average_score: f64,
    pub rag: RagStatus,
    pub green_count: usize,
    pub amber_count: usize,
    pub red_count: usize,
    pub total_planets: usize,
}

/// Aggregate scores. An empty set reports 50.0 (Amber) with zero counts.
///
/// The reported average is rounded to one decimal; the RAG bucket is taken
/// from the unrounded mean.
pub fn overall_health(scores: &[f64]) -> OverallHealth {
    let mean = if scores.is_empty() {
        50.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    let count = |rag: RagStatus| scores.iter().filter(|&&s| rag_status(s) == rag).count();
    OverallHealth {
        average_score: (mean * 10.0).round() / 10.0,
        rag: rag_status(mean),
        green_count: count(RagStatus::Green),
        amber_count: count(RagStatus::Amber),
        red_count: count(RagStatus::Red),
        total_planets: scores.len(),
    }
}

/// Activation intensity of one house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseRanking {
    pub house: u8,
    pub area: &'static str,
    pub themes: &'static [&'static str],
    pub activation_count: usize,
    /// Grahas activating the house, in scoring order.
    pub planets: Vec<Graha>,
    pub quality_score: f64,
    pub weighted_score: f64,
    pub rag: RagStatus,
}

/// Rank every activated house by `quality*0.4 + min(count*20, 100)*0.6`.
///
/// Sorted by weighted score descending; ties go to the lower house.
pub fn rank_house_activations(scores: &[TransitScore]) -> Vec<HouseRanking> {
    let mut by_house: BTreeMap<u8, Vec<Graha>> = BTreeMap::new();
    for ts in scores {
        for &h in &ts.activated_houses {
            by_house.entry(h).or_default().push(ts.body);
        }
    }

    let mut ranked: Vec<HouseRanking> = by_house
        .into_iter()
        .map(|(house, planets)| {
            let quality_score = house_quality_score(house);
            let intensity = (planets.len() as f64 * INTENSITY_PER_ACTIVATION).min(100.0);
            let weighted_score =
                quality_score * RANKING_QUALITY_WEIGHT + intensity * RANKING_INTENSITY_WEIGHT;
            let (area, themes) = house_signification(house)
                .map_or(("", &[][..]), |s| (s.area, s.themes));
            HouseRanking {
                house,
                area,
                themes,
                activation_count: planets.len(),
                planets,
                quality_score,
                weighted_score,
                rag: rag_status(weighted_score),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.weighted_score
            .total_cmp(&a.weighted_score)
            .then(a.house.cmp(&b.house))
    });
    ranked
}

/// Full Gochara evaluation for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GocharaReport {
    pub date: NaiveDate,
    pub transits: Vec<TransitScore>,
    pub overall: OverallHealth,
    pub house_rankings: Vec<HouseRanking>,
}

/// Score every graha present in both charts. The Lagna never transits.
pub fn score_transits(
    natal: &NatalChart,
    transit: &TransitSnapshot,
    config: &GocharaConfig,
) -> GocharaReport {
    let transits: Vec<TransitScore> = ALL_GRAHAS
        .iter()
        .filter_map(|&g| {
            let scored = score_transit(g, natal, transit, config);
            if scored.is_none() {
                log::debug!("gochara {}: {g} absent, skipped", transit.date());
            }
            scored
        })
        .collect();

    let scores: Vec<f64> = transits.iter().map(|t| t.score).collect();
    let overall = overall_health(&scores);
    let house_rankings = rank_house_activations(&transits);
    log::debug!(
        "gochara {}: {} transits, average {:.1}",
        transit.date(),
        transits.len(),
        overall.average_score
    );

    GocharaReport {
        date: transit.date(),
        transits,
        overall,
        house_rankings,
    }
}
