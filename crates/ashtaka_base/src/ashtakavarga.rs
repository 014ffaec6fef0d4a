//! Ashtakavarga (benefic points) calculations.
//!
//! Implements Bhinna Ashtakavarga (BAV), Sarvashtakavarga (SAV), Prastara
//! (contribution matrix) and Sodhana (reduction) operations per BPHS rules.
//!
//! Each of 8 targets (7 grahas + Lagna) receives bindus from 8 contributors
//! (7 grahas + Lagna) at fixed offsets from the contributor's sign. Points
//! are accumulated per sign first and then remapped into ascendant-relative
//! houses, so a chart can be reframed for another ascendant without
//! recomputing contributions.
//!
//! Mathematical invariants (totals across 12 signs, constant for ALL charts):
//! - Sun: 48, Moon: 49, Mars: 39, Mercury: 54, Jupiter: 56, Venus: 52,
//!   Saturn: 39, Lagna: 49
//! - SAV total (Lagna excluded): 337

use serde::Serialize;

use crate::chart::NatalChart;
use crate::graha::{ALL_ASHTAKA_BODIES, ALL_GRAHAS, AshtakaBody, signs_ruled_by};
use crate::rashi::{nth_sign_from, sign_of_house};

// ---------------------------------------------------------------------------
// Rules table (bitmask encoding)
// ---------------------------------------------------------------------------

/// Build a bitmask from 1-based offset values.
/// Bit i is set if offset i appears in the list.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// Ashtakavarga rules: RULES[target][contributor] = bitmask of favorable offsets.
///
/// target, contributor: 0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter,
/// 5=Venus, 6=Saturn, 7=Lagna
///
/// Offsets are 1-based (1=same rashi, 2=next rashi, ..., 12=previous rashi).
const RULES: [[u16; 8]; 8] = [
    // Sun (total: 48)
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Sun
        bits(&[3, 6, 10, 11]),             // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Mars
        bits(&[3, 5, 6, 9, 10, 11, 12]),   // from Mercury
        bits(&[5, 6, 9, 11]),              // from Jupiter
        bits(&[6, 7, 12]),                 // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Saturn
        bits(&[3, 4, 6, 10, 11, 12]),      // from Lagna
    ],
    // Moon (total: 49)
    [
        bits(&[3, 6, 7, 8, 10, 11]),       // from Sun
        bits(&[1, 3, 6, 7, 10, 11]),       // from Moon
        bits(&[2, 3, 5, 6, 9, 10, 11]),    // from Mars
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]), // from Mercury
        bits(&[1, 4, 7, 8, 10, 11, 12]),   // from Jupiter
        bits(&[3, 4, 5, 7, 9, 10, 11]),    // from Venus
        bits(&[3, 5, 6, 11]),              // from Saturn
        bits(&[3, 6, 10, 11]),             // from Lagna
    ],
    // Mars (total: 39)
    [
        bits(&[3, 5, 6, 10, 11]),       // from Sun
        bits(&[3, 6, 11]),              // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]), // from Mars
        bits(&[3, 5, 6, 11]),           // from Mercury
        bits(&[6, 10, 11, 12]),         // from Jupiter
        bits(&[6, 8, 11, 12]),          // from Venus
        bits(&[1, 4, 7, 8, 9, 10, 11]), // from Saturn
        bits(&[1, 3, 6, 10, 11]),       // from Lagna
    ],
    // Mercury (total: 54)
    [
        bits(&[5, 6, 9, 11, 12]),            // from Sun
        bits(&[2, 4, 6, 8, 10, 11]),         // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),   // from Mars
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),  // from Mercury
        bits(&[6, 8, 11, 12]),               // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),    // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),   // from Saturn
        bits(&[1, 2, 4, 6, 8, 10, 11]),      // from Lagna
    ],
    // Jupiter (total: 56)
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]), // from Sun
        bits(&[2, 5, 7, 9, 11]),              // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),       // from Mars
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),    // from Mercury
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),    // from Jupiter
        bits(&[2, 5, 6, 9, 10, 11]),          // from Venus
        bits(&[3, 5, 6, 12]),                 // from Saturn
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]), // from Lagna
    ],
    // Venus (total: 52)
    [
        bits(&[8, 11, 12]),                    // from Sun
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),  // from Moon
        bits(&[3, 4, 6, 9, 11, 12]),           // from Mars
        bits(&[3, 5, 6, 9, 11]),               // from Mercury
        bits(&[5, 8, 9, 10, 11]),              // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),  // from Venus
        bits(&[3, 4, 5, 8, 9, 10, 11]),        // from Saturn
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),      // from Lagna
    ],
    // Saturn (total: 39)
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]), // from Sun
        bits(&[3, 6, 11]),              // from Moon
        bits(&[3, 5, 6, 10, 11, 12]),   // from Mars
        bits(&[6, 8, 9, 10, 11, 12]),   // from Mercury
        bits(&[5, 6, 11, 12]),          // from Jupiter
        bits(&[6, 11, 12]),             // from Venus
        bits(&[3, 5, 6, 11]),           // from Saturn
        bits(&[1, 3, 4, 6, 10, 11]),    // from Lagna
    ],
    // Lagna (total: 49)
    [
        bits(&[3, 4, 6, 10, 11, 12]),         // from Sun
        bits(&[3, 6, 10, 11]),                // from Moon
        bits(&[1, 3, 6, 10, 11]),             // from Mars
        bits(&[1, 2, 4, 6, 8, 10, 11]),       // from Mercury
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]), // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),     // from Venus
        bits(&[1, 3, 4, 6, 10, 11]),          // from Saturn
        bits(&[3, 6, 10, 11]),                // from Lagna
    ],
];

/// Expected BAV totals per target, in ALL_ASHTAKA_BODIES order.
pub const BAV_TOTALS: [u8; 8] = [48, 49, 39, 54, 56, 52, 39, 49];

/// Expected SAV total (constant for all charts).
pub const SAV_TOTAL: u16 = 337;

/// Ceiling for one BAV cell: 8 contributors, one bindu each.
pub const BAV_CAP: u8 = 8;

/// Ceiling for one SAV cell: 7 charts at BAV_CAP each.
pub const SAV_CAP: u8 = 54;

/// Offsets (1-based, ascending) at which `contributor` grants a bindu to `target`.
pub fn benefic_offsets(target: AshtakaBody, contributor: AshtakaBody) -> Vec<u8> {
    let mask = RULES[target.index() as usize][contributor.index() as usize];
    (1u8..=12).filter(|k| (mask >> k) & 1 == 1).collect()
}

fn remap_to_houses(sign_points: &[u8; 12], ascendant_sign: u8) -> [u8; 12] {
    std::array::from_fn(|h| sign_points[(sign_of_house(h as u8 + 1, ascendant_sign) - 1) as usize])
}

// ---------------------------------------------------------------------------
// Bhinna Ashtakavarga (BAV)
// ---------------------------------------------------------------------------

/// Bhinna Ashtakavarga for a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BavChart {
    pub body: AshtakaBody,
    /// Bindus per sign (index 0 = Mesha).
    pub sign_points: [u8; 12],
    /// Bindus per house (index 0 = house 1).
    pub house_points: [u8; 12],
    /// 1-based ascendant sign the houses are framed against.
    pub ascendant_sign: u8,
}

impl BavChart {
    /// Total bindus across all 12 signs.
    pub fn total(&self) -> u16 {
        self.sign_points.iter().map(|&p| u16::from(p)).sum()
    }

    /// Bindus in a 1-based house.
    pub fn house(&self, house: u8) -> Option<u8> {
        house
            .checked_sub(1)
            .and_then(|i| self.house_points.get(i as usize).copied())
    }

    /// Bindus in a 1-based sign.
    pub fn sign(&self, sign: u8) -> Option<u8> {
        sign.checked_sub(1)
            .and_then(|i| self.sign_points.get(i as usize).copied())
    }

    /// Re-express the same sign table against another ascendant.
    pub fn reframed(&self, ascendant_sign: u8) -> Self {
        Self {
            house_points: remap_to_houses(&self.sign_points, ascendant_sign),
            ascendant_sign,
            ..*self
        }
    }
}

/// Calculate BAV for a single target.
///
/// Contributors absent from the chart are skipped.
pub fn compute_bav(target: AshtakaBody, chart: &NatalChart) -> BavChart {
    let rules = &RULES[target.index() as usize];
    let mut sign_points = [0u8; 12];

    for contributor in ALL_ASHTAKA_BODIES {
        let Some(r) = chart.sign_of(contributor.body()) else {
            log::debug!("BAV {target}: contributor {contributor} absent, skipped");
            continue;
        };
        let mask = rules[contributor.index() as usize];
        for k in 1u8..=12 {
            if (mask >> k) & 1 == 1 {
                let s = nth_sign_from(r, k);
                sign_points[(s - 1) as usize] += 1;
            }
        }
    }

    for (i, p) in sign_points.iter_mut().enumerate() {
        if *p > BAV_CAP {
            log::warn!("BAV {target}: sign {} has {} bindus, capped at {BAV_CAP}", i + 1, *p);
            *p = BAV_CAP;
        }
    }

    let ascendant_sign = chart.ascendant_sign();
    BavChart {
        body: target,
        sign_points,
        house_points: remap_to_houses(&sign_points, ascendant_sign),
        ascendant_sign,
    }
}

/// Calculate BAV for all 8 targets, in ALL_ASHTAKA_BODIES order.
pub fn compute_all_bav(chart: &NatalChart) -> [BavChart; 8] {
    std::array::from_fn(|i| compute_bav(ALL_ASHTAKA_BODIES[i], chart))
}

// ---------------------------------------------------------------------------
// Prastara (contribution matrix)
// ---------------------------------------------------------------------------

/// One contributor's row of a prastara: 1 where it granted a bindu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrastaraRow {
    pub contributor: AshtakaBody,
    /// Bindu marks per house (index 0 = house 1).
    pub house_marks: [u8; 12],
}

/// Which contributor granted which house its bindu, for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prastara {
    pub body: AshtakaBody,
    /// Rows for the contributors present in the chart.
    pub rows: Vec<PrastaraRow>,
}

impl Prastara {
    /// Column sums: bindus per house before capping.
    pub fn house_totals(&self) -> [u8; 12] {
        let mut totals = [0u8; 12];
        for row in &self.rows {
            for (t, m) in totals.iter_mut().zip(row.house_marks) {
                *t += m;
            }
        }
        totals
    }
}

pub fn compute_prastara(target: AshtakaBody, chart: &NatalChart) -> Prastara {
    let asc = chart.ascendant_sign();
    let rows = ALL_ASHTAKA_BODIES
        .iter()
        .filter_map(|&contributor| {
            let r = chart.sign_of(contributor.body())?;
            let mut sign_marks = [0u8; 12];
            for k in benefic_offsets(target, contributor) {
                sign_marks[(nth_sign_from(r, k) - 1) as usize] = 1;
            }
            Some(PrastaraRow {
                contributor,
                house_marks: remap_to_houses(&sign_marks, asc),
            })
        })
        .collect();
    Prastara { body: target, rows }
}

// ---------------------------------------------------------------------------
// Sarvashtakavarga (SAV)
// ---------------------------------------------------------------------------

/// Strength class of a SAV value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseStrength {
    Weak,
    Moderate,
    Good,
    Strong,
}

impl HouseStrength {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}

/// `<22` weak, `22..=27` moderate, `28..=29` good, `>=30` strong.
pub const fn classify_strength(value: u8) -> HouseStrength {
    match value {
        0..=21 => HouseStrength::Weak,
        22..=27 => HouseStrength::Moderate,
        28..=29 => HouseStrength::Good,
        _ => HouseStrength::Strong,
    }
}

/// Sarvashtakavarga: the 7 graha BAVs summed per sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavChart {
    /// Bindus per sign (index 0 = Mesha).
    pub sign_points: [u8; 12],
    /// Bindus per house (index 0 = house 1).
    pub house_points: [u8; 12],
    pub ascendant_sign: u8,
}

impl SavChart {
    pub fn total(&self) -> u16 {
        self.sign_points.iter().map(|&p| u16::from(p)).sum()
    }

    pub fn house(&self, house: u8) -> Option<u8> {
        house
            .checked_sub(1)
            .and_then(|i| self.house_points.get(i as usize).copied())
    }

    /// Strength class of a 1-based house.
    pub fn strength(&self, house: u8) -> Option<HouseStrength> {
        self.house(house).map(classify_strength)
    }

    /// Strength class for every house (index 0 = house 1).
    pub fn strengths(&self) -> [HouseStrength; 12] {
        self.house_points.map(classify_strength)
    }
}

/// Sum the graha BAVs (the Lagna's chart is skipped) into a SAV.
///
/// All charts are expected to share one ascendant; the houses follow the
/// first graha chart's framing.
pub fn sav_from_bavs(bavs: &[BavChart]) -> SavChart {
    let mut sums = [0u16; 12];
    for bav in bavs.iter().filter(|b| !b.body.is_lagna()) {
        for (s, &p) in sums.iter_mut().zip(&bav.sign_points) {
            *s += u16::from(p);
        }
    }
    let ascendant_sign = bavs
        .iter()
        .find(|b| !b.body.is_lagna())
        .map_or(1, |b| b.ascendant_sign);

    let sign_points: [u8; 12] = std::array::from_fn(|i| {
        if sums[i] > u16::from(SAV_CAP) {
            log::warn!("SAV: sign {} has {} bindus, capped at {SAV_CAP}", i + 1, sums[i]);
            SAV_CAP
        } else {
            sums[i] as u8
        }
    });

    SavChart {
        sign_points,
        house_points: remap_to_houses(&sign_points, ascendant_sign),
        ascendant_sign,
    }
}

/// Compute the SAV of a chart from its graha BAVs.
pub fn compute_sav(chart: &NatalChart) -> SavChart {
    sav_from_bavs(&compute_all_bav(chart))
}

// ---------------------------------------------------------------------------
// Sodhana (reductions)
// ---------------------------------------------------------------------------

/// The four element triangles: signs 1 to 4, each with its 5th and 9th.
fn trikona_groups() -> impl Iterator<Item = [u8; 3]> {
    (1..=4).map(|s| [s, nth_sign_from(s, 5), nth_sign_from(s, 9)])
}

/// Sign pairs under one lord where both signs are dual (Mithuna/Kanya
/// for Budha, Dhanu/Meena for Guru).
fn same_lord_pairs() -> impl Iterator<Item = [u8; 2]> {
    ALL_GRAHAS.iter().filter_map(|&g| match signs_ruled_by(g).as_slice() {
        &[a, b] if a % 3 == 0 && b % 3 == 0 => Some([a, b]),
        _ => None,
    })
}

/// Take the smallest value among `signs` off each of them.
fn reduce_by_min(points: &mut [u8; 12], signs: &[u8]) {
    let cell = |s: u8| usize::from(s - 1);
    if let Some(min) = signs.iter().map(|&s| points[cell(s)]).min() {
        for &s in signs {
            points[cell(s)] -= min;
        }
    }
}

/// Sign-indexed SAV after each reduction stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sodhana {
    pub after_trikona: [u8; 12],
    pub after_ekadhipatya: [u8; 12],
}

/// Trikona Sodhana on the SAV sign table, then Ekadhipatya Sodhana on
/// the result.
pub fn sodhana(sav: &SavChart) -> Sodhana {
    let mut after_trikona = sav.sign_points;
    for group in trikona_groups() {
        reduce_by_min(&mut after_trikona, &group);
    }
    let mut after_ekadhipatya = after_trikona;
    for pair in same_lord_pairs() {
        reduce_by_min(&mut after_ekadhipatya, &pair);
    }
    Sodhana {
        after_trikona,
        after_ekadhipatya,
    }
}

// ---------------------------------------------------------------------------
// Combined result
// ---------------------------------------------------------------------------

/// Complete Ashtakavarga result: all 8 BAVs, the SAV, and its reductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AshtakavargaResult {
    pub bavs: [BavChart; 8],
    pub sav: SavChart,
    pub sodhana: Sodhana,
}

impl AshtakavargaResult {
    pub fn bav(&self, body: AshtakaBody) -> &BavChart {
        &self.bavs[body.index() as usize]
    }
}

/// Calculate complete Ashtakavarga for a natal chart.
pub fn calculate_ashtakavarga(chart: &NatalChart) -> AshtakavargaResult {
    let bavs = compute_all_bav(chart);
    let sav = sav_from_bavs(&bavs);
    log::debug!(
        "ashtakavarga: ascendant sign {}, SAV total {}",
        sav.ascendant_sign,
        sav.total()
    );
    AshtakavargaResult {
        bavs,
        sodhana: sodhana(&sav),
        sav,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_counts_give_bav_totals() {
        for target in ALL_ASHTAKA_BODIES {
            let count: usize = ALL_ASHTAKA_BODIES
                .iter()
                .map(|&c| benefic_offsets(target, c).len())
                .sum();
            assert_eq!(count, usize::from(BAV_TOTALS[target.index() as usize]), "{target:?}");
        }
    }

    #[test]
    fn graha_offset_counts_give_sav_total() {
        let count: usize = ALL_ASHTAKA_BODIES
            .iter()
            .filter(|&&t| t != AshtakaBody::Lagna)
            .flat_map(|&t| ALL_ASHTAKA_BODIES.iter().map(move |&c| benefic_offsets(t, c).len()))
            .sum();
        assert_eq!(count, usize::from(SAV_TOTAL));
    }

    #[test]
    fn no_offset_bits_outside_1_to_12() {
        for row in &RULES {
            for &mask in row {
                assert_eq!(mask & 0b1110_0000_0000_0001, 0);
            }
        }
    }

    #[test]
    fn benefic_offsets_lookup() {
        assert_eq!(
            benefic_offsets(AshtakaBody::Shukra, AshtakaBody::Surya),
            vec![8, 11, 12]
        );
        assert_eq!(
            benefic_offsets(AshtakaBody::Lagna, AshtakaBody::Lagna),
            vec![3, 6, 10, 11]
        );
    }

    #[test]
    fn bav_totals_all_in_mesha() {
        let chart = NatalChart::from_signs(&[1; 7], 1).unwrap();
        for bav in compute_all_bav(&chart) {
            assert_eq!(bav.total(), u16::from(BAV_TOTALS[bav.body.index() as usize]));
        }
    }

    #[test]
    fn bav_totals_any_position() {
        let chart = NatalChart::from_signs(&[4, 8, 1, 12, 6, 10, 3], 2).unwrap();
        for bav in compute_all_bav(&chart) {
            assert_eq!(bav.total(), u16::from(BAV_TOTALS[bav.body.index() as usize]));
        }
    }

    #[test]
    fn bav_sun_all_in_mesha_known_cells() {
        // With everyone in Mesha, the Sun's sign points equal the number of
        // contributors granting each offset.
        let chart = NatalChart::from_signs(&[1; 7], 1).unwrap();
        let bav = compute_bav(AshtakaBody::Surya, &chart);
        // Offset 11: every contributor except Venus grants it.
        assert_eq!(bav.sign(11), Some(7));
        // Offset 1: Sun, Mars, Saturn.
        assert_eq!(bav.sign(1), Some(3));
        assert_eq!(bav.house_points, bav.sign_points);
    }

    #[test]
    fn missing_contributor_is_skipped() {
        use crate::chart::{BodyLongitude, ResolvedLongitudes};
        use crate::graha::{Body, Graha};
        let lons = ResolvedLongitudes::new()
            .with(Body::Lagna, BodyLongitude::new(5.0))
            .with(Graha::Surya, BodyLongitude::new(5.0));
        let chart = NatalChart::from_longitudes(&lons).unwrap();
        let bav = compute_bav(AshtakaBody::Surya, &chart);
        // Only Sun (8) and Lagna (6) contribute.
        assert_eq!(bav.total(), 14);
    }

    #[test]
    fn house_remap_follows_ascendant() {
        let chart = NatalChart::from_signs(&[5, 12, 6, 6, 3, 7, 5], 11).unwrap();
        let bav = compute_bav(AshtakaBody::Guru, &chart);
        // House 1 is Kumbha (sign 11), house 3 is Mesha.
        assert_eq!(bav.house(1), bav.sign(11));
        assert_eq!(bav.house(3), bav.sign(1));
        assert_eq!(bav.house(0), None);
    }

    #[test]
    fn reframe_keeps_sign_table() {
        let chart = NatalChart::from_signs(&[5, 12, 6, 6, 3, 7, 5], 11).unwrap();
        let original = compute_bav(AshtakaBody::Shani, &chart);
        let reframed = original.reframed(4);
        assert_eq!(reframed.sign_points, original.sign_points);
        assert_eq!(reframed.ascendant_sign, 4);
        assert_eq!(reframed.house(1), original.sign(4));
        assert_eq!(reframed.house(9), original.sign(12));
        assert_eq!(reframed.reframed(11), original);
    }

    #[test]
    fn sav_total_is_337() {
        let chart = NatalChart::from_signs(&[6, 3, 9, 11, 2, 7, 5], 10).unwrap();
        let sav = compute_sav(&chart);
        assert_eq!(sav.total(), SAV_TOTAL);
        assert!(sav.sign_points.iter().all(|&p| p <= SAV_CAP));
    }

    #[test]
    fn sav_excludes_lagna_chart() {
        let chart = NatalChart::from_signs(&[6, 3, 9, 11, 2, 7, 5], 10).unwrap();
        let bavs = compute_all_bav(&chart);
        let sav = sav_from_bavs(&bavs);
        let with_lagna: u16 = bavs.iter().map(BavChart::total).sum();
        assert_eq!(with_lagna, SAV_TOTAL + 49);
        assert_eq!(sav.total(), SAV_TOTAL);
    }

    #[test]
    fn strength_boundaries() {
        assert_eq!(classify_strength(0), HouseStrength::Weak);
        assert_eq!(classify_strength(21), HouseStrength::Weak);
        assert_eq!(classify_strength(22), HouseStrength::Moderate);
        assert_eq!(classify_strength(27), HouseStrength::Moderate);
        assert_eq!(classify_strength(28), HouseStrength::Good);
        assert_eq!(classify_strength(29), HouseStrength::Good);
        assert_eq!(classify_strength(30), HouseStrength::Strong);
        assert_eq!(classify_strength(54), HouseStrength::Strong);
    }

    #[test]
    fn prastara_columns_sum_to_bav() {
        let chart = NatalChart::from_signs(&[5, 12, 6, 6, 3, 7, 5], 11).unwrap();
        for target in ALL_ASHTAKA_BODIES {
            let p = compute_prastara(target, &chart);
            assert_eq!(p.rows.len(), 8);
            assert_eq!(p.house_totals(), compute_bav(target, &chart).house_points);
        }
    }

    #[test]
    fn trikona_groups_are_elements() {
        let groups: Vec<_> = trikona_groups().collect();
        assert_eq!(groups, vec![[1, 5, 9], [2, 6, 10], [3, 7, 11], [4, 8, 12]]);
    }

    #[test]
    fn same_lord_pairs_are_budha_and_guru() {
        let pairs: Vec<_> = same_lord_pairs().collect();
        assert_eq!(pairs, vec![[3, 6], [9, 12]]);
    }

    #[test]
    fn sodhana_chennai_chart() {
        // Sun 6, Moon 12, Mars 6, Mercury 6, Jupiter 3, Venus 7, Saturn 5; Kumbha lagna.
        let chart = NatalChart::from_signs(&[6, 12, 6, 6, 3, 7, 5], 11).unwrap();
        let sav = compute_sav(&chart);
        assert_eq!(sav.sign_points, [32, 33, 32, 34, 23, 21, 22, 30, 29, 28, 27, 26]);

        let reduced = sodhana(&sav);
        // Fire 32/23/29 less 23, earth 33/21/28 less 21,
        // air 32/22/27 less 22, water 34/30/26 less 26.
        assert_eq!(reduced.after_trikona, [9, 12, 10, 8, 0, 0, 0, 4, 6, 7, 5, 0]);
        // Kanya and Meena are already empty, so the pairs change nothing.
        assert_eq!(reduced.after_ekadhipatya, reduced.after_trikona);
        assert_eq!(calculate_ashtakavarga(&chart).sodhana, reduced);
    }

    #[test]
    fn ekadhipatya_reduces_dual_sign_pairs() {
        let sign_points = [30, 28, 35, 25, 30, 31, 33, 27, 32, 28, 34, 29];
        let sav = SavChart {
            sign_points,
            house_points: remap_to_houses(&sign_points, 1),
            ascendant_sign: 1,
        };
        let reduced = sodhana(&sav);
        assert_eq!(reduced.after_trikona, [0, 0, 2, 0, 0, 3, 0, 2, 2, 0, 1, 4]);
        // Mithuna/Kanya 2/3 less 2, Dhanu/Meena 2/4 less 2.
        assert_eq!(reduced.after_ekadhipatya, [0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 1, 2]);
    }

    #[test]
    fn full_result_reductions_shrink() {
        let chart = NatalChart::from_signs(&[1, 4, 7, 10, 2, 5, 8], 11).unwrap();
        let result = calculate_ashtakavarga(&chart);
        assert_eq!(result.sav.total(), SAV_TOTAL);
        assert_eq!(result.bav(AshtakaBody::Lagna).total(), 49);
        let trikona: u16 = result.sodhana.after_trikona.iter().map(|&p| u16::from(p)).sum();
        let ekadhi: u16 = result.sodhana.after_ekadhipatya.iter().map(|&p| u16::from(p)).sum();
        assert!(trikona <= SAV_TOTAL);
        assert!(ekadhi <= trikona);
    }
}
