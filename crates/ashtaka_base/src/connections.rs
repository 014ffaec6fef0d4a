//! Natal planet connections: every house a graha is tied to.
//!
//! A graha connects to the house it occupies, the houses it owns, the houses
//! it aspects, and (through lordship) the placement and ownership of both its
//! sign lord and its nakshatra lord.

use serde::Serialize;

use crate::chart::NatalChart;
use crate::drishti::aspected_houses;
use crate::graha::{ALL_GRAHAS, Graha, rashi_lord};
use crate::nakshatra::Nakshatra;
use crate::relationships::{Dignity, dignity_in_sign, houses_owned};

/// Connections of one natal graha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetConnection {
    pub graha: Graha,
    pub placed_house: u8,
    pub sign: u8,
    pub sign_lord: Graha,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub nakshatra_lord: Graha,
    pub dignity: Dignity,
    /// Degrees within the sign.
    pub degree: f64,
    pub retrograde: bool,
    pub owns: Vec<u8>,
    pub aspects: Vec<u8>,
    /// None when the nakshatra lord is not in the chart.
    pub nakshatra_lord_house: Option<u8>,
    pub nakshatra_lord_owns: Vec<u8>,
    /// None when the sign lord is not in the chart.
    pub sign_lord_house: Option<u8>,
    pub sign_lord_owns: Vec<u8>,
    /// Union of all of the above, ascending.
    pub connected_houses: Vec<u8>,
}

/// Connections for every graha present in the chart, in traditional order.
pub fn natal_connections(chart: &NatalChart) -> Vec<PlanetConnection> {
    let asc = chart.ascendant_sign();
    ALL_GRAHAS
        .iter()
        .filter_map(|&graha| {
            let pos = chart.position(graha)?;
            let placed_house = chart.house_of(graha)?;
            let sign_lord = rashi_lord(pos.rashi);
            let nakshatra_lord = pos.nakshatra.lord;

            let owns = houses_owned(graha, asc);
            let aspects = aspected_houses(graha, placed_house);
            let nakshatra_lord_house = chart.house_of(nakshatra_lord);
            let nakshatra_lord_owns = houses_owned(nakshatra_lord, asc);
            let sign_lord_house = chart.house_of(sign_lord);
            let sign_lord_owns = houses_owned(sign_lord, asc);

            let mut connected_houses: Vec<u8> = std::iter::once(placed_house)
                .chain(owns.iter().copied())
                .chain(nakshatra_lord_house)
                .chain(nakshatra_lord_owns.iter().copied())
                .chain(sign_lord_house)
                .chain(sign_lord_owns.iter().copied())
                .chain(aspects.iter().copied())
                .collect();
            connected_houses.sort_unstable();
            connected_houses.dedup();

            Some(PlanetConnection {
                graha,
                placed_house,
                sign: pos.sign_index,
                sign_lord,
                nakshatra: pos.nakshatra.nakshatra,
                pada: pos.nakshatra.pada,
                nakshatra_lord,
                dignity: dignity_in_sign(graha, pos.sign_index),
                degree: pos.degrees_in_sign,
                retrograde: pos.retrograde,
                owns,
                aspects,
                nakshatra_lord_house,
                nakshatra_lord_owns,
                sign_lord_house,
                sign_lord_owns,
                connected_houses,
            })
        })
        .collect()
}
