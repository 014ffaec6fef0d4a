//! Ashtakavarga and Gochara calculations over resolved sidereal longitudes.
//!
//! This crate provides:
//! - Rashi, house, and nakshatra mapping of sidereal longitudes
//! - Bhinna Ashtakavarga, Sarvashtakavarga, prastara, and sodhana
//! - Sign-level dignity, whole-house aspects, and house classifications
//! - Gochara (transit) scoring with overall health and house rankings
//!
//! Everything here is pure computation: no I/O, no ephemeris. Longitudes
//! are expected to be Lahiri sidereal values (see [`PINNED_AYANAMSHA`]).

pub mod ashtakavarga;
pub mod ayanamsha;
pub mod bhava;
pub mod chart;
pub mod connections;
pub mod drishti;
pub mod error;
pub mod gochara;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod relationships;

pub use ashtakavarga::{
    AshtakavargaResult, BAV_CAP, BAV_TOTALS, BavChart, HouseStrength, Prastara, PrastaraRow,
    SAV_CAP, SAV_TOTAL, SavChart, Sodhana, calculate_ashtakavarga, classify_strength,
    compute_all_bav, compute_bav, compute_prastara, compute_sav, sav_from_bavs,
};
pub use ayanamsha::{AyanamshaSystem, PINNED_AYANAMSHA};
pub use bhava::{HouseSignification, house_quality_score, house_signification};
pub use chart::{BodyLongitude, NatalChart, Position, ResolvedLongitudes, TransitSnapshot};
pub use connections::{PlanetConnection, natal_connections};
pub use error::ChartError;
pub use gochara::{
    GocharaConfig, GocharaReport, HouseRanking, OverallHealth, RagStatus, TransitScore,
    overall_health, rag_status, rank_house_activations, score_transit, score_transits,
};
pub use graha::{ALL_ASHTAKA_BODIES, ALL_BODIES, ALL_GRAHAS, AshtakaBody, Body, Graha};
pub use nakshatra::{Nakshatra, NakshatraInfo};
pub use rashi::{Rashi, house_of, sign_index, sign_of_house};
pub use relationships::Dignity;
