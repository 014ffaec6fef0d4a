//! Vedic planet (graha) enum, chart bodies, and rashi lordship.
//!
//! Three closed sets of bodies are used across the crate:
//! - [`Graha`]: the 9 grahas (7 classical planets + Rahu/Ketu), which transit.
//! - [`Body`]: anything that occupies a chart position (a graha or the Lagna).
//! - [`AshtakaBody`]: the 8 participants of Ashtakavarga (7 planets + Lagna).
//!
//! Body names are parsed once at the boundary; everything past it works on
//! the enums, so an unknown name can never reach the bindu engine.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ChartError;
use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Lowercase key used in JSON input and output.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Surya => "sun",
            Self::Chandra => "moon",
            Self::Mangal => "mars",
            Self::Buddh => "mercury",
            Self::Guru => "jupiter",
            Self::Shukra => "venus",
            Self::Shani => "saturn",
            Self::Rahu => "rahu",
            Self::Ketu => "ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl Serialize for Graha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl FromStr for Graha {
    type Err = ChartError;

    /// Accepts English or Sanskrit names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" | "surya" => Ok(Self::Surya),
            "moon" | "chandra" => Ok(Self::Chandra),
            "mars" | "mangal" => Ok(Self::Mangal),
            "mercury" | "buddh" | "budha" => Ok(Self::Buddh),
            "jupiter" | "guru" => Ok(Self::Guru),
            "venus" | "shukra" => Ok(Self::Shukra),
            "saturn" | "shani" => Ok(Self::Shani),
            "rahu" => Ok(Self::Rahu),
            "ketu" => Ok(Self::Ketu),
            _ => Err(ChartError::UnknownBody(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart bodies
// ---------------------------------------------------------------------------

/// A body that occupies a chart position: one of the grahas or the Lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Graha(Graha),
    Lagna,
}

/// All 10 chart bodies: 9 grahas followed by the Lagna.
pub const ALL_BODIES: [Body; 10] = [
    Body::Graha(Graha::Surya),
    Body::Graha(Graha::Chandra),
    Body::Graha(Graha::Mangal),
    Body::Graha(Graha::Buddh),
    Body::Graha(Graha::Guru),
    Body::Graha(Graha::Shukra),
    Body::Graha(Graha::Shani),
    Body::Graha(Graha::Rahu),
    Body::Graha(Graha::Ketu),
    Body::Lagna,
];

impl Body {
    /// English display name ("Ascendant" for the Lagna).
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Lagna => "Ascendant",
        }
    }

    /// Lowercase key used in JSON input and output.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Graha(g) => g.key(),
            Self::Lagna => "lagna",
        }
    }

    /// The graha, if this body is one.
    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Graha(g) => Some(g),
            Self::Lagna => None,
        }
    }
}

impl From<Graha> for Body {
    fn from(g: Graha) -> Self {
        Self::Graha(g)
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl Serialize for Body {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl FromStr for Body {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lagna" | "ascendant" | "asc" => Ok(Self::Lagna),
            _ => s.parse::<Graha>().map(Self::Graha),
        }
    }
}

// ---------------------------------------------------------------------------
// Ashtakavarga participants
// ---------------------------------------------------------------------------

/// The 8 Ashtakavarga participants: 7 sapta grahas + Lagna.
///
/// Each is both a target (owns a Bhinnashtakavarga) and a contributor
/// (grants bindus to every target's table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AshtakaBody {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Lagna,
}

/// All 8 participants in rule-table order.
pub const ALL_ASHTAKA_BODIES: [AshtakaBody; 8] = [
    AshtakaBody::Surya,
    AshtakaBody::Chandra,
    AshtakaBody::Mangal,
    AshtakaBody::Buddh,
    AshtakaBody::Guru,
    AshtakaBody::Shukra,
    AshtakaBody::Shani,
    AshtakaBody::Lagna,
];

impl AshtakaBody {
    /// 0-based index into ALL_ASHTAKA_BODIES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Lagna => 7,
        }
    }

    /// The chart body this participant reads its sign from.
    pub const fn body(self) -> Body {
        match self {
            Self::Surya => Body::Graha(Graha::Surya),
            Self::Chandra => Body::Graha(Graha::Chandra),
            Self::Mangal => Body::Graha(Graha::Mangal),
            Self::Buddh => Body::Graha(Graha::Buddh),
            Self::Guru => Body::Graha(Graha::Guru),
            Self::Shukra => Body::Graha(Graha::Shukra),
            Self::Shani => Body::Graha(Graha::Shani),
            Self::Lagna => Body::Lagna,
        }
    }

    /// Map a chart body onto a participant. None for Rahu/Ketu.
    pub const fn from_body(body: Body) -> Option<Self> {
        match body {
            Body::Graha(Graha::Surya) => Some(Self::Surya),
            Body::Graha(Graha::Chandra) => Some(Self::Chandra),
            Body::Graha(Graha::Mangal) => Some(Self::Mangal),
            Body::Graha(Graha::Buddh) => Some(Self::Buddh),
            Body::Graha(Graha::Guru) => Some(Self::Guru),
            Body::Graha(Graha::Shukra) => Some(Self::Shukra),
            Body::Graha(Graha::Shani) => Some(Self::Shani),
            Body::Graha(Graha::Rahu | Graha::Ketu) => None,
            Body::Lagna => Some(Self::Lagna),
        }
    }

    /// True for the Lagna, which is excluded from the Sarvashtakavarga sum.
    pub const fn is_lagna(self) -> bool {
        matches!(self, Self::Lagna)
    }

    pub const fn english_name(self) -> &'static str {
        self.body().english_name()
    }
}

impl Display for AshtakaBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl Serialize for AshtakaBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.body().key())
    }
}

impl FromStr for AshtakaBody {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body: Body = s.parse()?;
        Self::from_body(body).ok_or_else(|| ChartError::UnknownBody(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Lordship
// ---------------------------------------------------------------------------

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Lord of a sign given by its 1-based number. None outside 1..=12.
pub fn sign_lord(sign: u8) -> Option<Graha> {
    Rashi::from_number(sign).map(rashi_lord)
}

/// Signs (1-based) ruled by a graha, ascending. Empty for Rahu/Ketu.
pub fn signs_ruled_by(graha: Graha) -> Vec<u8> {
    ALL_RASHIS
        .iter()
        .filter(|&&r| !graha.is_node() && rashi_lord(r) == graha)
        .map(|r| r.number())
        .collect()
}
