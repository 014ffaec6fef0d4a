//! Nakshatra (lunar mansion) lookup and Vimshottari lordship.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! each, with 4 padas of 3 deg 20'. Lordship follows the Vimshottari
//! sequence, repeating every 9 nakshatras starting from Ashwini (Ketu).

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Vimshottari lord sequence, starting at Ashwini.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vimshottari lord of this nakshatra.
    pub fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self.index() % 9) as usize]
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Vimshottari lord.
    pub lord: Graha,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - f64::from(nak_idx) * NAKSHATRA_SPAN).max(0.0);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    let nakshatra = ALL_NAKSHATRAS[nak_idx as usize];

    NakshatraInfo {
        nakshatra,
        pada,
        lord: nakshatra.lord(),
        degrees_in_nakshatra,
    }
}
