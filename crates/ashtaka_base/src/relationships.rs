//! Graha dignity, natural friendship, nature, and house ownership.
//!
//! Dignity here is sign-level: exaltation and debilitation are judged by
//! whole sign, then own sign, then the natural relationship between the
//! graha and the lord of the sign it occupies.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord, signs_ruled_by};
use crate::rashi::{Rashi, house_of};

// ---------------------------------------------------------------------------
// Exaltation, debilitation, own signs
// ---------------------------------------------------------------------------

/// Exaltation sign (1-based) for sapta grahas. None for Rahu/Ketu.
///
/// Sun Mesha, Moon Vrishabha, Mars Makara, Mercury Kanya,
/// Jupiter Karka, Venus Meena, Saturn Tula.
pub const fn exaltation_sign(graha: Graha) -> Option<u8> {
    match graha {
        Graha::Surya => Some(1),
        Graha::Chandra => Some(2),
        Graha::Mangal => Some(10),
        Graha::Buddh => Some(6),
        Graha::Guru => Some(4),
        Graha::Shukra => Some(12),
        Graha::Shani => Some(7),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation sign: the 7th from exaltation. None for Rahu/Ketu.
pub const fn debilitation_sign(graha: Graha) -> Option<u8> {
    match exaltation_sign(graha) {
        Some(e) => Some((e + 5) % 12 + 1),
        None => None,
    }
}

/// Own signs (1-based) for sapta grahas. Empty for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> Vec<u8> {
    signs_ruled_by(graha)
}

// ---------------------------------------------------------------------------
// Natural friendship (Naisargika Maitri)
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural (naisargika) friendship between two sapta grahas (BPHS table).
/// Returns Neutral for any pairing involving Rahu/Ketu.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemies=Mercury
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        // Mercury: friends=Sun,Venus; enemies=Moon
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Sign-level dignity of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    OwnSign,
    Friend,
    Neutral,
    Enemy,
    Debilitated,
    /// Ascendant and the lunar nodes have no classical dignity.
    NotApplicable,
}

impl Dignity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::OwnSign => "Own Sign",
            Self::Friend => "Friend",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::Debilitated => "Debilitated",
            Self::NotApplicable => "N/A",
        }
    }
}

/// Dignity of a graha placed in `sign` (1-based).
///
/// Priority: exalted, debilitated, own sign, then the natural relationship
/// with the sign lord. Rahu/Ketu and out-of-range signs are NotApplicable.
pub fn dignity_in_sign(graha: Graha, sign: u8) -> Dignity {
    if graha.is_node() {
        return Dignity::NotApplicable;
    }
    let Some(rashi) = Rashi::from_number(sign) else {
        return Dignity::NotApplicable;
    };
    if exaltation_sign(graha) == Some(sign) {
        return Dignity::Exalted;
    }
    if debilitation_sign(graha) == Some(sign) {
        return Dignity::Debilitated;
    }
    let lord = rashi_lord(rashi);
    if lord == graha {
        return Dignity::OwnSign;
    }
    match naisargika_maitri(graha, lord) {
        NaisargikaMaitri::Friend => Dignity::Friend,
        NaisargikaMaitri::Enemy => Dignity::Enemy,
        NaisargikaMaitri::Neutral => Dignity::Neutral,
    }
}

// ---------------------------------------------------------------------------
// Nature
// ---------------------------------------------------------------------------

/// Natural benefic/malefic classification used by transit scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrahaNature {
    Benefic,
    Malefic,
    Neutral,
}

/// Moon, Jupiter and Venus are benefic; Mercury is neutral; the rest malefic.
pub const fn graha_nature(graha: Graha) -> GrahaNature {
    match graha {
        Graha::Chandra | Graha::Guru | Graha::Shukra => GrahaNature::Benefic,
        Graha::Buddh => GrahaNature::Neutral,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            GrahaNature::Malefic
        }
    }
}

// ---------------------------------------------------------------------------
// House ownership
// ---------------------------------------------------------------------------

/// Houses (1-based, ascending) whose signs `graha` rules, for the given
/// ascendant sign. Empty for Rahu/Ketu.
pub fn houses_owned(graha: Graha, ascendant_sign: u8) -> Vec<u8> {
    let mut houses: Vec<u8> = signs_ruled_by(graha)
        .into_iter()
        .map(|s| house_of(s, ascendant_sign))
        .collect();
    houses.sort_unstable();
    houses
}
