//! Ayanamsha identification for sidereal longitude inputs.
//!
//! The engine does not compute ayanamsha itself. Longitude sources declare
//! which system their sidereal values use, and anything other than
//! [`PINNED_AYANAMSHA`] is rejected at the boundary: a different ayanamsha
//! shifts sign boundaries and with them every downstream bindu.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

/// Sidereal reference systems a longitude source may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    Lahiri,
    /// True Lahiri: Lahiri anchor against the true equinox.
    TrueLahiri,
    /// Krishnamurti Paddhati.
    KP,
    /// B.V. Raman.
    Raman,
    /// Fagan-Bradley.
    FaganBradley,
}

/// The ayanamsha every chart in this workspace assumes.
pub const PINNED_AYANAMSHA: AyanamshaSystem = AyanamshaSystem::Lahiri;

impl AyanamshaSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::TrueLahiri => "true_lahiri",
            Self::KP => "kp",
            Self::Raman => "raman",
            Self::FaganBradley => "fagan_bradley",
        }
    }
}

impl Display for AyanamshaSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AyanamshaSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "lahiri" | "chitrapaksha" => Ok(Self::Lahiri),
            "true_lahiri" => Ok(Self::TrueLahiri),
            "kp" | "krishnamurti" => Ok(Self::KP),
            "raman" => Ok(Self::Raman),
            "fagan_bradley" => Ok(Self::FaganBradley),
            other => Err(format!("unknown ayanamsha: {other}")),
        }
    }
}
