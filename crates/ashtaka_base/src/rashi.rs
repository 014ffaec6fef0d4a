//! Rashi (zodiac sign), DMS, and house mapping.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude, we identify which rashi the point falls in
//! and express the position as degrees-minutes-seconds within that sign.
//!
//! Public sign and house numbers are 1-based (Mesha = 1, house 1 = the
//! ascendant's own sign). Houses are counted forward from the ascendant.

use serde::Serialize;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi for a 1-based sign number. None outside 1..=12.
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(ALL_RASHIS[(n - 1) as usize])
        } else {
            None
        }
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 1-based sign number (1 = Mesha).
    pub sign_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = (remainder.floor() as u8).min(59);
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Normalize longitude to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// 1-based sign index for any real longitude.
///
/// Total: NaN and infinities map to 1 (the float-to-int cast saturates to 0),
/// exact multiples of 360 land on Mesha.
pub fn sign_index(longitude: f64) -> u8 {
    let lon = normalize_360(longitude);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let idx = ((lon / 30.0).floor() as u8).min(11);
    idx + 1
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let sign = sign_index(lon);
    let degrees_in_rashi = (lon - f64::from(sign - 1) * 30.0).max(0.0);
    RashiInfo {
        rashi: ALL_RASHIS[(sign - 1) as usize],
        sign_index: sign,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

/// Wrap any integer into the 1..=12 cycle.
pub fn wrap_12(value: i32) -> u8 {
    ((value - 1).rem_euclid(12) + 1) as u8
}

/// House (1..=12) occupied by `sign` for the given ascendant sign.
///
/// House 1 is always the ascendant's own sign.
pub fn house_of(sign: u8, ascendant_sign: u8) -> u8 {
    wrap_12(i32::from(sign) - i32::from(ascendant_sign) + 1)
}

/// Sign (1..=12) occupying `house` for the given ascendant sign.
pub fn sign_of_house(house: u8, ascendant_sign: u8) -> u8 {
    wrap_12(i32::from(ascendant_sign) + i32::from(house) - 1)
}

/// The sign `n` places from `sign`, counted inclusively (n = 1 is `sign`).
pub fn nth_sign_from(sign: u8, n: u8) -> u8 {
    wrap_12(i32::from(sign) + i32::from(n) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_number(r.number()), Some(*r));
        }
        assert_eq!(Rashi::from_number(0), None);
        assert_eq!(Rashi::from_number(13), None);
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn sign_index_boundaries() {
        assert_eq!(sign_index(0.0), 1);
        assert_eq!(sign_index(29.999), 1);
        assert_eq!(sign_index(30.0), 2);
        assert_eq!(sign_index(359.999), 12);
        assert_eq!(sign_index(360.0), 1);
        assert_eq!(sign_index(-10.0), 12);
        assert_eq!(sign_index(725.0), 1);
    }

    #[test]
    fn sign_index_non_finite_is_total() {
        assert!((1..=12).contains(&sign_index(f64::NAN)));
        assert!((1..=12).contains(&sign_index(f64::INFINITY)));
        assert!((1..=12).contains(&sign_index(f64::NEG_INFINITY)));
    }

    #[test]
    fn normalize_tiny_negative() {
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert_eq!(info.sign_index, 2);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
    }

    #[test]
    fn rashi_negative() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn house_of_ascendant_is_first() {
        for asc in 1..=12 {
            assert_eq!(house_of(asc, asc), 1);
        }
    }

    #[test]
    fn house_counted_forward() {
        // Kumbha lagna: Meena is the 2nd house, Makara the 12th
        assert_eq!(house_of(12, 11), 2);
        assert_eq!(house_of(10, 11), 12);
        assert_eq!(house_of(5, 11), 7);
    }

    #[test]
    fn sign_of_house_wraps() {
        assert_eq!(sign_of_house(1, 11), 11);
        assert_eq!(sign_of_house(2, 11), 12);
        assert_eq!(sign_of_house(3, 11), 1);
        assert_eq!(sign_of_house(12, 1), 12);
    }

    #[test]
    fn nth_sign_inclusive() {
        assert_eq!(nth_sign_from(1, 1), 1);
        assert_eq!(nth_sign_from(10, 4), 1);
        assert_eq!(nth_sign_from(12, 12), 11);
    }
}
