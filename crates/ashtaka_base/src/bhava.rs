//! House (bhava) classifications, quality scores, and significations.
//!
//! Houses are 1-based and ascendant-relative. A house can sit in several
//! classes at once (1 is kendra and trikona, 6 is upachaya and dusthana,
//! 10 is kendra and upachaya); [`house_quality_score`] resolves overlaps in
//! a fixed priority order.

use serde::Serialize;

/// Angular houses.
pub const KENDRA: [u8; 4] = [1, 4, 7, 10];
/// Trine houses.
pub const TRIKONA: [u8; 3] = [1, 5, 9];
/// Growth houses.
pub const UPACHAYA: [u8; 4] = [3, 6, 10, 11];
/// Difficult houses.
pub const DUSTHANA: [u8; 3] = [6, 8, 12];

pub fn is_kendra(house: u8) -> bool {
    KENDRA.contains(&house)
}

pub fn is_trikona(house: u8) -> bool {
    TRIKONA.contains(&house)
}

pub fn is_upachaya(house: u8) -> bool {
    UPACHAYA.contains(&house)
}

pub fn is_dusthana(house: u8) -> bool {
    DUSTHANA.contains(&house)
}

/// Base favorability of a house, 0-100.
///
/// Priority: kendra+trikona (100), trikona (90), kendra (80),
/// upachaya (70), dusthana (30), otherwise 50.
pub fn house_quality_score(house: u8) -> f64 {
    match (is_kendra(house), is_trikona(house)) {
        (true, true) => 100.0,
        (false, true) => 90.0,
        (true, false) => 80.0,
        (false, false) if is_upachaya(house) => 70.0,
        (false, false) if is_dusthana(house) => 30.0,
        (false, false) => 50.0,
    }
}

/// Life area governed by a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseSignification {
    pub house: u8,
    pub area: &'static str,
    pub themes: &'static [&'static str],
}

const SIGNIFICATIONS: [HouseSignification; 12] = [
    HouseSignification {
        house: 1,
        area: "Self & Personality",
        themes: &["health", "appearance", "vitality", "overall well-being"],
    },
    HouseSignification {
        house: 2,
        area: "Wealth & Family",
        themes: &["finances", "family", "speech", "food", "assets"],
    },
    HouseSignification {
        house: 3,
        area: "Courage & Siblings",
        themes: &["communication", "short travels", "siblings", "skills", "courage"],
    },
    HouseSignification {
        house: 4,
        area: "Home & Mother",
        themes: &["property", "vehicles", "mother", "happiness", "education"],
    },
    HouseSignification {
        house: 5,
        area: "Intelligence & Children",
        themes: &["creativity", "children", "romance", "speculation", "intellect"],
    },
    HouseSignification {
        house: 6,
        area: "Health & Enemies",
        themes: &["disease", "debts", "enemies", "competition", "service"],
    },
    HouseSignification {
        house: 7,
        area: "Partnership & Marriage",
        themes: &["spouse", "business partnerships", "public relations"],
    },
    HouseSignification {
        house: 8,
        area: "Transformation & Longevity",
        themes: &["sudden events", "inheritance", "occult", "research", "longevity"],
    },
    HouseSignification {
        house: 9,
        area: "Fortune & Higher Learning",
        themes: &["luck", "father", "dharma", "long travels", "spirituality"],
    },
    HouseSignification {
        house: 10,
        area: "Career & Status",
        themes: &["profession", "reputation", "authority", "government", "karma"],
    },
    HouseSignification {
        house: 11,
        area: "Gains & Networks",
        themes: &["income", "friends", "aspirations", "elder siblings", "profits"],
    },
    HouseSignification {
        house: 12,
        area: "Loss & Liberation",
        themes: &["expenses", "foreign lands", "isolation", "spirituality", "losses"],
    },
];

/// Signification for a house. None outside 1..=12.
pub fn house_signification(house: u8) -> Option<&'static HouseSignification> {
    house
        .checked_sub(1)
        .and_then(|i| SIGNIFICATIONS.get(i as usize))
}
