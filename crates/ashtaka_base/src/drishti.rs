//! Whole-house graha aspects (drishti).
//!
//! Every graha aspects the 7th house from itself. Mars adds the 4th and 8th,
//! Jupiter the 5th and 9th, Saturn the 3rd and 10th. Counting is inclusive:
//! the occupied house is the 1st.

use crate::graha::Graha;
use crate::rashi::wrap_12;

/// The house `n` places from `house`, counted inclusively.
pub fn nth_house_from(house: u8, n: u8) -> u8 {
    wrap_12(i32::from(house) + i32::from(n) - 1)
}

/// Aspect distances (inclusive counts) beyond the universal 7th.
pub const fn special_aspect_offsets(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 8],
        Graha::Guru => &[5, 9],
        Graha::Shani => &[3, 10],
        _ => &[],
    }
}

/// Houses aspected by `graha` placed in `house`, in offset order
/// (7th first, then the special aspects).
pub fn aspected_houses(graha: Graha, house: u8) -> Vec<u8> {
    std::iter::once(7)
        .chain(special_aspect_offsets(graha).iter().copied())
        .map(|n| nth_house_from(house, n))
        .collect()
}
