//! House membership for a longitude against a table of twelve cusps.

use crate::ephemeris::normalize_degrees;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HousePlacement {
    /// House number, 1-12.
    pub house: u8,
    /// Degrees past the cusp of `house`.
    pub degree_in_house: f64,
}

/// Locate `longitude` among the cusps (index 0 is house 1).
///
/// Each house is half-open at its lower cusp. The 12th/1st boundary is
/// handled separately: a longitude at or past cusp 12 is in house 12, and
/// anything left over (normally a longitude before cusp 1) falls in house 1
/// with its offset measured across 0°.
pub fn house_of(longitude: f64, cusps: &[f64; 12]) -> HousePlacement {
    let lon = normalize_degrees(longitude);

    for i in 0..11 {
        let start = cusps[i];
        let end = cusps[i + 1];
        if start <= lon && lon < end {
            return HousePlacement {
                house: (i + 1) as u8,
                degree_in_house: lon - start,
            };
        }
    }

    let last = cusps[11];
    if lon >= last {
        HousePlacement {
            house: 12,
            degree_in_house: lon - last,
        }
    } else {
        HousePlacement {
            house: 1,
            degree_in_house: lon + (360.0 - last),
        }
    }
}
