//! Ruling planet of a chart.
//!
//! The ruler table itself lives in the reference data; this module only
//! decides which sign keys it.

use crate::reference::ReferenceData;
use crate::western::signs::Sign;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const UNKNOWN_RULER: &str = "Unknown";

/// Which sign chooses the chart ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulerPolicy {
    /// Ruler of the Sun sign.
    #[default]
    SunSign,
    /// Ruler of the rising sign (traditional chart ruler).
    Ascendant,
}

impl fmt::Display for RulerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulerPolicy::SunSign => f.write_str("sun_sign"),
            RulerPolicy::Ascendant => f.write_str("ascendant"),
        }
    }
}

impl FromStr for RulerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sun_sign" | "sun" => Ok(RulerPolicy::SunSign),
            "ascendant" | "rising" => Ok(RulerPolicy::Ascendant),
            _ => Err(format!(
                "Invalid ruler policy: {s}. Valid policies: sun_sign, ascendant"
            )),
        }
    }
}

/// Ruling planet under `policy`, or `"Unknown"` when the table has no entry.
pub fn ruling_planet(
    policy: RulerPolicy,
    sun_sign: Sign,
    rising_sign: Sign,
    reference: &ReferenceData,
) -> String {
    let key = match policy {
        RulerPolicy::SunSign => sun_sign,
        RulerPolicy::Ascendant => rising_sign,
    };
    reference
        .ruler(key)
        .unwrap_or(UNKNOWN_RULER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_sign_policy() {
        let reference = ReferenceData::embedded().unwrap();
        assert_eq!(
            ruling_planet(RulerPolicy::SunSign, Sign::Capricorn, Sign::Cancer, &reference),
            "Saturn"
        );
        assert_eq!(
            ruling_planet(RulerPolicy::SunSign, Sign::Scorpio, Sign::Cancer, &reference),
            "Mars/Pluto"
        );
    }

    #[test]
    fn test_ascendant_policy() {
        let reference = ReferenceData::embedded().unwrap();
        assert_eq!(
            ruling_planet(RulerPolicy::Ascendant, Sign::Capricorn, Sign::Cancer, &reference),
            "Moon"
        );
    }

    #[test]
    fn test_unmapped_sign_is_unknown() {
        let reference = ReferenceData::from_toml_str(
            r#"
            [rulers]
            Aries = "Mars"
            "#,
        )
        .unwrap();
        assert_eq!(
            ruling_planet(RulerPolicy::SunSign, Sign::Leo, Sign::Aries, &reference),
            UNKNOWN_RULER
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("sun-sign".parse::<RulerPolicy>(), Ok(RulerPolicy::SunSign));
        assert_eq!("Ascendant".parse::<RulerPolicy>(), Ok(RulerPolicy::Ascendant));
        assert!("moon".parse::<RulerPolicy>().is_err());
    }
}
