//! Zodiac signs and their elements.
//!
//! Each sign spans 30 degrees of ecliptic longitude starting at 0° Aries.

use crate::ephemeris::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SIGN_WIDTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// Zodiac order, Aries first.
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign at `index` (0 = Aries), wrapping every 12.
    pub fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sign::ALL
            .iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("Unknown zodiac sign: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        f.write_str(name)
    }
}

/// Sign containing an ecliptic longitude. Any real longitude is accepted.
pub fn sign_of(longitude: f64) -> Sign {
    let lon = normalize_degrees(longitude);
    Sign::from_index((lon / SIGN_WIDTH) as usize)
}

pub fn element_of(sign: Sign) -> Element {
    match sign {
        Sign::Aries | Sign::Leo | Sign::Sagittarius => Element::Fire,
        Sign::Taurus | Sign::Virgo | Sign::Capricorn => Element::Earth,
        Sign::Gemini | Sign::Libra | Sign::Aquarius => Element::Air,
        Sign::Cancer | Sign::Scorpio | Sign::Pisces => Element::Water,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(sign_of(0.0), Sign::Aries);
        assert_eq!(sign_of(29.999), Sign::Aries);
        assert_eq!(sign_of(30.0), Sign::Taurus);
        assert_eq!(sign_of(291.563), Sign::Capricorn);
        assert_eq!(sign_of(359.999), Sign::Pisces);
        assert_eq!(sign_of(360.0), Sign::Aries);
        assert_eq!(sign_of(-0.5), Sign::Pisces);
    }

    #[test]
    fn test_element_groups() {
        for sign in Sign::ALL {
            let expected = match sign.index() % 4 {
                0 => Element::Fire,
                1 => Element::Earth,
                2 => Element::Air,
                _ => Element::Water,
            };
            assert_eq!(element_of(sign), expected, "{sign}");
        }
    }

    #[test]
    fn test_sign_from_str() {
        assert_eq!("capricorn".parse::<Sign>(), Ok(Sign::Capricorn));
        assert_eq!(" Leo ".parse::<Sign>(), Ok(Sign::Leo));
        assert!("Ophiuchus".parse::<Sign>().is_err());
    }
}
