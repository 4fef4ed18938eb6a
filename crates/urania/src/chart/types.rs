use crate::western::{to_dms, Element, Sign};
use serde::Serialize;

/// A longitude in decimal degrees and `D°M'S"` form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub degrees: f64,
    pub dms: String,
}

impl Position {
    pub fn new(degrees: f64) -> Self {
        Self {
            degrees,
            dms: to_dms(degrees),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusp {
    pub house: u8,
    pub degree: f64,
}

/// The house a point falls in, with its reference text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseInfo {
    pub number: u8,
    pub title: String,
    pub description: String,
    pub degree_in_house: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstrologyResult {
    pub sun_sign: Sign,
    pub sun_position: Position,
    pub rising_sign: Sign,
    pub rising_position: Position,
    pub ascendant_degree: f64,
    pub midheaven_degree: f64,
    pub ruling_planet: String,
    pub element: Element,
    pub houses: Vec<HouseCusp>,
    pub sun_house: HouseInfo,
    pub ascendant_house: HouseInfo,
    pub timezone_id: String,
    pub julian_day: f64,
}
