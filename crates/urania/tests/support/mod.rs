#![allow(dead_code)]

use urania::ephemeris::{Body, Ephemeris, EphemerisError, HouseCusps, HouseSystem};
use urania::geotime::TimezoneLookup;
use urania::human_design::{GATE_WIDTH, LINE_WIDTH};

/// Longitude inside `gate` on `line`, clear of both boundaries.
pub fn lon_for(gate: u8, line: u8) -> f64 {
    (gate - 1) as f64 * GATE_WIDTH + (line - 1) as f64 * LINE_WIDTH + 0.4
}

/// Fixed longitudes and equal houses from a fixed ascendant.
pub struct StubEphemeris {
    pub longitudes: [f64; 10],
    pub ascendant: f64,
}

impl StubEphemeris {
    pub fn new(sun: f64, others: f64, ascendant: f64) -> Self {
        let mut longitudes = [others; 10];
        longitudes[0] = sun;
        Self {
            longitudes,
            ascendant,
        }
    }
}

impl Ephemeris for StubEphemeris {
    fn longitude(&self, body: Body, julian_day: f64) -> Result<f64, EphemerisError> {
        Body::MEASURED
            .iter()
            .position(|b| *b == body)
            .map(|i| self.longitudes[i])
            .ok_or(EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: "not measured".to_string(),
            })
    }

    fn cusps(
        &self,
        _julian_day: f64,
        _latitude: f64,
        _longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        Ok(HouseCusps {
            system,
            cusps: std::array::from_fn(|i| (self.ascendant + 30.0 * i as f64) % 360.0),
            ascendant: self.ascendant,
            midheaven: (self.ascendant + 270.0) % 360.0,
        })
    }
}

/// Fails the test if anything asks it for a position.
pub struct PanickingEphemeris;

impl Ephemeris for PanickingEphemeris {
    fn longitude(&self, body: Body, _julian_day: f64) -> Result<f64, EphemerisError> {
        panic!("ephemeris queried for {body}");
    }

    fn cusps(
        &self,
        _julian_day: f64,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        panic!("ephemeris queried for cusps");
    }
}

/// Always reports the same zone, or none.
pub struct FixedZone(pub Option<&'static str>);

impl TimezoneLookup for FixedZone {
    fn timezone_at(&self, _latitude: f64, _longitude: f64) -> Option<String> {
        self.0.map(str::to_string)
    }
}

pub const BUCHAREST: FixedZone = FixedZone(Some("Europe/Bucharest"));
