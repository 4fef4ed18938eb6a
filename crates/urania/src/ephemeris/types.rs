use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Bodies tracked by the engine. Earth is never measured: it is the
/// antipode of the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Earth,
}

impl Body {
    /// Bodies queried from the ephemeris, in Swiss Ephemeris id order.
    pub const MEASURED: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// All bodies including Earth.
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Earth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "SUN",
            Body::Moon => "MOON",
            Body::Mercury => "MERCURY",
            Body::Venus => "VENUS",
            Body::Mars => "MARS",
            Body::Jupiter => "JUPITER",
            Body::Saturn => "SATURN",
            Body::Uranus => "URANUS",
            Body::Neptune => "NEPTUNE",
            Body::Pluto => "PLUTO",
            Body::Earth => "EARTH",
        }
    }

    fn measured_index(&self) -> Option<usize> {
        Body::MEASURED.iter().position(|b| b == self)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ecliptic longitudes for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPositions {
    longitudes: [f64; 10],
}

impl BodyPositions {
    /// Build from the 10 measured longitudes in [`Body::MEASURED`] order.
    pub fn new(longitudes: [f64; 10]) -> Self {
        Self {
            longitudes: longitudes.map(normalize_degrees),
        }
    }

    /// Longitude of `body` in [0, 360).
    pub fn get(&self, body: Body) -> f64 {
        match body.measured_index() {
            Some(index) => self.longitudes[index],
            None => normalize_degrees(self.longitudes[0] + 180.0),
        }
    }

    pub fn sun(&self) -> f64 {
        self.get(Body::Sun)
    }

    pub fn earth(&self) -> f64 {
        self.get(Body::Earth)
    }

    /// All 11 positions, Earth last.
    pub fn iter(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        Body::ALL.iter().map(move |body| (*body, self.get(*body)))
    }
}

impl Serialize for BodyPositions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Body::ALL.len()))?;
        for (body, lon) in self.iter() {
            map.serialize_entry(body.name(), &lon)?;
        }
        map.end()
    }
}

/// Supported house systems and their Swiss Ephemeris codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    /// Equal houses from the ascendant.
    Equal,
    Koch,
    WholeSign,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
    Porphyry,
}

const HOUSE_SYSTEMS: &[(&str, HouseSystem, u8)] = &[
    ("placidus", HouseSystem::Placidus, b'P'),
    ("equal", HouseSystem::Equal, b'A'),
    ("koch", HouseSystem::Koch, b'K'),
    ("whole_sign", HouseSystem::WholeSign, b'W'),
    ("regiomontanus", HouseSystem::Regiomontanus, b'R'),
    ("campanus", HouseSystem::Campanus, b'C'),
    ("alcabitius", HouseSystem::Alcabitius, b'B'),
    ("morinus", HouseSystem::Morinus, b'M'),
    ("porphyry", HouseSystem::Porphyry, b'O'),
];

impl HouseSystem {
    /// One-letter Swiss Ephemeris code.
    pub fn code(&self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'P')
    }

    pub fn name(&self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| system == self)
            .map(|(name, _, _)| *name)
            .unwrap_or("placidus")
    }

    /// Systems that Swiss Ephemeris silently replaces with Porphyry inside
    /// the polar circles.
    pub fn undefined_near_poles(&self) -> bool {
        matches!(self, HouseSystem::Placidus | HouseSystem::Koch)
    }

    pub fn valid_names() -> Vec<String> {
        HOUSE_SYSTEMS.iter().map(|(name, _, _)| name.to_string()).collect()
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = String;

    /// Accepts a name (`placidus`, `whole-sign`) or a one-letter code (`P`, `A`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        if wanted.len() == 1 {
            let code = wanted.as_bytes()[0].to_ascii_uppercase();
            // 'E' is the Swiss alias for equal houses
            let code = if code == b'E' { b'A' } else { code };
            if let Some((_, system, _)) = HOUSE_SYSTEMS.iter().find(|(_, _, c)| *c == code) {
                return Ok(*system);
            }
        }
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _, _)| *name == wanted)
            .map(|(_, system, _)| *system)
            .ok_or_else(|| format!("Invalid house system: {s}. Valid systems: {:?}", Self::valid_names()))
    }
}

/// House cusps and angles for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusps {
    /// System the cusps were computed with. Placidus and Koch requests come
    /// back as Porphyry where those systems are undefined.
    pub system: HouseSystem,
    /// Cusp longitudes, index 0 is house 1.
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

/// Which Swiss Ephemeris backend computes positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EphemerisSource {
    /// Built-in analytical ephemeris, no data files required.
    #[default]
    Moshier,
    /// Swiss Ephemeris `.se1` data files from the library's search path.
    SwissFiles,
}

impl EphemerisSource {
    pub(crate) fn flag(&self) -> i32 {
        match self {
            // SEFLG_MOSEPH
            EphemerisSource::Moshier => 4,
            // SEFLG_SWIEPH
            EphemerisSource::SwissFiles => 2,
        }
    }
}
