use crate::human_design::types::{HdType, TypeProfile};
use crate::western::signs::Sign;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_TABLES: &str = include_str!("../../data/reference.toml");

pub const UNKNOWN_HOUSE_TITLE: &str = "Unknown House";
pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed reference data: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Gate {gate} in table '{table}' is outside 1-64")]
    InvalidGate { table: String, gate: u8 },
    #[error("House key '{key}' is not a number in 1-12")]
    InvalidHouse { key: String },
    #[error("Unknown zodiac sign '{name}' in rulers table")]
    UnknownSign { name: String },
    #[error("Unknown Human Design type '{name}' in types table")]
    UnknownType { name: String },
    #[error("Duplicate incarnation cross for gates ({sun_gate}, {earth_gate})")]
    DuplicateCross { sun_gate: u8, earth_gate: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseText {
    pub title: String,
    pub description: String,
}

/// Gates belonging to each energy center.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterGates {
    pub sacral: BTreeSet<u8>,
    pub motor: BTreeSet<u8>,
    pub emotional: BTreeSet<u8>,
    pub splenic: BTreeSet<u8>,
    pub ego: BTreeSet<u8>,
    pub g_center: BTreeSet<u8>,
    pub ajna: BTreeSet<u8>,
    pub head: BTreeSet<u8>,
}

impl CenterGates {
    fn tables(&self) -> [(&'static str, &BTreeSet<u8>); 8] {
        [
            ("centers.sacral", &self.sacral),
            ("centers.motor", &self.motor),
            ("centers.emotional", &self.emotional),
            ("centers.splenic", &self.splenic),
            ("centers.ego", &self.ego),
            ("centers.g_center", &self.g_center),
            ("centers.ajna", &self.ajna),
            ("centers.head", &self.head),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionGates {
    /// All of these active means a single definition.
    pub single: BTreeSet<u8>,
    /// Any of these active means a split definition.
    pub split: BTreeSet<u8>,
}

#[derive(Debug, Clone, Deserialize)]
struct CrossEntry {
    sun_gate: u8,
    earth_gate: u8,
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTables {
    rulers: BTreeMap<String, String>,
    houses: BTreeMap<String, HouseText>,
    centers: CenterGates,
    types: BTreeMap<String, TypeProfile>,
    definition: DefinitionGates,
    crosses: Vec<CrossEntry>,
}

/// Static lookup tables shared read-only by every calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    rulers: BTreeMap<Sign, String>,
    houses: BTreeMap<u8, HouseText>,
    centers: CenterGates,
    types: BTreeMap<HdType, TypeProfile>,
    definition: DefinitionGates,
    crosses: BTreeMap<(u8, u8), String>,
}

impl ReferenceData {
    /// Tables compiled into the crate.
    pub fn embedded() -> Result<Self, ReferenceDataError> {
        Self::from_toml_str(EMBEDDED_TABLES)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_toml_str(&content)?;
        log::info!("Loaded reference data from {}", path.display());
        Ok(data)
    }

    /// Parse and validate a TOML document. Missing tables are empty.
    pub fn from_toml_str(content: &str) -> Result<Self, ReferenceDataError> {
        let raw: RawTables = toml::from_str(content)?;

        let mut rulers = BTreeMap::new();
        for (name, planet) in raw.rulers {
            let sign = name
                .parse::<Sign>()
                .map_err(|_| ReferenceDataError::UnknownSign { name: name.clone() })?;
            rulers.insert(sign, planet);
        }

        let mut houses = BTreeMap::new();
        for (key, text) in raw.houses {
            let number = key
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=12).contains(n))
                .ok_or_else(|| ReferenceDataError::InvalidHouse { key: key.clone() })?;
            houses.insert(number, text);
        }

        for (table, gates) in raw.centers.tables() {
            check_gates(table, gates.iter().copied())?;
        }
        check_gates("definition.single", raw.definition.single.iter().copied())?;
        check_gates("definition.split", raw.definition.split.iter().copied())?;

        let mut types = BTreeMap::new();
        for (name, profile) in raw.types {
            let hd_type = name
                .parse::<HdType>()
                .map_err(|_| ReferenceDataError::UnknownType { name: name.clone() })?;
            types.insert(hd_type, profile);
        }

        let mut crosses = BTreeMap::new();
        for entry in raw.crosses {
            check_gates("crosses", [entry.sun_gate, entry.earth_gate])?;
            let key = (entry.sun_gate, entry.earth_gate);
            if crosses.insert(key, entry.name).is_some() {
                return Err(ReferenceDataError::DuplicateCross {
                    sun_gate: key.0,
                    earth_gate: key.1,
                });
            }
        }

        log::debug!(
            "Reference tables: {} rulers, {} houses, {} types, {} crosses",
            rulers.len(),
            houses.len(),
            types.len(),
            crosses.len()
        );

        Ok(Self {
            rulers,
            houses,
            centers: raw.centers,
            types,
            definition: raw.definition,
            crosses,
        })
    }

    pub fn ruler(&self, sign: Sign) -> Option<&str> {
        self.rulers.get(&sign).map(String::as_str)
    }

    pub fn house(&self, number: u8) -> Option<&HouseText> {
        self.houses.get(&number)
    }

    /// Title and description of a house, with placeholders when missing.
    pub fn house_text(&self, number: u8) -> (String, String) {
        match self.houses.get(&number) {
            Some(text) => (text.title.clone(), text.description.clone()),
            None => (UNKNOWN_HOUSE_TITLE.to_string(), NO_DESCRIPTION.to_string()),
        }
    }

    pub fn centers(&self) -> &CenterGates {
        &self.centers
    }

    pub fn type_profile(&self, hd_type: HdType) -> Option<&TypeProfile> {
        self.types.get(&hd_type)
    }

    pub fn definition(&self) -> &DefinitionGates {
        &self.definition
    }

    pub fn cross(&self, sun_gate: u8, earth_gate: u8) -> Option<&str> {
        self.crosses.get(&(sun_gate, earth_gate)).map(String::as_str)
    }
}

fn check_gates(table: &str, gates: impl IntoIterator<Item = u8>) -> Result<(), ReferenceDataError> {
    for gate in gates {
        if !(1..=64).contains(&gate) {
            return Err(ReferenceDataError::InvalidGate {
                table: table.to_string(),
                gate,
            });
        }
    }
    Ok(())
}
