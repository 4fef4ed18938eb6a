//! Natal chart and Human Design calculations.
//!
//! Birth data flows through [`geotime`] (time zone and Julian day),
//! [`ephemeris`] (body longitudes and house cusps) and then into the
//! [`chart`] and [`human_design`] rules, which read their tables from
//! [`reference`]. [`Engine`] wires these together.

pub mod chart;
pub mod engine;
pub mod ephemeris;
pub mod error;
pub mod geotime;
pub mod human_design;
pub mod input;
pub mod reference;
pub mod western;

pub use chart::AstrologyResult;
pub use engine::{Engine, EngineSettings};
pub use ephemeris::{Body, BodyPositions, Ephemeris, EphemerisError, EphemerisSource, HouseSystem};
pub use error::{CalculationCause, CalculationError, ChartError, Stage};
pub use geotime::{GeoTimeResolver, GeocodeError, ResolvedInstant, TimezoneLookup};
pub use human_design::HumanDesignResult;
pub use input::{BirthInput, ValidationError};
pub use reference::{ReferenceData, ReferenceDataError};
pub use western::{RulerPolicy, Sign};
