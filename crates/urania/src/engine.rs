use crate::chart::{AstrologyAggregator, AstrologyResult};
use crate::ephemeris::{Ephemeris, EphemerisSource, HouseSystem, SwissEphemerisAdapter};
use crate::error::{CalculationError, ChartError};
use crate::geotime::{GeoTimeResolver, TimezoneLookup, TzfLookup};
use crate::human_design::{HumanDesignEngine, HumanDesignResult};
use crate::input::BirthInput;
use crate::reference::ReferenceData;
use crate::western::RulerPolicy;
use serde::{Deserialize, Serialize};

/// Tunable calculation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub house_system: HouseSystem,
    pub ruler_policy: RulerPolicy,
    pub ephemeris: EphemerisSource,
}

/// Entry point for chart calculations.
///
/// Owns the time zone resolver, the ephemeris and the reference tables. All
/// calls take `&self`, so one engine can serve many threads when its
/// components are `Sync`.
pub struct Engine<E = SwissEphemerisAdapter, L = TzfLookup> {
    settings: EngineSettings,
    resolver: GeoTimeResolver<L>,
    ephemeris: E,
    reference: ReferenceData,
}

impl Engine {
    /// Swiss Ephemeris positions and `tzf-rs` time zone boundaries.
    pub fn new(settings: EngineSettings, reference: ReferenceData) -> Self {
        Self::with_components(
            settings,
            reference,
            SwissEphemerisAdapter::new(settings.ephemeris),
            TzfLookup::new(),
        )
    }
}

impl<E: Ephemeris, L: TimezoneLookup> Engine<E, L> {
    pub fn with_components(
        settings: EngineSettings,
        reference: ReferenceData,
        ephemeris: E,
        lookup: L,
    ) -> Self {
        log::debug!(
            "Engine settings: houses={}, ruler={}, ephemeris={:?}",
            settings.house_system,
            settings.ruler_policy,
            settings.ephemeris
        );
        Self {
            settings,
            resolver: GeoTimeResolver::new(lookup),
            ephemeris,
            reference,
        }
    }

    pub fn astrology(&self, input: &BirthInput) -> Result<AstrologyResult, CalculationError> {
        AstrologyAggregator::new(&self.resolver, &self.ephemeris, &self.reference)
            .with_house_system(self.settings.house_system)
            .with_ruler_policy(self.settings.ruler_policy)
            .compute(input)
    }

    pub fn human_design(&self, input: &BirthInput) -> Result<HumanDesignResult, CalculationError> {
        HumanDesignEngine::new(&self.resolver, &self.ephemeris, &self.reference).compute(input)
    }

    /// Validate string inputs, then compute the natal chart.
    pub fn astrology_from_raw(
        &self,
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<AstrologyResult, ChartError> {
        let input = BirthInput::parse(date, time, latitude, longitude)?;
        Ok(self.astrology(&input)?)
    }

    /// Validate string inputs, then compute the Human Design record.
    pub fn human_design_from_raw(
        &self,
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<HumanDesignResult, ChartError> {
        let input = BirthInput::parse(date, time, latitude, longitude)?;
        Ok(self.human_design(&input)?)
    }
}
