use crate::ephemeris::Ephemeris;
use crate::error::{CalculationError, Stage};
use crate::geotime::{GeoTimeResolver, TimezoneLookup};
use crate::human_design::rules::evaluate;
use crate::human_design::types::HumanDesignResult;
use crate::input::BirthInput;
use crate::reference::ReferenceData;

/// Computes a [`HumanDesignResult`] for a validated birth input.
pub struct HumanDesignEngine<'a, E, L> {
    resolver: &'a GeoTimeResolver<L>,
    ephemeris: &'a E,
    reference: &'a ReferenceData,
}

impl<'a, E: Ephemeris, L: TimezoneLookup> HumanDesignEngine<'a, E, L> {
    pub fn new(
        resolver: &'a GeoTimeResolver<L>,
        ephemeris: &'a E,
        reference: &'a ReferenceData,
    ) -> Self {
        Self {
            resolver,
            ephemeris,
            reference,
        }
    }

    pub fn compute(&self, input: &BirthInput) -> Result<HumanDesignResult, CalculationError> {
        let instant = self
            .resolver
            .resolve(
                input.latitude(),
                input.longitude(),
                input.date(),
                input.local_time(),
            )
            .map_err(|e| CalculationError::new(Stage::HumanDesign, e))?;
        let positions = self
            .ephemeris
            .positions(instant.julian_day)
            .map_err(|e| CalculationError::new(Stage::HumanDesign, e))?;

        let result = evaluate(&positions, self.reference);
        log::debug!(
            "Human Design at JD {}: {} / {} / {}",
            instant.julian_day,
            result.hd_type,
            result.authority,
            result.profile
        );
        Ok(result)
    }
}
