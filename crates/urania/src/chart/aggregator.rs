use crate::chart::types::{AstrologyResult, HouseCusp, HouseInfo, Position};
use crate::ephemeris::{BodyPositions, Ephemeris, HouseCusps, HouseSystem};
use crate::error::{CalculationError, Stage};
use crate::geotime::{local_sidereal_time, GeoTimeResolver, ResolvedInstant, TimezoneLookup};
use crate::input::BirthInput;
use crate::reference::ReferenceData;
use crate::western::{element_of, house_of, ruling_planet, sign_of, RulerPolicy};

/// Builds an [`AstrologyResult`] from a validated birth input.
pub struct AstrologyAggregator<'a, E, L> {
    resolver: &'a GeoTimeResolver<L>,
    ephemeris: &'a E,
    reference: &'a ReferenceData,
    house_system: HouseSystem,
    ruler_policy: RulerPolicy,
}

impl<'a, E: Ephemeris, L: TimezoneLookup> AstrologyAggregator<'a, E, L> {
    pub fn new(
        resolver: &'a GeoTimeResolver<L>,
        ephemeris: &'a E,
        reference: &'a ReferenceData,
    ) -> Self {
        Self {
            resolver,
            ephemeris,
            reference,
            house_system: HouseSystem::default(),
            ruler_policy: RulerPolicy::default(),
        }
    }

    pub fn with_house_system(mut self, house_system: HouseSystem) -> Self {
        self.house_system = house_system;
        self
    }

    pub fn with_ruler_policy(mut self, ruler_policy: RulerPolicy) -> Self {
        self.ruler_policy = ruler_policy;
        self
    }

    pub fn compute(&self, input: &BirthInput) -> Result<AstrologyResult, CalculationError> {
        let instant = self
            .resolver
            .resolve(
                input.latitude(),
                input.longitude(),
                input.date(),
                input.local_time(),
            )
            .map_err(|e| CalculationError::new(Stage::Astrology, e))?;

        let jd = instant.julian_day;
        log::debug!(
            "Local sidereal time at JD {}: {:.4} h",
            jd,
            local_sidereal_time(jd, input.longitude())
        );

        let positions = self
            .ephemeris
            .positions(jd)
            .map_err(|e| CalculationError::new(Stage::Astrology, e))?;
        let cusps = self
            .ephemeris
            .cusps(jd, input.latitude(), input.longitude(), self.house_system)
            .map_err(|e| CalculationError::new(Stage::Astrology, e))?;

        Ok(assemble(
            &instant,
            &positions,
            &cusps,
            self.ruler_policy,
            self.reference,
        ))
    }
}

/// Classify already computed positions and cusps.
pub fn assemble(
    instant: &ResolvedInstant,
    positions: &BodyPositions,
    cusps: &HouseCusps,
    ruler_policy: RulerPolicy,
    reference: &ReferenceData,
) -> AstrologyResult {
    let sun = positions.sun();
    let ascendant = cusps.ascendant;

    let sun_sign = sign_of(sun);
    let rising_sign = sign_of(ascendant);

    let house_info = |longitude: f64| {
        let placement = house_of(longitude, &cusps.cusps);
        let (title, description) = reference.house_text(placement.house);
        HouseInfo {
            number: placement.house,
            title,
            description,
            degree_in_house: placement.degree_in_house,
        }
    };

    AstrologyResult {
        sun_sign,
        sun_position: Position::new(sun),
        rising_sign,
        rising_position: Position::new(ascendant),
        ascendant_degree: ascendant,
        midheaven_degree: cusps.midheaven,
        ruling_planet: ruling_planet(ruler_policy, sun_sign, rising_sign, reference),
        element: element_of(sun_sign),
        houses: cusps
            .cusps
            .iter()
            .enumerate()
            .map(|(i, degree)| HouseCusp {
                house: (i + 1) as u8,
                degree: *degree,
            })
            .collect(),
        sun_house: house_info(sun),
        ascendant_house: house_info(ascendant),
        timezone_id: instant.timezone_id.clone(),
        julian_day: instant.julian_day,
    }
}
