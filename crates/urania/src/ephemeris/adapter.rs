use crate::ephemeris::types::{
    normalize_degrees, Body, BodyPositions, EphemerisSource, HouseCusps, HouseSystem,
};
use std::sync::{Mutex, MutexGuard};
use swisseph::swe::{calc_ut, houses_ex};
use swisseph::{AscMc, Cusp};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Julian day {julian_day} is outside the supported range [{min}, {max}]")]
    OutOfRange { julian_day: f64, min: f64, max: f64 },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: Body,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Earliest supported Julian day (3000 BCE, Moshier range).
pub const MIN_JULIAN_DAY: f64 = 625_000.5;
/// Latest supported Julian day (3000 CE, Moshier range).
pub const MAX_JULIAN_DAY: f64 = 2_818_000.5;

// Below the smallest polar circle latitude reachable in the supported range
const POLAR_CHECK_LATITUDE: f64 = 65.0;

// Swiss Ephemeris planet ids
const PLANET_IDS: &[(Body, i32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Uranus, 7),
    (Body::Neptune, 8),
    (Body::Pluto, 9),
];

// The C library keeps file handles and position caches in globals.
static SWE_LOCK: Mutex<()> = Mutex::new(());

/// Serializes every call into the Swiss Ephemeris library.
pub(crate) fn swe_lock() -> MutexGuard<'static, ()> {
    SWE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Source of body longitudes and house cusps.
pub trait Ephemeris {
    /// Geocentric ecliptic longitude of a measured body, in [0, 360).
    fn longitude(&self, body: Body, julian_day: f64) -> Result<f64, EphemerisError>;

    /// House cusps, ascendant and midheaven, all in [0, 360).
    fn cusps(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError>;

    /// Longitudes of the ten measured bodies. Earth is derived from the Sun.
    fn positions(&self, julian_day: f64) -> Result<BodyPositions, EphemerisError> {
        let mut longitudes = [0.0; 10];
        for (slot, body) in longitudes.iter_mut().zip(Body::MEASURED) {
            *slot = self.longitude(body, julian_day)?;
        }
        Ok(BodyPositions::new(longitudes))
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn longitude(&self, body: Body, julian_day: f64) -> Result<f64, EphemerisError> {
        (**self).longitude(body, julian_day)
    }

    fn cusps(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        (**self).cusps(julian_day, latitude, longitude, system)
    }
}

/// Swiss Ephemeris adapter implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SwissEphemerisAdapter {
    source: EphemerisSource,
}

impl SwissEphemerisAdapter {
    pub fn new(source: EphemerisSource) -> Self {
        Self { source }
    }

    fn raw_houses(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> ([f64; 12], AscMc) {
        let (c, a) = {
            let _guard = swe_lock();
            houses_ex(julian_day, self.source.flag(), latitude, longitude, system.code() as i32)
        };
        let cusps = Cusp::from_array(c);
        let raw = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        (raw, AscMc::from_array(a))
    }

    fn check_range(julian_day: f64) -> Result<(), EphemerisError> {
        if julian_day.is_finite() && (MIN_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&julian_day) {
            Ok(())
        } else {
            Err(EphemerisError::OutOfRange {
                julian_day,
                min: MIN_JULIAN_DAY,
                max: MAX_JULIAN_DAY,
            })
        }
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn longitude(&self, body: Body, julian_day: f64) -> Result<f64, EphemerisError> {
        Self::check_range(julian_day)?;
        let planet_code = PLANET_IDS
            .iter()
            .find(|(id, _)| *id == body)
            .map(|(_, code)| *code)
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("{body} is not measured by the ephemeris"),
            })?;

        let result = {
            let _guard = swe_lock();
            calc_ut(julian_day, planet_code as u32, self.source.flag() as u32)
        }
        .map_err(|e| EphemerisError::CalculationFailed {
            body,
            julian_day,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: "non-finite longitude".to_string(),
            });
        }
        Ok(normalize_degrees(longitude))
    }

    fn cusps(
        &self,
        julian_day: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        Self::check_range(julian_day)?;

        let (raw, ascmc) = self.raw_houses(julian_day, latitude, longitude, system);
        if raw.iter().chain([&ascmc.ascendant, &ascmc.mc]).any(|v| !v.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} houses undefined at latitude {latitude}",
                    system.name()
                ),
            });
        }

        log::debug!("Ascendant degree (raw): {}", ascmc.ascendant);

        // houses_ex does not report the fallback, so compare with Porphyry
        let mut system = system;
        if system.undefined_near_poles() && latitude.abs() >= POLAR_CHECK_LATITUDE {
            let (porphyry, _) =
                self.raw_houses(julian_day, latitude, longitude, HouseSystem::Porphyry);
            if raw.iter().zip(porphyry.iter()).all(|(a, b)| (a - b).abs() < 1e-9) {
                log::warn!(
                    "{} houses undefined at latitude {latitude}, using porphyry",
                    system.name()
                );
                system = HouseSystem::Porphyry;
            }
        }

        Ok(HouseCusps {
            system,
            cusps: raw.map(normalize_degrees),
            ascendant: normalize_degrees(ascmc.ascendant),
            midheaven: normalize_degrees(ascmc.mc),
        })
    }
}
