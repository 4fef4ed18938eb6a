use crate::ephemeris::EphemerisError;
use crate::geotime::GeocodeError;
use crate::input::ValidationError;
use std::fmt;
use thiserror::Error;

/// Which result record was being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Astrology,
    HumanDesign,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Astrology => f.write_str("astrology details"),
            Stage::HumanDesign => f.write_str("human design"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationCause {
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

/// Failure while computing a result record from a valid input.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Error calculating {stage}: {cause}")]
pub struct CalculationError {
    pub stage: Stage,
    #[source]
    pub cause: CalculationCause,
}

impl CalculationError {
    pub fn new(stage: Stage, cause: impl Into<CalculationCause>) -> Self {
        Self {
            stage,
            cause: cause.into(),
        }
    }
}

/// Any failure of the string-input entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_message_carries_stage_and_cause() {
        let err = CalculationError::new(
            Stage::Astrology,
            GeocodeError::NoTimezone {
                latitude: 0.0,
                longitude: 0.0,
            },
        );
        assert_eq!(
            err.to_string(),
            "Error calculating astrology details: Could not determine time zone for coordinates: 0, 0"
        );
        assert!(err.source().is_some());
    }
}
