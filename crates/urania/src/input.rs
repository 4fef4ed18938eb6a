//! Validated birth data.
//!
//! A [`BirthInput`] can only be built through a validating constructor, so the
//! rest of the engine never sees malformed dates, times or coordinates.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted date layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];
/// 24-hour clock, minute precision.
const TIME_FORMAT: &str = "%H:%M";

/// Rejected birth data. Raised before any computation is attempted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid date: {input:?}. Expected YYYY-MM-DD or DD/MM/YYYY")]
    InvalidDate { input: String },
    #[error("Invalid time: {input:?}. Expected HH:MM (24-hour)")]
    InvalidTime { input: String },
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Birth date, wall-clock time and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBirthInput")]
pub struct BirthInput {
    date: NaiveDate,
    local_time: NaiveTime,
    latitude: f64,
    longitude: f64,
}

impl BirthInput {
    pub fn new(
        date: NaiveDate,
        local_time: NaiveTime,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            date,
            local_time,
            latitude,
            longitude,
        })
    }

    /// Parse the string form used by callers (`1988-01-12`, `15:30`).
    pub fn parse(
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        let date = parse_date(date)?;
        let local_time = parse_time(time)?;
        Self::new(date, local_time, latitude, longitude)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn local_time(&self) -> NaiveTime {
        self.local_time
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Wall-clock instant with no zone attached.
    pub fn naive_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.local_time)
    }
}

/// Parse a calendar date in either accepted layout.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidDate {
            input: input.to_string(),
        })
}

/// Parse a 24-hour `HH:MM` time.
pub fn parse_time(input: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT).map_err(|_| ValidationError::InvalidTime {
        input: input.to_string(),
    })
}

#[derive(Deserialize)]
struct RawBirthInput {
    date: NaiveDate,
    local_time: NaiveTime,
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawBirthInput> for BirthInput {
    type Error = ValidationError;

    fn try_from(raw: RawBirthInput) -> Result<Self, Self::Error> {
        BirthInput::new(raw.date, raw.local_time, raw.latitude, raw.longitude)
    }
}
