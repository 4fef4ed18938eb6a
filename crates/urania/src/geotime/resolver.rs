use crate::geotime::julian::julian_day_from_utc;
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime,
    Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Last year with explicit transitions in the bundled zone tables. Later
/// years fall back to standard time there, so their rules are read from an
/// earlier year with the same calendar.
pub const TRANSITION_HORIZON_YEAR: i32 = 2099;

/// Errors raised while mapping a coordinate and wall-clock time to UTC
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("Could not determine time zone for coordinates: {latitude}, {longitude}")]
    NoTimezone { latitude: f64, longitude: f64 },
    #[error("Unknown time zone identifier: {name}")]
    UnknownTimezone { name: String },
    #[error("Local time {local} does not exist in {timezone}")]
    UnresolvableLocalTime { local: NaiveDateTime, timezone: String },
}

/// Coordinate to IANA time zone lookup.
pub trait TimezoneLookup {
    /// IANA identifier covering the coordinate, or `None` when the lookup
    /// has no zone for it.
    fn timezone_at(&self, latitude: f64, longitude: f64) -> Option<String>;
}

/// Polygon lookup backed by the `tzf-rs` boundary data.
pub struct TzfLookup {
    finder: tzf_rs::DefaultFinder,
}

impl TzfLookup {
    pub fn new() -> Self {
        Self {
            finder: tzf_rs::DefaultFinder::new(),
        }
    }
}

impl Default for TzfLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLookup for TzfLookup {
    fn timezone_at(&self, latitude: f64, longitude: f64) -> Option<String> {
        // tzf takes (lng, lat)
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

impl<L: TimezoneLookup + ?Sized> TimezoneLookup for &L {
    fn timezone_at(&self, latitude: f64, longitude: f64) -> Option<String> {
        (**self).timezone_at(latitude, longitude)
    }
}

/// Absolute birth instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInstant {
    pub julian_day: f64,
    /// True when the zone's UTC offset at the instant was non-zero.
    pub utc_offset_applied: bool,
    pub timezone_id: String,
    pub utc: DateTime<Utc>,
}

/// Resolves birth coordinates and wall-clock time into a UTC instant.
pub struct GeoTimeResolver<L> {
    lookup: L,
}

impl GeoTimeResolver<TzfLookup> {
    /// Resolver over the bundled time zone boundaries.
    pub fn with_tzf() -> Self {
        Self::new(TzfLookup::new())
    }
}

impl<L: TimezoneLookup> GeoTimeResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Time zone covering the coordinate.
    pub fn timezone_for(&self, latitude: f64, longitude: f64) -> Result<Tz, GeocodeError> {
        let name = self
            .lookup
            .timezone_at(latitude, longitude)
            .ok_or(GeocodeError::NoTimezone {
                latitude,
                longitude,
            })?;
        name.parse::<Tz>()
            .map_err(|_| GeocodeError::UnknownTimezone { name })
    }

    /// Attach `tz` to a wall-clock time and convert to UTC.
    ///
    /// Ambiguous times take the standard-time reading. Times inside a DST gap
    /// use the offset in force just before the gap.
    pub fn localize(&self, tz: Tz, naive: NaiveDateTime) -> Result<DateTime<Utc>, GeocodeError> {
        let offset = local_offset(tz, naive)?;
        Ok(Utc.from_utc_datetime(&(naive - offset)))
    }

    /// Map a birth place and wall-clock time to a Julian day.
    pub fn resolve(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<ResolvedInstant, GeocodeError> {
        let tz = self.timezone_for(latitude, longitude)?;
        let naive = date.and_time(time);
        let offset = local_offset(tz, naive)?;
        let utc = Utc.from_utc_datetime(&(naive - offset));
        let julian_day = julian_day_from_utc(&utc);

        log::debug!(
            "Resolved {} in {} ({}) to {} UTC (JD {})",
            naive,
            tz.name(),
            offset,
            utc,
            julian_day
        );

        Ok(ResolvedInstant {
            julian_day,
            utc_offset_applied: offset.local_minus_utc() != 0,
            timezone_id: tz.name().to_string(),
            utc,
        })
    }
}

/// UTC offset for a wall-clock time in `tz`.
fn local_offset(tz: Tz, naive: NaiveDateTime) -> Result<FixedOffset, GeocodeError> {
    let unresolvable = || GeocodeError::UnresolvableLocalTime {
        local: naive,
        timezone: tz.name().to_string(),
    };
    let rules_at = if naive.year() > TRANSITION_HORIZON_YEAR {
        let proxy = calendar_twin(naive.year()).ok_or_else(unresolvable)?;
        log::debug!("Reading {} rules for {} from {}", tz.name(), naive.year(), proxy);
        naive.with_year(proxy).ok_or_else(unresolvable)?
    } else {
        naive
    };

    Ok(match tz.offset_from_local_datetime(&rules_at) {
        LocalResult::Single(offset) => offset.fix(),
        LocalResult::Ambiguous(_, standard) => standard.fix(),
        // Gaps last at most a day
        LocalResult::None => tz
            .offset_from_utc_datetime(&(rules_at - Duration::days(2)))
            .fix(),
    })
}

/// Latest year within the transition tables whose calendar matches `year`:
/// same leap status and same weekday on 1 January.
fn calendar_twin(year: i32) -> Option<i32> {
    let is_leap = |y: i32| NaiveDate::from_ymd_opt(y, 2, 29).is_some();
    let weekday = NaiveDate::from_ymd_opt(year, 1, 1)?.weekday();
    // 28 years without a skipped century leap day cover every calendar
    (TRANSITION_HORIZON_YEAR - 27..=TRANSITION_HORIZON_YEAR)
        .rev()
        .find(|&y| {
            is_leap(y) == is_leap(year)
                && NaiveDate::from_ymd_opt(y, 1, 1).map(|d| d.weekday()) == Some(weekday)
        })
}
