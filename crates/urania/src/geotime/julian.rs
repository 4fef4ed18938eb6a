//! Julian day and sidereal time.

use crate::ephemeris::swe_lock;
use chrono::{DateTime, Datelike, Timelike, Utc};
use swisseph::swe::{julday, sidtime};

// swe_julday calendar flag
const GREGORIAN: u32 = 1;

/// Civil Gregorian date to Julian day.
///
/// `hour` is the decimal hour of day (e.g. 13.5 for 13:30).
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let _guard = swe_lock();
    julday(year, month as i32, day as i32, hour, GREGORIAN)
}

/// Julian day for a UTC instant. Seconds are dropped: the fractional day is
/// built from hour + minute / 60 only.
pub fn julian_day_from_utc(dt: &DateTime<Utc>) -> f64 {
    let hour = dt.hour() as f64 + dt.minute() as f64 / 60.0;
    julian_day(dt.year(), dt.month(), dt.day(), hour)
}

/// Greenwich apparent sidereal time in decimal hours [0, 24).
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let hours = {
        let _guard = swe_lock();
        sidtime(jd)
    };
    hours.rem_euclid(24.0)
}

/// Local apparent sidereal time in decimal hours [0, 24) for an east-positive
/// geographic longitude.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    (greenwich_sidereal_time(jd) + longitude / 15.0).rem_euclid(24.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_julian_day_epochs() {
        assert!(close(julian_day(2000, 1, 1, 12.0), 2_451_545.0, 1e-9));
        let sputnik = julian_day(1957, 10, 4, 19.0 + 26.0 / 60.0 + 24.0 / 3600.0);
        assert!(close(sputnik, 2_436_116.31, 1e-6));
        assert!(close(julian_day(1987, 1, 27, 0.0), 2_446_822.5, 1e-9));
        assert!(close(julian_day(1988, 6, 19, 12.0), 2_447_332.0, 1e-9));
        // 1600 is a leap century
        assert!(close(julian_day(1600, 1, 1, 0.0), 2_305_447.5, 1e-9));
    }

    #[test]
    fn test_julian_day_drops_seconds() {
        let dt = Utc.with_ymd_and_hms(1988, 1, 12, 13, 30, 59).unwrap();
        assert!(close(julian_day_from_utc(&dt), 2_447_173.062_5, 1e-9));
    }

    #[test]
    fn test_sidereal_time_range() {
        // 1987-04-10 0h UT: apparent sidereal time 13h10m46.1351s
        let gast = greenwich_sidereal_time(2_446_895.5);
        let expected = 13.0 + 10.0 / 60.0 + 46.1351 / 3600.0;
        assert!(close(gast, expected, 1e-4), "gast = {gast}");

        let lst = local_sidereal_time(2_446_895.5, -180.0);
        assert!((0.0..24.0).contains(&lst));
        assert!(close(lst, expected - 12.0, 1e-4));
    }
}
