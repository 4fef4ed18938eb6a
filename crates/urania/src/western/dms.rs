//! Degree-minute-second formatting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Truncated sexagesimal parts of a decimal angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: i32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Dms {
    pub fn from_decimal(decimal_degrees: f64) -> Self {
        let degrees = decimal_degrees.trunc();
        let minutes_full = (decimal_degrees - degrees).abs() * 60.0;
        let minutes = minutes_full.trunc();
        let seconds = ((minutes_full - minutes) * 60.0).trunc();
        Self {
            degrees: degrees as i32,
            minutes: minutes as u32,
            seconds: seconds as u32,
        }
    }

    /// Decimal value rebuilt from the truncated parts.
    pub fn to_decimal(&self) -> f64 {
        let fraction = self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0;
        if self.degrees < 0 {
            self.degrees as f64 - fraction
        } else {
            self.degrees as f64 + fraction
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}'{}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Format decimal degrees as `D°M'S"`.
pub fn to_dms(decimal_degrees: f64) -> String {
    Dms::from_decimal(decimal_degrees).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dms() {
        assert_eq!(to_dms(0.0), "0°0'0\"");
        assert_eq!(to_dms(0.5), "0°30'0\"");
        assert_eq!(to_dms(123.456), "123°27'21\"");
        assert_eq!(to_dms(359.999), "359°59'56\"");
    }

    #[test]
    fn test_seconds_truncate() {
        // 10°0'59.9" must not round up to a full minute
        let value = 10.0 + 59.9 / 3600.0;
        assert_eq!(Dms::from_decimal(value), Dms { degrees: 10, minutes: 0, seconds: 59 });
    }
}
