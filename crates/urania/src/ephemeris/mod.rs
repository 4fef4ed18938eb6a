pub mod adapter;
pub mod types;

pub(crate) use adapter::swe_lock;
pub use adapter::{Ephemeris, EphemerisError, SwissEphemerisAdapter, MAX_JULIAN_DAY, MIN_JULIAN_DAY};
pub use types::{
    normalize_degrees, Body, BodyPositions, EphemerisSource, HouseCusps, HouseSystem,
};
