//! Birth place and wall-clock time to absolute instant.

pub mod julian;
pub mod resolver;

pub use julian::{greenwich_sidereal_time, julian_day, julian_day_from_utc, local_sidereal_time};
pub use resolver::{GeoTimeResolver, GeocodeError, ResolvedInstant, TimezoneLookup, TzfLookup};
