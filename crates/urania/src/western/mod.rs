pub mod dms;
pub mod houses;
pub mod rulers;
pub mod signs;

pub use dms::{to_dms, Dms};
pub use houses::{house_of, HousePlacement};
pub use rulers::{ruling_planet, RulerPolicy, UNKNOWN_RULER};
pub use signs::{element_of, sign_of, Element, Sign, SIGN_WIDTH};
