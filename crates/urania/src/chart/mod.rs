//! Natal chart summary: signs, angles, houses and ruling planet.

pub mod aggregator;
pub mod types;

pub use aggregator::{assemble, AstrologyAggregator};
pub use types::{AstrologyResult, HouseCusp, HouseInfo, Position};
