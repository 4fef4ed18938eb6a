//! Reference tables: sign rulers, house texts, center gates, type profiles,
//! definition sets and incarnation crosses.
//!
//! The tables are TOML. A default document is compiled into the crate and can
//! be replaced with [`ReferenceData::load`].

pub mod store;

pub use store::{
    CenterGates, DefinitionGates, HouseText, ReferenceData, ReferenceDataError, NO_DESCRIPTION,
    UNKNOWN_HOUSE_TITLE,
};
