pub mod engine;
pub mod gates;
pub mod rules;
pub mod types;

pub use engine::HumanDesignEngine;
pub use gates::{activation, activations, gate_of, line_of, GATE_WIDTH, LINE_WIDTH};
pub use rules::{
    determine_authority, determine_definition, determine_type, evaluate, incarnation_cross,
};
pub use types::{
    Activation, Authority, Definition, HdType, HumanDesignResult, Profile, TypeProfile,
};
