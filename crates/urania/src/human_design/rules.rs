//! Categorical Human Design rules over a set of activated gates.

use crate::ephemeris::BodyPositions;
use crate::human_design::gates::{active_gates, activations, gate_of, line_of};
use crate::human_design::types::{Authority, Definition, HdType, HumanDesignResult, Profile};
use crate::reference::{CenterGates, DefinitionGates, ReferenceData};
use std::collections::BTreeSet;

pub const UNKNOWN: &str = "Unknown";

fn any_active(active: &BTreeSet<u8>, center: &BTreeSet<u8>) -> bool {
    !active.is_disjoint(center)
}

/// First matching rule wins.
pub fn determine_type(active: &BTreeSet<u8>, centers: &CenterGates) -> HdType {
    let sacral = any_active(active, &centers.sacral);
    let motor = any_active(active, &centers.motor);

    if sacral {
        HdType::Generator
    } else if motor {
        HdType::Manifestor
    } else if !motor {
        HdType::Projector
    } else {
        HdType::Reflector
    }
}

/// Authority cascade, checked top to bottom.
pub fn determine_authority(
    hd_type: HdType,
    active: &BTreeSet<u8>,
    centers: &CenterGates,
) -> Authority {
    let has = |center: &BTreeSet<u8>| any_active(active, center);

    if has(&centers.emotional) {
        Authority::EmotionalSolarPlexus
    } else if hd_type.is_generator() && has(&centers.sacral) {
        Authority::Sacral
    } else if has(&centers.splenic) {
        Authority::Splenic
    } else if hd_type == HdType::Manifestor && has(&centers.ego) {
        Authority::EgoManifested
    } else if hd_type == HdType::Projector && has(&centers.ego) {
        Authority::EgoProjected
    } else if hd_type == HdType::Projector && has(&centers.g_center) {
        Authority::SelfProjected
    } else if hd_type == HdType::Projector && (has(&centers.ajna) || has(&centers.head)) {
        Authority::Mental
    } else if hd_type == HdType::Reflector {
        Authority::LunarCycle
    } else {
        Authority::OuterAuthority
    }
}

/// Placeholder definition test: every single-set gate active, or any split-set
/// gate active. Does not trace channels between centers.
pub fn determine_definition(active: &BTreeSet<u8>, sets: &DefinitionGates) -> Definition {
    if sets.single.is_subset(active) {
        Definition::Single
    } else if any_active(active, &sets.split) {
        Definition::Split
    } else {
        Definition::Undefined
    }
}

pub fn profile(sun: f64, earth: f64) -> Profile {
    Profile {
        sun_line: line_of(sun),
        earth_line: line_of(earth),
    }
}

pub fn incarnation_cross(sun_gate: u8, earth_gate: u8, reference: &ReferenceData) -> String {
    match reference.cross(sun_gate, earth_gate) {
        Some(name) => name.to_string(),
        None => format!("Custom Cross (Sun Gate: {sun_gate}, Earth Gate: {earth_gate})"),
    }
}

/// Apply every rule to one set of positions.
pub fn evaluate(positions: &BodyPositions, reference: &ReferenceData) -> HumanDesignResult {
    let activations = activations(positions);
    let active = active_gates(&activations);
    let centers = reference.centers();

    let hd_type = determine_type(&active, centers);
    let (strategy, not_self_theme, signature) = match reference.type_profile(hd_type) {
        Some(p) => (p.strategy.clone(), p.not_self_theme.clone(), p.signature.clone()),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string(), UNKNOWN.to_string()),
    };

    let sun = positions.sun();
    let earth = positions.earth();

    HumanDesignResult {
        hd_type,
        strategy,
        not_self_theme,
        signature,
        definition: determine_definition(&active, reference.definition()),
        authority: determine_authority(hd_type, &active, centers),
        profile: profile(sun, earth),
        incarnation_cross: incarnation_cross(gate_of(sun), gate_of(earth), reference),
        activations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gates(list: &[u8]) -> BTreeSet<u8> {
        list.iter().copied().collect()
    }

    fn reference() -> ReferenceData {
        ReferenceData::embedded().unwrap()
    }

    #[test]
    fn test_type_cascade() {
        let data = reference();
        let centers = data.centers();
        assert_eq!(determine_type(&gates(&[34]), centers), HdType::Generator);
        // 5 is sacral, 21 is motor: sacral wins
        assert_eq!(determine_type(&gates(&[5, 21]), centers), HdType::Generator);
        assert_eq!(determine_type(&gates(&[21]), centers), HdType::Manifestor);
        assert_eq!(determine_type(&gates(&[1, 64]), centers), HdType::Projector);
        assert_eq!(determine_type(&gates(&[]), centers), HdType::Projector);
    }

    #[test]
    fn test_authority_order() {
        let data = reference();
        let c = data.centers();
        assert_eq!(
            determine_authority(HdType::Generator, &gates(&[6, 34]), c),
            Authority::EmotionalSolarPlexus
        );
        assert_eq!(determine_authority(HdType::Generator, &gates(&[34]), c), Authority::Sacral);
        assert_eq!(
            determine_authority(HdType::ManifestingGenerator, &gates(&[34]), c),
            Authority::Sacral
        );
        // 50 is both sacral and splenic; a Projector skips the sacral rule
        assert_eq!(determine_authority(HdType::Projector, &gates(&[50]), c), Authority::Splenic);
        assert_eq!(determine_authority(HdType::Manifestor, &gates(&[21]), c), Authority::EgoManifested);
        assert_eq!(determine_authority(HdType::Projector, &gates(&[40]), c), Authority::EgoProjected);
        assert_eq!(determine_authority(HdType::Projector, &gates(&[1]), c), Authority::SelfProjected);
        assert_eq!(determine_authority(HdType::Projector, &gates(&[64]), c), Authority::Mental);
        assert_eq!(determine_authority(HdType::Projector, &gates(&[47]), c), Authority::Mental);
        assert_eq!(determine_authority(HdType::Reflector, &gates(&[2]), c), Authority::LunarCycle);
        assert_eq!(
            determine_authority(HdType::Projector, &gates(&[59]), c),
            Authority::OuterAuthority
        );
        assert_eq!(
            determine_authority(HdType::Manifestor, &gates(&[1]), c),
            Authority::OuterAuthority
        );
    }

    #[test]
    fn test_definition() {
        let data = reference();
        let sets = data.definition();
        assert_eq!(determine_definition(&gates(&[1, 8, 13, 33, 10]), sets), Definition::Single);
        assert_eq!(determine_definition(&gates(&[1, 8, 57]), sets), Definition::Split);
        assert_eq!(determine_definition(&gates(&[1, 8, 13]), sets), Definition::Undefined);
    }

    #[test]
    fn test_cross_lookup_and_fallback() {
        let data = reference();
        assert_eq!(incarnation_cross(34, 20, &data), "Right Angle Cross of the Sleeping Phoenix");
        assert_eq!(
            incarnation_cross(52, 20, &data),
            "Custom Cross (Sun Gate: 52, Earth Gate: 20)"
        );
    }

    #[test]
    fn test_evaluate_with_missing_type_profile() {
        let data = ReferenceData::from_toml_str("[centers]\nsacral = [52]").unwrap();
        let positions = BodyPositions::new([291.563, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let result = evaluate(&positions, &data);
        assert_eq!(result.hd_type, HdType::Generator);
        assert_eq!(result.strategy, UNKNOWN);
        assert_eq!(result.not_self_theme, UNKNOWN);
        assert_eq!(result.authority, Authority::Sacral);
        assert_eq!(result.activations.len(), 11);
    }
}
