use crate::ephemeris::Body;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HdType {
    Generator,
    #[serde(rename = "Manifesting Generator")]
    ManifestingGenerator,
    Manifestor,
    Projector,
    Reflector,
}

impl HdType {
    pub const ALL: [HdType; 5] = [
        HdType::Generator,
        HdType::ManifestingGenerator,
        HdType::Manifestor,
        HdType::Projector,
        HdType::Reflector,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HdType::Generator => "Generator",
            HdType::ManifestingGenerator => "Manifesting Generator",
            HdType::Manifestor => "Manifestor",
            HdType::Projector => "Projector",
            HdType::Reflector => "Reflector",
        }
    }

    /// Generators and Manifesting Generators share sacral authority.
    pub fn is_generator(&self) -> bool {
        matches!(self, HdType::Generator | HdType::ManifestingGenerator)
    }
}

impl fmt::Display for HdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HdType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HdType::ALL
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("Unknown Human Design type: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Authority {
    #[serde(rename = "Emotional Solar Plexus")]
    EmotionalSolarPlexus,
    Sacral,
    Splenic,
    #[serde(rename = "Ego Manifested")]
    EgoManifested,
    #[serde(rename = "Ego Projected")]
    EgoProjected,
    #[serde(rename = "Self-Projected")]
    SelfProjected,
    #[serde(rename = "Mental (Environmental)")]
    Mental,
    #[serde(rename = "Lunar Cycle")]
    LunarCycle,
    #[serde(rename = "None (Outer Authority)")]
    OuterAuthority,
}

impl Authority {
    pub fn name(&self) -> &'static str {
        match self {
            Authority::EmotionalSolarPlexus => "Emotional Solar Plexus",
            Authority::Sacral => "Sacral",
            Authority::Splenic => "Splenic",
            Authority::EgoManifested => "Ego Manifested",
            Authority::EgoProjected => "Ego Projected",
            Authority::SelfProjected => "Self-Projected",
            Authority::Mental => "Mental (Environmental)",
            Authority::LunarCycle => "Lunar Cycle",
            Authority::OuterAuthority => "None (Outer Authority)",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Definition {
    Single,
    Split,
    Undefined,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Definition::Single => "Single",
            Definition::Split => "Split",
            Definition::Undefined => "Undefined",
        };
        f.write_str(name)
    }
}

/// Conscious/unconscious line pair, rendered as `"x/y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub sun_line: u8,
    pub earth_line: u8,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sun_line, self.earth_line)
    }
}

impl Serialize for Profile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A body's gate and line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Activation {
    pub body: Body,
    pub longitude: f64,
    pub gate: u8,
    pub line: u8,
}

/// Strategy, not-self theme and signature attached to a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeProfile {
    pub strategy: String,
    pub not_self_theme: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanDesignResult {
    #[serde(rename = "Type")]
    pub hd_type: HdType,
    #[serde(rename = "Strategy")]
    pub strategy: String,
    #[serde(rename = "Not-Self Theme")]
    pub not_self_theme: String,
    #[serde(rename = "Signature")]
    pub signature: String,
    #[serde(rename = "Definition")]
    pub definition: Definition,
    #[serde(rename = "Authority")]
    pub authority: Authority,
    #[serde(rename = "Profile")]
    pub profile: Profile,
    #[serde(rename = "Incarnation Cross")]
    pub incarnation_cross: String,
    #[serde(rename = "Activations")]
    pub activations: Vec<Activation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_round_trip_through_from_str() {
        for t in HdType::ALL {
            assert_eq!(t.name().parse::<HdType>(), Ok(t));
        }
        assert!("Wizard".parse::<HdType>().is_err());
    }

    #[test]
    fn test_profile_display() {
        let profile = Profile { sun_line: 6, earth_line: 2 };
        assert_eq!(profile.to_string(), "6/2");
    }
}
