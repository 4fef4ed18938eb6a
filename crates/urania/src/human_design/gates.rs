//! Gate and line segmentation of the ecliptic.
//!
//! The circle is cut into 64 gates of 5.625° starting at 0° Aries, and each
//! gate into 6 lines.

use crate::ephemeris::{normalize_degrees, Body, BodyPositions};
use crate::human_design::types::Activation;
use std::collections::BTreeSet;

pub const GATE_COUNT: u8 = 64;
pub const GATE_WIDTH: f64 = 360.0 / GATE_COUNT as f64;
pub const LINE_WIDTH: f64 = GATE_WIDTH / 6.0;

/// Gate (1-64) containing `longitude`.
pub fn gate_of(longitude: f64) -> u8 {
    let lon = normalize_degrees(longitude);
    let index = (lon / GATE_WIDTH).floor() as u8;
    index.min(GATE_COUNT - 1) + 1
}

/// Line (1-6) of `longitude` within its gate.
pub fn line_of(longitude: f64) -> u8 {
    let within = normalize_degrees(longitude) % GATE_WIDTH;
    let index = (within / LINE_WIDTH).floor() as u8;
    index.min(5) + 1
}

pub fn activation(body: Body, longitude: f64) -> Activation {
    let longitude = normalize_degrees(longitude);
    Activation {
        body,
        longitude,
        gate: gate_of(longitude),
        line: line_of(longitude),
    }
}

/// Activations for all eleven bodies, Earth last.
pub fn activations(positions: &BodyPositions) -> Vec<Activation> {
    positions
        .iter()
        .map(|(body, lon)| activation(body, lon))
        .collect()
}

pub fn active_gates(activations: &[Activation]) -> BTreeSet<u8> {
    activations.iter().map(|a| a.gate).collect()
}
