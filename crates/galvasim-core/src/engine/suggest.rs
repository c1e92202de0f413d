//! Advisory values for automatic and mixed configuration.
//!
//! Nothing here feeds the deterministic calculation path. The concentration
//! suggestions are intentionally randomized; the generator is always supplied by the
//! caller so tests and reproducible runs can seed it.

use crate::core::potentials;
use crate::core::utils::rounding::round_to;
use rand::Rng;
use std::ops::RangeInclusive;

const ANODE_CONCENTRATION_RANGE: RangeInclusive<f64> = 0.5..=1.0;
const CATHODE_CONCENTRATION_RANGE: RangeInclusive<f64> = 0.1..=0.5;
const MOLES_PER_VOLT: f64 = 0.1;

/// Cell potential used to size the reactant quantity when no evaluated cell exists yet.
pub const NOMINAL_CELL_POTENTIAL: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElectrodeRole {
    Anode,
    Cathode,
}

/// The `(anode, cathode)` pair with the widest potential gap in the reference table.
pub fn suggest_optimal_electrodes() -> (&'static str, &'static str) {
    (potentials::lowest().0, potentials::highest().0)
}

/// Draws a compartment concentration (M, two decimals): higher on the anode side,
/// lower on the cathode side.
pub fn suggest_optimal_concentration(role: ElectrodeRole, rng: &mut impl Rng) -> f64 {
    let range = match role {
        ElectrodeRole::Anode => ANODE_CONCENTRATION_RANGE,
        ElectrodeRole::Cathode => CATHODE_CONCENTRATION_RANGE,
    };
    round_to(rng.gen_range(range), 2)
}

pub fn suggest_optimal_moles(cell_potential: f64) -> f64 {
    round_to(cell_potential * MOLES_PER_VOLT, 3)
}
