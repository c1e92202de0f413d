//! Standard reduction potentials (V) relative to the standard hydrogen electrode.

use phf::{Map, phf_map};

static STANDARD_REDUCTION_POTENTIALS: Map<&'static str, f64> = phf_map! {
    "Li" => -3.04,
    "K" => -2.93,
    "Ca" => -2.87,
    "Na" => -2.71,
    "Mg" => -2.37,
    "Al" => -1.66,
    "Zn" => -0.76,
    "Fe" => -0.44,
    "Ni" => -0.25,
    "Sn" => -0.14,
    "Pb" => -0.13,
    "H2" => 0.00, // Standard hydrogen electrode
    "Cu" => 0.34,
    "Ag" => 0.80,
    "Hg" => 0.85,
    "Pt" => 1.20,
    "Au" => 1.50,
};

/// Looks up the standard reduction potential of an electrode material.
///
/// Identifiers are matched exactly (`"Zn"`, not `"zn"`).
pub fn standard_potential(material: &str) -> Option<f64> {
    STANDARD_REDUCTION_POTENTIALS.get(material).copied()
}

/// All tabulated materials, ordered from the most negative potential to the most positive.
pub fn materials() -> Vec<(&'static str, f64)> {
    let mut entries: Vec<_> = STANDARD_REDUCTION_POTENTIALS
        .entries()
        .map(|(name, potential)| (*name, *potential))
        .collect();
    entries.sort_by(|a, b| a.1.total_cmp(&b.1));
    entries
}

/// The material with the lowest standard potential, i.e. the strongest reducing agent.
pub fn lowest() -> (&'static str, f64) {
    extreme(|a, b| a.1.total_cmp(&b.1).reverse())
}

/// The material with the highest standard potential, i.e. the strongest oxidizing agent.
pub fn highest() -> (&'static str, f64) {
    extreme(|a, b| a.1.total_cmp(&b.1))
}

fn extreme<F>(compare: F) -> (&'static str, f64)
where
    F: Fn(&(&'static str, f64), &(&'static str, f64)) -> std::cmp::Ordering,
{
    STANDARD_REDUCTION_POTENTIALS
        .entries()
        .map(|(name, potential)| (*name, *potential))
        .max_by(|a, b| compare(a, b))
        // The table is a non-empty constant.
        .unwrap_or(("H2", 0.0))
}
