//! # Core Module
//!
//! Stateless building blocks of the electrochemical model.
//!
//! - **Reference Data** ([`potentials`]) - Standard reduction potentials vs. SHE,
//!   fixed at compile time.
//! - **Conditions** ([`environment`]) - Temperature, pressure, solvent, catalyst and
//!   pH, and the adjustment they apply to a single electrode's standard potential.
//! - **Utilities** ([`utils`]) - Decimal rounding shared by every numeric result.

pub mod environment;
pub mod potentials;
pub mod utils;
