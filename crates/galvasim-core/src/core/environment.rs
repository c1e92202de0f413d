//! Environmental conditions and their effect on a single electrode's potential.
//!
//! The adjustment is a simplified empirical model, not a rigorous thermodynamic one:
//! temperature and solvent scale the standard potential, while pressure, pH and the
//! presence of a catalyst shift it additively. The pH term is the Nernst slope for a
//! one-proton, one-electron process at 25 °C and is applied to every electrode alike.

use crate::core::utils::rounding::round_to;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub const KELVIN_OFFSET: f64 = 273.15;
pub const STANDARD_TEMPERATURE_K: f64 = 298.15;

const PRESSURE_COEFFICIENT: f64 = 0.01; // V per ln(atm)
const PH_SLOPE: f64 = -0.059; // V per pH unit
const NEUTRAL_PH: f64 = 7.0;
const CATALYST_BOOST: f64 = 0.05; // V

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvironmentError {
    #[error("Pressure must be a positive, finite number of atmospheres (got {0})")]
    InvalidPressure(f64),
    #[error("Temperature of {0} °C lies at or below absolute zero")]
    InvalidTemperature(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Solvent {
    #[default]
    Water,
    Methanol,
    Ethanol,
    Dmso,
    Acetonitrile,
    /// A solvent outside the modeled set; it is treated like water.
    Unrecognized(String),
}

impl Solvent {
    pub const KNOWN: [Solvent; 5] = [
        Solvent::Water,
        Solvent::Methanol,
        Solvent::Ethanol,
        Solvent::Dmso,
        Solvent::Acetonitrile,
    ];

    /// Multiplicative scaling applied to a standard potential measured in this solvent.
    pub fn factor(&self) -> f64 {
        match self {
            Solvent::Water => 1.0,
            Solvent::Methanol => 0.95,
            Solvent::Ethanol => 0.90,
            Solvent::Dmso => 1.1,
            Solvent::Acetonitrile => 1.05,
            Solvent::Unrecognized(_) => 1.0,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Solvent::Water => "Water",
            Solvent::Methanol => "Methanol",
            Solvent::Ethanol => "Ethanol",
            Solvent::Dmso => "DMSO",
            Solvent::Acetonitrile => "Acetonitrile",
            Solvent::Unrecognized(token) => token,
        }
    }
}

impl FromStr for Solvent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Water" => Solvent::Water,
            "Methanol" => Solvent::Methanol,
            "Ethanol" => Solvent::Ethanol,
            "DMSO" => Solvent::Dmso,
            "Acetonitrile" => Solvent::Acetonitrile,
            other => Solvent::Unrecognized(other.to_string()),
        })
    }
}

impl fmt::Display for Solvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalyst {
    Platinum,
    Palladium,
    Nickel,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown catalyst '{0}'. Expected one of: Platinum, Palladium, Nickel")]
pub struct CatalystParseError(pub String);

impl Catalyst {
    pub const ALL: [Catalyst; 3] = [Catalyst::Platinum, Catalyst::Palladium, Catalyst::Nickel];

    pub fn name(&self) -> &'static str {
        match self {
            Catalyst::Platinum => "Platinum",
            Catalyst::Palladium => "Palladium",
            Catalyst::Nickel => "Nickel",
        }
    }
}

impl FromStr for Catalyst {
    type Err = CatalystParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Catalyst::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalystParseError(s.to_string()))
    }
}

impl fmt::Display for Catalyst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conditions under which a cell is evaluated.
///
/// Units:
/// - temperature: °C
/// - pressure: atm
/// - ionic strength: M (carried for completeness, not used by the adjustment)
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentSettings {
    pub temperature: f64,
    pub pressure: f64,
    pub solvent: Solvent,
    pub catalyst: Option<Catalyst>,
    pub ph: f64,
    pub ionic_strength: f64,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            pressure: 1.0,
            solvent: Solvent::Water,
            catalyst: None,
            ph: 7.0,
            ionic_strength: 0.0,
        }
    }
}

impl EnvironmentSettings {
    pub fn absolute_temperature(&self) -> f64 {
        self.temperature + KELVIN_OFFSET
    }

    /// Checks the preconditions of [`modify_potential`](Self::modify_potential).
    pub fn validate(&self) -> Result<(), EnvironmentError> {
        if !(self.pressure.is_finite() && self.pressure > 0.0) {
            return Err(EnvironmentError::InvalidPressure(self.pressure));
        }
        if !(self.temperature.is_finite() && self.absolute_temperature() > 0.0) {
            return Err(EnvironmentError::InvalidTemperature(self.temperature));
        }
        Ok(())
    }

    /// Adjusts a standard reduction potential (V) for these conditions, rounded to
    /// three decimals.
    ///
    /// ```text
    /// E' = E° · (T / 298.15) · f_solvent + 0.01 · ln(P) − 0.059 · (pH − 7) + boost
    /// ```
    ///
    /// where `boost` is 0.05 V whenever any catalyst is present.
    pub fn modify_potential(&self, base_potential: f64) -> Result<f64, EnvironmentError> {
        self.validate()?;

        let temp_factor = self.absolute_temperature() / STANDARD_TEMPERATURE_K;
        let pressure_factor = self.pressure.ln();
        let ph_factor = PH_SLOPE * (self.ph - NEUTRAL_PH);

        if let Solvent::Unrecognized(token) = &self.solvent {
            warn!(
                "Unrecognized solvent '{}'; using the neutral solvent factor of 1.0.",
                token
            );
        }
        let solvent_factor = self.solvent.factor();

        let catalyst_boost = if self.catalyst.is_some() {
            CATALYST_BOOST
        } else {
            0.0
        };

        let adjusted = base_potential * temp_factor * solvent_factor
            + pressure_factor * PRESSURE_COEFFICIENT
            + ph_factor
            + catalyst_boost;

        Ok(round_to(adjusted, 3))
    }
}
