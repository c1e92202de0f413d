use crate::core::environment::EnvironmentSettings;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// The complete input of one cell evaluation.
///
/// Concentrations are in mol/L and the reactant quantity is the number of moles of
/// anode material consumed. Positivity is checked by the calculations that need it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub anode: String,
    pub cathode: String,
    pub anode_concentration: f64,
    pub cathode_concentration: f64,
    pub moles_reactant: f64,
    pub environment: EnvironmentSettings,
}

#[derive(Default)]
pub struct SimulationParametersBuilder {
    anode: Option<String>,
    cathode: Option<String>,
    anode_concentration: Option<f64>,
    cathode_concentration: Option<f64>,
    moles_reactant: Option<f64>,
    environment: Option<EnvironmentSettings>,
}

impl SimulationParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anode(mut self, material: impl Into<String>) -> Self {
        self.anode = Some(material.into());
        self
    }
    pub fn cathode(mut self, material: impl Into<String>) -> Self {
        self.cathode = Some(material.into());
        self
    }
    pub fn anode_concentration(mut self, molarity: f64) -> Self {
        self.anode_concentration = Some(molarity);
        self
    }
    pub fn cathode_concentration(mut self, molarity: f64) -> Self {
        self.cathode_concentration = Some(molarity);
        self
    }
    pub fn moles_reactant(mut self, moles: f64) -> Self {
        self.moles_reactant = Some(moles);
        self
    }
    pub fn environment(mut self, environment: EnvironmentSettings) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn build(self) -> Result<SimulationParameters, ConfigError> {
        Ok(SimulationParameters {
            anode: self.anode.ok_or(ConfigError::MissingParameter("anode"))?,
            cathode: self
                .cathode
                .ok_or(ConfigError::MissingParameter("cathode"))?,
            anode_concentration: self
                .anode_concentration
                .ok_or(ConfigError::MissingParameter("anode_concentration"))?,
            cathode_concentration: self
                .cathode_concentration
                .ok_or(ConfigError::MissingParameter("cathode_concentration"))?,
            moles_reactant: self
                .moles_reactant
                .ok_or(ConfigError::MissingParameter("moles_reactant"))?,
            environment: self.environment.unwrap_or_default(),
        })
    }
}
