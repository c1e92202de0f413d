use crate::cli::SimulateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{parse_catalyst, parse_scientific_notation};
use galvasim::core::environment::{EnvironmentSettings, Solvent};
use galvasim::workflows::simulate::{CellInputs, InputMode};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum PartialInputMode {
    Manual,
    Auto,
    Mixed,
}

impl From<PartialInputMode> for InputMode {
    fn from(p: PartialInputMode) -> Self {
        match p {
            PartialInputMode::Manual => InputMode::Manual,
            PartialInputMode::Auto => InputMode::Auto,
            PartialInputMode::Mixed => InputMode::Mixed,
        }
    }
}

impl std::str::FromStr for PartialInputMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "auto" => Ok(Self::Auto),
            "mixed" => Ok(Self::Mixed),
            other => Err(CliError::Config(format!(
                "Invalid mode '{}'. Expected manual, auto or mixed.",
                other
            ))),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCellConfig {
    anode: Option<String>,
    cathode: Option<String>,
    #[serde(rename = "anode-concentration")]
    anode_concentration: Option<f64>,
    #[serde(rename = "cathode-concentration")]
    cathode_concentration: Option<f64>,
    #[serde(rename = "moles-reactant")]
    moles_reactant: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialEnvironmentConfig {
    temperature: Option<f64>,
    pressure: Option<f64>,
    solvent: Option<String>,
    catalyst: Option<String>,
    ph: Option<f64>,
    #[serde(rename = "ionic-strength")]
    ionic_strength: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSimulationConfig {
    mode: Option<PartialInputMode>,
    cell: Option<PartialCellConfig>,
    environment: Option<PartialEnvironmentConfig>,
}

/// Everything the simulation workflow needs once file, `--set` and flag values are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    pub mode: InputMode,
    pub inputs: CellInputs,
    pub environment: EnvironmentSettings,
}

impl PartialSimulationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Merges this file configuration with the command line. Dedicated flags win over
    /// `--set` values, which win over the file; unset environment values fall back to
    /// standard conditions.
    pub fn merge_with_cli(mut self, args: &SimulateArgs) -> Result<SimulationRequest> {
        self.apply_set_values(&args.set_values)?;

        let cell = self.cell.take().unwrap_or_default();
        let env = self.environment.take().unwrap_or_default();
        let defaults = EnvironmentSettings::default();

        let mode = args
            .mode
            .map(InputMode::from)
            .or(self.mode.map(InputMode::from))
            .unwrap_or_default();

        let inputs = CellInputs {
            anode: args.anode.clone().or(cell.anode),
            cathode: args.cathode.clone().or(cell.cathode),
            anode_concentration: args.anode_concentration.or(cell.anode_concentration),
            cathode_concentration: args.cathode_concentration.or(cell.cathode_concentration),
            moles_reactant: args.moles_reactant.or(cell.moles_reactant),
        };

        let solvent = match args.solvent.as_ref().or(env.solvent.as_ref()) {
            Some(name) => name
                .parse::<Solvent>()
                .unwrap_or_else(|never| match never {}),
            None => defaults.solvent.clone(),
        };
        let catalyst = match args.catalyst.as_ref().or(env.catalyst.as_ref()) {
            Some(name) => parse_catalyst(name).map_err(|e| CliError::Config(e.to_string()))?,
            None => defaults.catalyst,
        };

        let environment = EnvironmentSettings {
            temperature: args
                .temperature
                .or(env.temperature)
                .unwrap_or(defaults.temperature),
            pressure: args.pressure.or(env.pressure).unwrap_or(defaults.pressure),
            solvent,
            catalyst,
            ph: args.ph.or(env.ph).unwrap_or(defaults.ph),
            ionic_strength: args
                .ionic_strength
                .or(env.ionic_strength)
                .unwrap_or(defaults.ionic_strength),
        };

        debug!(?mode, ?inputs, ?environment, "Merged simulation configuration.");
        Ok(SimulationRequest {
            mode,
            inputs,
            environment,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let number = || {
                parse_scientific_notation(value_str).map_err(|e| {
                    CliError::Config(format!("Invalid value for {}: {}", key, e))
                })
            };

            match key {
                "mode" => self.mode = Some(value_str.parse()?),
                "cell.anode" => self.cell().anode = Some(value_str.to_string()),
                "cell.cathode" => self.cell().cathode = Some(value_str.to_string()),
                "cell.anode-concentration" => self.cell().anode_concentration = Some(number()?),
                "cell.cathode-concentration" => {
                    self.cell().cathode_concentration = Some(number()?)
                }
                "cell.moles-reactant" => self.cell().moles_reactant = Some(number()?),
                "environment.temperature" => self.environment().temperature = Some(number()?),
                "environment.pressure" => self.environment().pressure = Some(number()?),
                "environment.solvent" => {
                    self.environment().solvent = Some(value_str.to_string())
                }
                "environment.catalyst" => {
                    self.environment().catalyst = Some(value_str.to_string())
                }
                "environment.ph" => self.environment().ph = Some(number()?),
                "environment.ionic-strength" => {
                    self.environment().ionic_strength = Some(number()?)
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn cell(&mut self) -> &mut PartialCellConfig {
        self.cell.get_or_insert_with(Default::default)
    }

    fn environment(&mut self) -> &mut PartialEnvironmentConfig {
        self.environment.get_or_insert_with(Default::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use galvasim::core::environment::Catalyst;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn simulate_args(extra: &[&str]) -> SimulateArgs {
        let mut args = vec!["galvasim", "simulate"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Simulate(args) => args,
            _ => panic!("Expected 'simulate' subcommand"),
        }
    }

    const FULL_CONFIG: &str = r#"
        mode = "manual"

        [cell]
        anode = "Zn"
        cathode = "Cu"
        anode-concentration = 1.0
        cathode-concentration = 0.5
        moles-reactant = 0.2

        [environment]
        temperature = 40
        pressure = 2.0
        solvent = "Ethanol"
        catalyst = "Palladium"
        ph = 6.5
        ionic-strength = 0.1
    "#;

    #[test]
    fn load_from_file_populates_every_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "full.toml", FULL_CONFIG);

        let request = PartialSimulationConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&simulate_args(&[]))
            .unwrap();

        assert_eq!(request.mode, InputMode::Manual);
        assert_eq!(request.inputs.anode.as_deref(), Some("Zn"));
        assert_eq!(request.inputs.cathode.as_deref(), Some("Cu"));
        assert_eq!(request.inputs.anode_concentration, Some(1.0));
        assert_eq!(request.inputs.cathode_concentration, Some(0.5));
        assert_eq!(request.inputs.moles_reactant, Some(0.2));
        assert_eq!(request.environment.temperature, 40.0);
        assert_eq!(request.environment.pressure, 2.0);
        assert_eq!(request.environment.solvent, Solvent::Ethanol);
        assert_eq!(request.environment.catalyst, Some(Catalyst::Palladium));
        assert_eq!(request.environment.ph, 6.5);
        assert_eq!(request.environment.ionic_strength, 0.1);
    }

    #[test]
    fn missing_sections_fall_back_to_standard_conditions() {
        let request = PartialSimulationConfig::default()
            .merge_with_cli(&simulate_args(&["--anode", "Mg"]))
            .unwrap();

        assert_eq!(request.mode, InputMode::Manual);
        assert_eq!(request.inputs.anode.as_deref(), Some("Mg"));
        assert_eq!(request.inputs.cathode, None);
        assert_eq!(request.environment, EnvironmentSettings::default());
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "override.toml", FULL_CONFIG);

        let args = simulate_args(&[
            "--mode",
            "auto",
            "--anode",
            "Al",
            "--temperature",
            "-5",
            "--catalyst",
            "none",
            "--solvent",
            "DMSO",
        ]);
        let request = PartialSimulationConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(request.mode, InputMode::Auto);
        assert_eq!(request.inputs.anode.as_deref(), Some("Al"));
        assert_eq!(request.inputs.cathode.as_deref(), Some("Cu"));
        assert_eq!(request.environment.temperature, -5.0);
        assert_eq!(request.environment.catalyst, None);
        assert_eq!(request.environment.solvent, Solvent::Dmso);
    }

    #[test]
    fn set_values_override_file_but_not_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "set.toml", FULL_CONFIG);

        let args = simulate_args(&[
            "-S",
            "environment.temperature=60",
            "-S",
            "cell.anode-concentration=1.5x10^-3",
            "-S",
            "mode=mixed",
            "-S",
            "environment.ph=9",
            "--ph",
            "8",
        ]);
        let request = PartialSimulationConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(request.mode, InputMode::Mixed);
        assert_eq!(request.environment.temperature, 60.0);
        assert_eq!(request.inputs.anode_concentration, Some(1.5e-3));
        assert_eq!(request.environment.ph, 8.0);
    }

    #[test]
    fn unknown_solvent_is_kept_as_unrecognized() {
        let request = PartialSimulationConfig::default()
            .merge_with_cli(&simulate_args(&["--solvent", "Glycerol"]))
            .unwrap();
        assert_eq!(
            request.environment.solvent,
            Solvent::Unrecognized("Glycerol".to_string())
        );
    }

    #[test]
    fn unknown_catalyst_is_a_config_error() {
        let result = PartialSimulationConfig::default()
            .merge_with_cli(&simulate_args(&["--catalyst", "Iridium"]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("Iridium")));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["environment.temperature", "cell.voltage=3", "environment.ph=acidic", "mode=random"] {
            let result = PartialSimulationConfig::default()
                .merge_with_cli(&simulate_args(&["-S", bad]));
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn unknown_fields_in_file_are_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "bad.toml", "[cell]\nvoltage = 3.0\n");
        let result = PartialSimulationConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PartialSimulationConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
