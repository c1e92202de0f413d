use crate::utils::parser::parse_scientific_notation;
use clap::{Args, Parser, Subcommand, ValueEnum};
use galvasim::workflows::simulate::InputMode;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "GalvaSim CLI - Galvanic cell simulator: environment-adjusted electrode potentials, Nernst cell potential and reaction stoichiometry.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a galvanic cell and print its potential, reactions and stoichiometry.
    Simulate(SimulateArgs),
    /// List the electrode materials and their standard reduction potentials.
    Materials,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// You provide every value
    Manual,
    /// Optimal values are suggested for everything
    Auto,
    /// Each value is randomly either taken from your input or suggested
    Mixed,
}

impl From<ModeArg> for InputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Manual => InputMode::Manual,
            ModeArg::Auto => InputMode::Auto,
            ModeArg::Mixed => InputMode::Mixed,
        }
    }
}

/// Arguments for the `simulate` subcommand.
///
/// Numeric values accept plain decimals and scientific notation (1.5e-3 or 1.5x10^-3).
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Path to a simulation configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How missing values are filled in. Defaults to `manual`.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    // --- Cell ---
    /// Anode (oxidation) electrode material, e.g. 'Zn'.
    #[arg(long, value_name = "MATERIAL")]
    pub anode: Option<String>,

    /// Cathode (reduction) electrode material, e.g. 'Cu'.
    #[arg(long, value_name = "MATERIAL")]
    pub cathode: Option<String>,

    /// Concentration of the anode compartment (M).
    #[arg(long, value_name = "MOLAR", value_parser = parse_scientific_notation)]
    pub anode_concentration: Option<f64>,

    /// Concentration of the cathode compartment (M).
    #[arg(long, value_name = "MOLAR", value_parser = parse_scientific_notation)]
    pub cathode_concentration: Option<f64>,

    /// Moles of anode reactant consumed.
    #[arg(short = 'n', long = "moles", value_name = "MOL", value_parser = parse_scientific_notation)]
    pub moles_reactant: Option<f64>,

    // --- Environment ---
    /// Temperature in °C [default: 25].
    #[arg(short = 't', long, value_name = "CELSIUS", allow_negative_numbers = true, value_parser = parse_scientific_notation)]
    pub temperature: Option<f64>,

    /// Pressure in atm [default: 1.0].
    #[arg(short = 'p', long, value_name = "ATM", value_parser = parse_scientific_notation)]
    pub pressure: Option<f64>,

    /// Solvent: Water, Methanol, Ethanol, DMSO or Acetonitrile [default: Water].
    #[arg(long, value_name = "NAME")]
    pub solvent: Option<String>,

    /// Catalyst: None, Platinum, Palladium or Nickel [default: None].
    #[arg(long, value_name = "NAME")]
    pub catalyst: Option<String>,

    /// pH of the electrolyte [default: 7.0].
    #[arg(long, value_name = "PH", value_parser = parse_scientific_notation)]
    pub ph: Option<f64>,

    /// Ionic strength in M [default: 0.0].
    #[arg(long, value_name = "MOLAR", value_parser = parse_scientific_notation)]
    pub ionic_strength: Option<f64>,

    /// Seed for the random suggestions of `auto` and `mixed` modes.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S environment.temperature=40
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
