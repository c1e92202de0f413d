use crate::core::environment::EnvironmentSettings;
use crate::engine::cell::{self, HalfReactions};
use crate::engine::config::{SimulationParameters, SimulationParametersBuilder};
use crate::engine::error::EngineError;
use crate::engine::suggest::{
    ElectrodeRole, NOMINAL_CELL_POTENTIAL, suggest_optimal_concentration,
    suggest_optimal_electrodes, suggest_optimal_moles,
};
use rand::Rng;
use tracing::{debug, info, instrument};

/// How missing or unspecified cell inputs are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Every value comes from the caller.
    #[default]
    Manual,
    /// Every value is suggested; caller values are ignored.
    Auto,
    /// A coin flip per value decides whether it is suggested or taken from the caller.
    Mixed,
}

/// Cell values as supplied by a user, any of which may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellInputs {
    pub anode: Option<String>,
    pub cathode: Option<String>,
    pub anode_concentration: Option<f64>,
    pub cathode_concentration: Option<f64>,
    pub moles_reactant: Option<f64>,
}

impl CellInputs {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellResult {
    pub cell_potential: f64,
    pub half_reactions: HalfReactions,
    pub summary: String,
    pub moles_anode: f64,
    pub moles_cathode: f64,
}

/// Builds complete simulation parameters from possibly partial inputs.
///
/// In [`InputMode::Mixed`], a value the coin leaves to the caller is still
/// suggested when the caller did not provide it.
#[instrument(skip_all, fields(mode = ?mode))]
pub fn resolve_parameters(
    mode: InputMode,
    inputs: CellInputs,
    environment: EnvironmentSettings,
    rng: &mut impl Rng,
) -> Result<SimulationParameters, EngineError> {
    let builder = SimulationParametersBuilder::new().environment(environment);

    let builder = match mode {
        InputMode::Manual => {
            let mut builder = builder;
            if let Some(anode) = inputs.anode {
                builder = builder.anode(anode);
            }
            if let Some(cathode) = inputs.cathode {
                builder = builder.cathode(cathode);
            }
            if let Some(c) = inputs.anode_concentration {
                builder = builder.anode_concentration(c);
            }
            if let Some(c) = inputs.cathode_concentration {
                builder = builder.cathode_concentration(c);
            }
            if let Some(moles) = inputs.moles_reactant {
                builder = builder.moles_reactant(moles);
            }
            builder
        }
        InputMode::Auto => {
            if !inputs.is_empty() {
                debug!("Automatic mode ignores the supplied cell inputs: {:?}", inputs);
            }
            let (anode, cathode) = suggest_optimal_electrodes();
            builder
                .anode(anode)
                .cathode(cathode)
                .anode_concentration(suggest_optimal_concentration(ElectrodeRole::Anode, rng))
                .cathode_concentration(suggest_optimal_concentration(ElectrodeRole::Cathode, rng))
                .moles_reactant(suggest_optimal_moles(NOMINAL_CELL_POTENTIAL))
        }
        InputMode::Mixed => {
            let (suggested_anode, suggested_cathode) = suggest_optimal_electrodes();

            let anode = mixed_choice(rng, "anode", inputs.anode, |_| {
                suggested_anode.to_string()
            });
            let cathode = mixed_choice(rng, "cathode", inputs.cathode, |_| {
                suggested_cathode.to_string()
            });
            let anode_concentration =
                mixed_choice(rng, "anode concentration", inputs.anode_concentration, |rng| {
                    suggest_optimal_concentration(ElectrodeRole::Anode, rng)
                });
            let cathode_concentration = mixed_choice(
                rng,
                "cathode concentration",
                inputs.cathode_concentration,
                |rng| suggest_optimal_concentration(ElectrodeRole::Cathode, rng),
            );
            let moles_reactant = mixed_choice(rng, "moles of reactant", inputs.moles_reactant, |_| {
                suggest_optimal_moles(NOMINAL_CELL_POTENTIAL)
            });

            builder
                .anode(anode)
                .cathode(cathode)
                .anode_concentration(anode_concentration)
                .cathode_concentration(cathode_concentration)
                .moles_reactant(moles_reactant)
        }
    };

    Ok(builder.build()?)
}

fn mixed_choice<R, T, F>(rng: &mut R, field: &'static str, provided: Option<T>, suggest: F) -> T
where
    R: Rng,
    F: FnOnce(&mut R) -> T,
{
    let auto = rng.gen_bool(0.5);
    match provided {
        Some(value) if !auto => value,
        _ => {
            debug!(field, auto, "Using suggested value.");
            suggest(rng)
        }
    }
}

/// Evaluates one galvanic cell: potential, reaction text and stoichiometry.
#[instrument(skip_all, name = "simulation_workflow", fields(anode = %params.anode, cathode = %params.cathode))]
pub fn run(params: &SimulationParameters) -> Result<CellResult, EngineError> {
    let cell_potential = cell::calculate_cell_potential(params)?;
    info!("Cell potential: {} V", cell_potential);

    let half_reactions = cell::half_reactions(&params.anode, &params.cathode);
    let stoichiometry = cell::stoichiometry(params)?;
    let summary = cell::reaction_summary(
        &params.anode,
        &params.cathode,
        stoichiometry.moles_anode,
        stoichiometry.moles_cathode,
    );

    Ok(CellResult {
        cell_potential,
        half_reactions,
        summary,
        moles_anode: stoichiometry.moles_anode,
        moles_cathode: stoichiometry.moles_cathode,
    })
}
