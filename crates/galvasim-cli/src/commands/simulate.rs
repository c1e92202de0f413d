use crate::cli::SimulateArgs;
use crate::config::PartialSimulationConfig;
use crate::error::Result;
use crate::report;
use galvasim::workflows::simulate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub fn run(args: SimulateArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialSimulationConfig::from_file(path)?,
        None => PartialSimulationConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let request = partial_config.merge_with_cli(&args)?;

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Seeding suggestions with {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let params =
        simulate::resolve_parameters(request.mode, request.inputs, request.environment, &mut rng)?;
    info!(
        "Resolved cell {} | {} ({:?} M / {:?} M, {:?} mol).",
        params.anode,
        params.cathode,
        params.anode_concentration,
        params.cathode_concentration,
        params.moles_reactant
    );

    let result = simulate::run(&params)?;
    println!("{}", report::render_result(&params, &result));
    Ok(())
}
