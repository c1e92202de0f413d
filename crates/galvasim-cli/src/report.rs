use galvasim::core::environment::{Catalyst, EnvironmentSettings, Solvent};
use galvasim::core::utils::format::format_quantity;
use galvasim::engine::config::SimulationParameters;
use galvasim::workflows::simulate::CellResult;

pub fn render_result(params: &SimulationParameters, result: &CellResult) -> String {
    let reactions = &result.half_reactions;
    let lines = [
        format!("Cell: {} | {}", params.anode, params.cathode),
        format!(
            "  Anode concentration:   {} M",
            format_quantity(params.anode_concentration)
        ),
        format!(
            "  Cathode concentration: {} M",
            format_quantity(params.cathode_concentration)
        ),
        format!("  Conditions: {}", describe_environment(&params.environment)),
        String::new(),
        format!(
            "Calculated Cell Potential: {} V",
            format_quantity(result.cell_potential)
        ),
        String::new(),
        format!("Anode Half-Reaction: {}", reactions.anode),
        format!("Cathode Half-Reaction: {}", reactions.cathode),
        format!("Overall Reaction: {}", reactions.overall),
        String::new(),
        result.summary.clone(),
        format!(
            "Moles of Anode Reactant: {}",
            format_quantity(result.moles_anode)
        ),
        format!(
            "Moles of Cathode Reactant: {}",
            format_quantity(result.moles_cathode)
        ),
    ];
    lines.join("\n")
}

pub fn describe_environment(env: &EnvironmentSettings) -> String {
    let catalyst = env.catalyst.map_or("no catalyst", |c| c.name());
    format!(
        "{} °C, {} atm, {}, {}, pH {}, ionic strength {} M",
        format_quantity(env.temperature),
        format_quantity(env.pressure),
        env.solvent,
        catalyst,
        format_quantity(env.ph),
        format_quantity(env.ionic_strength)
    )
}

pub fn render_materials(materials: &[(&str, f64)]) -> String {
    let solvents: Vec<String> = Solvent::KNOWN.iter().map(ToString::to_string).collect();
    let catalysts: Vec<&str> = Catalyst::ALL.iter().map(Catalyst::name).collect();

    let mut lines = vec!["Standard reduction potentials (V vs. SHE):".to_string()];
    lines.extend(
        materials
            .iter()
            .map(|(name, potential)| format!("  {name:<4} {potential:>+5.2}")),
    );
    lines.push(String::new());
    lines.push(format!("Solvents:  {}", solvents.join(", ")));
    lines.push(format!("Catalysts: None, {}", catalysts.join(", ")));
    lines.join("\n")
}
