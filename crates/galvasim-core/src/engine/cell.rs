use super::config::SimulationParameters;
use super::error::{EngineError, ensure_positive};
use crate::core::environment::EnvironmentSettings;
use crate::core::potentials;
use crate::core::utils::format::format_quantity;
use crate::core::utils::rounding::round_to;
use tracing::{debug, instrument};

pub const GAS_CONSTANT: f64 = 8.314; // J/(mol·K)
pub const FARADAY_CONSTANT: f64 = 96485.0; // C/mol

/// Electrons transferred per formula unit. Fixed for every material pair.
pub const ELECTRONS_TRANSFERRED: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfReactions {
    pub anode: String,
    pub cathode: String,
    pub overall: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stoichiometry {
    pub moles_anode: f64,
    pub moles_cathode: f64,
}

pub fn lookup_potential(material: &str) -> Result<f64, EngineError> {
    potentials::standard_potential(material).ok_or_else(|| EngineError::UnknownMaterial {
        material: material.to_string(),
    })
}

/// Standard potential of `material` adjusted for `environment`.
pub fn half_cell_potential(
    material: &str,
    environment: &EnvironmentSettings,
) -> Result<f64, EngineError> {
    let standard = lookup_potential(material)?;
    Ok(environment.modify_potential(standard)?)
}

/// `RT/nF` in volts at the environment's absolute temperature.
pub fn thermal_voltage(environment: &EnvironmentSettings) -> f64 {
    environment.absolute_temperature() * GAS_CONSTANT / (ELECTRONS_TRANSFERRED * FARADAY_CONSTANT)
}

/// Computes the cell potential (V, three decimals) with the Nernst relation
///
/// ```text
/// E = (E'cathode − E'anode) − (RT/nF) · ln(c_anode / c_cathode)
/// ```
///
/// where both half-cell potentials are adjusted for the environment independently
/// before they are combined.
#[instrument(level = "debug", skip_all, fields(anode = %params.anode, cathode = %params.cathode))]
pub fn calculate_cell_potential(params: &SimulationParameters) -> Result<f64, EngineError> {
    let environment = &params.environment;

    let e_anode = half_cell_potential(&params.anode, environment)?;
    let e_cathode = half_cell_potential(&params.cathode, environment)?;
    let standard_cell_potential = e_cathode - e_anode;

    let anode_concentration = ensure_positive("anode concentration", params.anode_concentration)?;
    let cathode_concentration =
        ensure_positive("cathode concentration", params.cathode_concentration)?;
    let reaction_quotient = anode_concentration / cathode_concentration;

    let cell_potential =
        standard_cell_potential - thermal_voltage(environment) * reaction_quotient.ln();

    debug!(
        e_anode,
        e_cathode,
        standard_cell_potential,
        reaction_quotient,
        cell_potential,
        "Evaluated Nernst relation."
    );

    Ok(round_to(cell_potential, 3))
}

/// Renders the two half-reactions and the overall reaction. Coefficients are the
/// symbolic charges `n` and `m`; no balancing is attempted.
pub fn half_reactions(anode: &str, cathode: &str) -> HalfReactions {
    HalfReactions {
        anode: format!("{anode}ⁿ⁺ + n e⁻ ⇌ {anode}"),
        cathode: format!("{cathode}ᵐ⁺ + m e⁻ ⇌ {cathode}"),
        overall: format!("m {anode} + n {cathode}ᵐ⁺ ⇌ n {cathode} + m {anode}ⁿ⁺"),
    }
}

pub fn reaction_summary(anode: &str, cathode: &str, moles_anode: f64, moles_cathode: f64) -> String {
    format!(
        "The overall reaction suggests that {} moles of {anode} are oxidized and {} moles of \
         {cathode} ions are reduced, forming {cathode} metal and {anode} ions.",
        format_quantity(moles_anode),
        format_quantity(moles_cathode),
    )
}

/// Moles consumed at each electrode. The reactant quantity is taken as moles of
/// anode material and scaled by the concentration ratio for the cathode side.
pub fn stoichiometry(params: &SimulationParameters) -> Result<Stoichiometry, EngineError> {
    let moles_anode = ensure_positive("moles of reactant", params.moles_reactant)?;
    let anode_concentration = ensure_positive("anode concentration", params.anode_concentration)?;
    let cathode_concentration =
        ensure_positive("cathode concentration", params.cathode_concentration)?;

    Ok(Stoichiometry {
        moles_anode,
        moles_cathode: moles_anode * anode_concentration / cathode_concentration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::environment::{Catalyst, Solvent};
    use crate::engine::config::SimulationParametersBuilder;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn params(anode: &str, cathode: &str, c_anode: f64, c_cathode: f64) -> SimulationParameters {
        SimulationParametersBuilder::new()
            .anode(anode)
            .cathode(cathode)
            .anode_concentration(c_anode)
            .cathode_concentration(c_cathode)
            .moles_reactant(0.1)
            .build()
            .unwrap()
    }

    #[test]
    fn daniell_cell_at_standard_conditions_is_1_1_volts() {
        let potential = calculate_cell_potential(&params("Zn", "Cu", 1.0, 1.0)).unwrap();
        assert_eq!(potential, 1.1);
    }

    #[test]
    fn identical_electrodes_give_zero_potential() {
        for material in ["Li", "Zn", "H2", "Au"] {
            let potential = calculate_cell_potential(&params(material, material, 1.0, 1.0)).unwrap();
            assert_eq!(potential, 0.0);
        }
    }

    #[test]
    fn equal_concentrations_remove_the_nernst_term() {
        let standard = calculate_cell_potential(&params("Mg", "Ag", 1.0, 1.0)).unwrap();
        let diluted = calculate_cell_potential(&params("Mg", "Ag", 0.01, 0.01)).unwrap();
        assert_eq!(standard, 3.17);
        assert_eq!(diluted, standard);
    }

    #[test]
    fn concentration_ratio_shifts_potential_by_nernst_term() {
        // RT/2F at 298.15 K = 0.012846; ln(10) * 0.012846 = 0.029579
        let potential = calculate_cell_potential(&params("Zn", "Cu", 1.0, 0.1)).unwrap();
        assert_eq!(potential, 1.07);

        let potential = calculate_cell_potential(&params("Zn", "Cu", 0.1, 1.0)).unwrap();
        assert_eq!(potential, 1.13);
    }

    #[test]
    fn thermal_voltage_at_standard_temperature() {
        let rt_nf = thermal_voltage(&EnvironmentSettings::default());
        assert!(f64_approx_equal(rt_nf, 298.15 * 8.314 / (2.0 * 96485.0)));
        assert!((rt_nf - 0.012846).abs() < 1e-6);
    }

    #[test]
    fn environment_adjusts_each_half_cell_before_combination() {
        let mut p = params("Zn", "Cu", 1.0, 1.0);
        p.environment = EnvironmentSettings {
            catalyst: Some(Catalyst::Platinum),
            ph: 3.0,
            pressure: 2.0,
            ..Default::default()
        };
        // Additive shifts cancel between the two half-cells.
        assert_eq!(calculate_cell_potential(&p).unwrap(), 1.1);

        p.environment = EnvironmentSettings {
            solvent: Solvent::Dmso,
            ..Default::default()
        };
        // 0.374 - (-0.836)
        assert_eq!(calculate_cell_potential(&p).unwrap(), 1.21);
    }

    #[test]
    fn unknown_materials_are_reported_by_name() {
        let err = calculate_cell_potential(&params("Unobtainium", "Cu", 1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownMaterial {
                material: "Unobtainium".to_string()
            }
        );

        let err = calculate_cell_potential(&params("Zn", "cu", 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, EngineError::UnknownMaterial { material } if material == "cu"));
    }

    #[test]
    fn non_positive_concentrations_are_rejected() {
        let err = calculate_cell_potential(&params("Zn", "Cu", 0.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidMagnitude {
                quantity: "anode concentration",
                value: 0.0
            }
        );
        let err = calculate_cell_potential(&params("Zn", "Cu", 1.0, -0.5)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidMagnitude {
                quantity: "cathode concentration",
                ..
            }
        ));
    }

    #[test]
    fn invalid_pressure_surfaces_as_invalid_magnitude() {
        let mut p = params("Zn", "Cu", 1.0, 1.0);
        p.environment.pressure = 0.0;
        assert_eq!(
            calculate_cell_potential(&p),
            Err(EngineError::InvalidMagnitude {
                quantity: "pressure",
                value: 0.0
            })
        );
    }

    #[test]
    fn half_reactions_follow_fixed_templates() {
        let reactions = half_reactions("Zn", "Cu");
        assert_eq!(reactions.anode, "Znⁿ⁺ + n e⁻ ⇌ Zn");
        assert_eq!(reactions.cathode, "Cuᵐ⁺ + m e⁻ ⇌ Cu");
        assert_eq!(reactions.overall, "m Zn + n Cuᵐ⁺ ⇌ n Cu + m Znⁿ⁺");
    }

    #[test]
    fn reaction_summary_substitutes_values_verbatim() {
        assert_eq!(
            reaction_summary("Zn", "Cu", 0.1, 0.2),
            "The overall reaction suggests that 0.1 moles of Zn are oxidized and 0.2 moles of \
             Cu ions are reduced, forming Cu metal and Zn ions."
        );
    }

    #[test]
    fn reaction_summary_keeps_fractional_part_on_whole_numbers() {
        let summary = reaction_summary("Li", "Au", 1.0, 2.0);
        assert!(summary.contains("that 1.0 moles of Li"));
        assert!(summary.contains("and 2.0 moles of Au ions"));
    }

    #[test]
    fn reaction_summary_writes_exponents_with_sign_and_two_digits() {
        assert_eq!(
            reaction_summary("Zn", "Cu", 5e-5, 1.5e16),
            "The overall reaction suggests that 5e-05 moles of Zn are oxidized and 1.5e+16 moles \
             of Cu ions are reduced, forming Cu metal and Zn ions."
        );
    }

    #[test]
    fn stoichiometry_scales_cathode_moles_by_concentration_ratio() {
        let mut p = params("Zn", "Cu", 1.0, 0.5);
        p.moles_reactant = 0.1;
        let s = stoichiometry(&p).unwrap();
        assert_eq!(s.moles_anode, 0.1);
        assert!(f64_approx_equal(s.moles_cathode, 0.2));
    }

    #[test]
    fn stoichiometry_rejects_non_positive_reactant() {
        let mut p = params("Zn", "Cu", 1.0, 1.0);
        p.moles_reactant = 0.0;
        assert!(matches!(
            stoichiometry(&p),
            Err(EngineError::InvalidMagnitude {
                quantity: "moles of reactant",
                ..
            })
        ));
    }
}
