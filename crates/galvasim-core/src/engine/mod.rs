//! # Engine Module
//!
//! The electrochemical calculation engine. It combines two environment-adjusted
//! half-cell potentials into a cell potential with a temperature-corrected Nernst
//! relation, renders the half-reactions, and derives reaction stoichiometry from the
//! compartment concentrations and the supplied reactant quantity.
//!
//! - **Cell Calculations** ([`cell`]) - Cell potential, reaction text and stoichiometry
//! - **Parameters** ([`config`]) - The validated input of one cell evaluation
//! - **Suggestions** ([`suggest`]) - Advisory values for automatic configuration
//! - **Error Handling** ([`error`]) - Engine-level error taxonomy
//!
//! Every function here is pure apart from the suggestion helpers, which draw from a
//! caller-supplied random number generator.

pub mod cell;
pub mod config;
pub mod error;
pub mod suggest;
