//! # GalvaSim Core Library
//!
//! A calculation engine for galvanic electrochemical cells. Given two electrode
//! materials, their compartment concentrations, a reactant quantity and a set of
//! environmental conditions, it computes the cell potential, the governing
//! half-reactions and the stoichiometric extent of reaction.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** The immutable standard reduction potential table,
//!   the environment model that adjusts standard potentials for non-standard
//!   conditions, and small numeric utilities. Everything here is stateless.
//!
//! - **[`engine`]: The Logic Core.** The Nernst cell potential, reaction text
//!   generation, stoichiometry, simulation parameters and the advisory suggestion
//!   helpers used by automatic configuration.
//!
//! - **[`workflows`]: The Public API.** Resolves partially specified inputs into
//!   complete parameters and evaluates a cell end to end, producing a
//!   [`workflows::simulate::CellResult`].

pub mod core;
pub mod engine;
pub mod workflows;
