//! # Workflows Module
//!
//! High-level entry points that tie the [`core`](crate::core) model and the
//! [`engine`](crate::engine) calculations together.
//!
//! - **Simulation Workflow** ([`simulate`]) - Resolves manual, automatic or mixed
//!   inputs into complete parameters and evaluates a galvanic cell end to end.

pub mod simulate;
