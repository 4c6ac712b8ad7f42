//! # Representing linear programs
//!
//! The input of the solver, a linear program in canonical form, and the record describing the
//! outcome of solving it.
pub mod canonical_form;
pub mod solution;
