//! # Linear algebra primitives
//!
//! The dense matrix that backs the Simplex tableau.
pub mod matrix;
