//! # A tableau Simplex solver
//!
//! Linear programs of the form
//!
//! ```text
//! maximize (or minimize) c x
//! subject to             A x <= b
//!                          x >= 0
//! ```
//!
//! with a nonnegative right-hand side `b` are solved using the textbook Simplex Method on a dense
//! tableau. Every intermediate tableau can be recorded, such that the steps of the algorithm can be
//! shown afterwards.
//!
//! ```
//! use relp_tableau::{solve, LinearProgram, Options, Status};
//!
//! let problem = LinearProgram::new(
//!     vec![3f64, 4f64],
//!     vec![vec![1f64, 2f64], vec![3f64, 2f64]],
//!     vec![8f64, 12f64],
//!     true,
//! ).unwrap();
//! let result = solve(&problem, &Options::default().with_trace(true)).unwrap();
//!
//! assert_eq!(result.status, Status::Optimal);
//! assert_eq!(result.solution, Some(vec![2f64, 3f64]));
//! assert_eq!(result.objective_value, Some(18f64));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use crate::algorithm::simplex::{solve, solve_lp};
pub use crate::algorithm::simplex::options::Options;
pub use crate::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;
pub use crate::algorithm::simplex::trace::{Step, StepStatus, Trace};
pub use crate::data::linear_program::canonical_form::{ConstraintTransformation, LinearProgram};
pub use crate::data::linear_program::solution::{Snapshot, SolveResult, Status};
pub use crate::error::InvalidProblem;

#[cfg(test)]
mod tests;
