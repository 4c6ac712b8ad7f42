//! # Representation of solve results
//!
//! Once a linear program is solved, the outcome is collected in a single record. It is what a
//! report generator consumes: a status that selects the message to render, the solution values
//! if there are any, and optionally the trace of all intermediate tableaus.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::trace::Trace;
use crate::error::InvalidProblem;

/// How a solve call ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Status {
    /// A finite optimum was found.
    Optimal,
    /// The objective function can be improved indefinitely.
    Unbounded,
    /// The maximum number of pivots was reached before the algorithm terminated.
    IterationLimit,
    /// The problem was rejected before solving.
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "optimal",
            Status::Unbounded => "unbounded",
            Status::IterationLimit => "iteration_limit",
            Status::Error => "error",
        })
    }
}

/// Deep copy of the tableau and the basis at one moment during the algorithm.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot<F> {
    /// All `m + 1` rows of the tableau, the cost row last.
    pub tableau: Vec<Vec<F>>,
    /// For each constraint row, the index of the variable that is basic in that row.
    pub basis: Vec<usize>,
}

/// Everything that is known after a solve call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult<F> {
    /// How the solve call ended.
    pub status: Status,
    /// Values of the original variables, present for `Optimal` and `IterationLimit`.
    pub solution: Option<Vec<F>>,
    /// Objective function value in the sense of the original problem (so not negated for
    /// minimization problems), present for `Optimal` and `IterationLimit`.
    pub objective_value: Option<F>,
    /// Number of pivots performed.
    pub iterations: usize,
    /// Explanation for the `Unbounded` and `Error` statuses.
    pub message: Option<String>,
    /// The tableau and basis when the algorithm stopped. Absent for `Error`.
    pub final_state: Option<Snapshot<F>>,
    /// All steps taken, if a trace was requested.
    pub trace: Option<Trace<F>>,
}

impl<F> SolveResult<F> {
    /// Whether a finite optimum was found.
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }
}

/// Turn a rejected problem into a result record with status `Error`.
///
/// Useful when solving batches of problems, where each problem needs a record regardless of
/// whether it could be solved.
impl<F> From<InvalidProblem> for SolveResult<F> {
    fn from(error: InvalidProblem) -> Self {
        Self {
            status: Status::Error,
            solution: None,
            objective_value: None,
            iterations: 0,
            message: Some(error.to_string()),
            final_state: None,
            trace: None,
        }
    }
}
