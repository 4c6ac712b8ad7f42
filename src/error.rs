//! # Errors
//!
//! Problems that are rejected before a tableau is built. Unboundedness and hitting the iteration
//! limit are not errors: they are regular outcomes reported through the solve result.
use thiserror::Error;

/// A linear program that can't be put into an all-slack initial tableau.
///
/// Recoverable by the caller: fix the input and solve again.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InvalidProblem {
    /// The constraint matrix and the right-hand side don't have the same number of rows.
    #[error("the constraint matrix has {rows} rows, but {right_hand_sides} right-hand side values were given")]
    ConstraintCount {
        /// Number of rows of the constraint matrix.
        rows: usize,
        /// Length of the right-hand side.
        right_hand_sides: usize,
    },
    /// A row of the constraint matrix has a different length than the objective function.
    #[error("constraint {row} has {len} coefficients, but the objective function has {expected}")]
    RowLength {
        /// Index of the offending constraint.
        row: usize,
        /// Number of coefficients in that constraint.
        len: usize,
        /// Number of objective function coefficients.
        expected: usize,
    },
    /// A right-hand side value is negative, such that the slack basis is not feasible.
    ///
    /// The row should be negated (together with its right-hand side) before solving, see
    /// `LinearProgram::normalize_right_hand_side`.
    #[error("the right-hand side of constraint {row} is negative ({value}), negate the constraint before solving")]
    NegativeRightHandSide {
        /// Index of the offending constraint.
        row: usize,
        /// The value, as displayed.
        ///
        /// Stored as text so that the error type doesn't depend on the number type of the problem.
        value: String,
    },
}
