//! # Linear programs in canonical form
//!
//! A linear program in canonical form optimizes `c x` subject to `A x <= b` and `x >= 0`. When
//! `b >= 0`, the slack variables of the constraints form a feasible starting basis.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::number_types::traits::OrderedField;
use crate::error::InvalidProblem;

/// A linear program with only `<=` constraints and nonnegative variables.
///
/// Immutable once built, except for the right-hand side normalization which is explicitly
/// requested by the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearProgram<F> {
    /// Objective function coefficients, one per variable.
    c: Vec<F>,
    /// Constraint coefficients, one row per constraint.
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    a: Vec<Vec<F>>,
    /// Right-hand side, one value per constraint.
    b: Vec<F>,
    /// Whether the objective function should be maximized (or minimized).
    maximize: bool,
}

/// Record of a constraint that was multiplied by `-1` to make its right-hand side nonnegative.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintTransformation<F> {
    /// Index of the constraint (row of `A`).
    pub constraint_index: usize,
    /// The right-hand side before negation.
    pub original_b: F,
    /// The right-hand side after negation.
    pub transformed_b: F,
}

impl<F: OrderedField> LinearProgram<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `c`: Objective function coefficients, of length `n`.
    /// * `a`: Constraint coefficients, `m` rows of length `n` each.
    /// * `b`: Right-hand side, of length `m`. May still contain negative values; see
    /// `normalize_right_hand_side`.
    /// * `maximize`: Whether to maximize (`true`) or minimize (`false`) `c x`.
    ///
    /// # Errors
    ///
    /// When the dimensions of `c`, `a` and `b` don't match.
    pub fn new(c: Vec<F>, a: Vec<Vec<F>>, b: Vec<F>, maximize: bool) -> Result<Self, InvalidProblem> {
        check_dimensions(&c, &a, &b)?;

        Ok(Self { c, a, b, maximize })
    }

    /// Multiply every constraint with a negative right-hand side by `-1`.
    ///
    /// The solver requires `b >= 0`; this is the transformation a caller applies beforehand.
    ///
    /// # Return value
    ///
    /// A record for each negated constraint, in increasing constraint order. Empty if nothing
    /// changed.
    pub fn normalize_right_hand_side(&mut self) -> Vec<ConstraintTransformation<F>> {
        let mut transformations = Vec::new();

        for (i, (row, b)) in self.a.iter_mut().zip(self.b.iter_mut()).enumerate() {
            if b.is_strictly_negative() {
                let original_b = b.clone();
                *b = -b.clone();
                for coefficient in row.iter_mut() {
                    *coefficient = -coefficient.clone();
                }

                transformations.push(ConstraintTransformation {
                    constraint_index: i,
                    original_b,
                    transformed_b: b.clone(),
                });
            }
        }

        transformations
    }

    /// Value of the objective function `c x` for a given solution.
    pub fn objective_function_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.c.iter().zip(x)
            .fold(F::zero(), |total, (c, x)| total + c.clone() * x.clone())
    }

    /// Whether a solution satisfies all constraints and bounds, up to `tolerance`.
    pub fn is_feasible(&self, x: &[F], tolerance: &F) -> bool {
        debug_assert_eq!(x.len(), self.nr_variables());

        let nonnegative = x.iter().all(|value| value.clone() + tolerance.clone() >= F::zero());
        let satisfied = self.a.iter().zip(&self.b).all(|(row, b)| {
            let lhs = row.iter().zip(x)
                .fold(F::zero(), |total, (a, x)| total + a.clone() * x.clone());
            lhs <= b.clone() + tolerance.clone()
        });

        nonnegative && satisfied
    }
}

impl<F> LinearProgram<F> {
    /// Objective function coefficients.
    pub fn c(&self) -> &[F] {
        &self.c
    }

    /// Constraint coefficients, row by row.
    pub fn a(&self) -> &[Vec<F>] {
        &self.a
    }

    /// Right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Whether the objective function is maximized.
    pub fn maximize(&self) -> bool {
        self.maximize
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.c.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }
}

/// Verify that `a` has as many rows as `b` has values, and that each row is as long as `c`.
pub(crate) fn check_dimensions<F>(c: &[F], a: &[Vec<F>], b: &[F]) -> Result<(), InvalidProblem> {
    if a.len() != b.len() {
        return Err(InvalidProblem::ConstraintCount { rows: a.len(), right_hand_sides: b.len() });
    }

    match a.iter().enumerate().find(|(_, row)| row.len() != c.len()) {
        Some((row, coefficients)) => Err(InvalidProblem::RowLength {
            row,
            len: coefficients.len(),
            expected: c.len(),
        }),
        None => Ok(()),
    }
}
