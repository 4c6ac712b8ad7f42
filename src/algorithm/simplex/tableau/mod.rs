//! # The Simplex tableau
//!
//! Contains the dense simplex tableau and the elementary operations which can be performed upon
//! it: the optimality test, the ratio test and the pivot.
//!
//! The tableau has `m + 1` rows and `1 + n + m` columns. Column `0` holds the right-hand side, the
//! next `n` columns the decision variables and the last `m` columns the slack variables. The last
//! row holds the relative costs. Variables are indexed from `0` through `n + m`, so variable `j`
//! lives in tableau column `j + 1`.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::canonical_form::check_dimensions;
use crate::data::linear_program::solution::Snapshot;
use crate::data::number_types::traits::OrderedField;
use crate::error::InvalidProblem;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// Owns all state that changes during a solve, so separate solves never share anything.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Matrix of size (m + 1) x (1 + n + m).
    matrix: Dense<F>,
    /// For each constraint row, the variable that is basic in it.
    basis: Vec<usize>,
    /// Number of decision variables `n`, not including slacks.
    nr_variables: usize,
}

impl<F: OrderedField> Tableau<F> {
    /// Create the initial tableau for `max c x` subject to `A x <= b`, `x >= 0`.
    ///
    /// All slack variables form the initial basis.
    ///
    /// # Arguments
    ///
    /// * `c`: Objective function coefficients, of length `n`. To be maximized.
    /// * `a`: Constraint coefficients, `m` rows of length `n`.
    /// * `b`: Right-hand side of length `m`, all values nonnegative.
    ///
    /// # Errors
    ///
    /// If the dimensions don't match or a value of `b` is negative.
    pub fn new(c: &[F], a: &[Vec<F>], b: &[F]) -> Result<Self, InvalidProblem> {
        check_dimensions(c, a, b)?;
        if let Some((row, value)) = b.iter().enumerate().find(|(_, value)| value.is_strictly_negative()) {
            return Err(InvalidProblem::NegativeRightHandSide { row, value: value.to_string() });
        }

        let (m, n) = (b.len(), c.len());
        let mut matrix = Dense::zeros(m + 1, 1 + n + m);
        for (i, (row, value)) in a.iter().zip(b).enumerate() {
            matrix[(i, 0)] = value.clone();
            for (j, coefficient) in row.iter().enumerate() {
                matrix[(i, 1 + j)] = coefficient.clone();
            }
            matrix[(i, 1 + n + i)] = F::one();
        }
        for (j, cost) in c.iter().enumerate() {
            matrix[(m, 1 + j)] = -cost.clone();
        }

        Ok(Self {
            matrix,
            basis: (n..n + m).collect(),
            nr_variables: n,
        })
    }

    /// Whether the current basic feasible solution is optimal.
    ///
    /// That is the case when no relative cost is negative.
    pub fn is_optimal(&self) -> bool {
        (0..self.nr_columns()).all(|j| !self.relative_cost(j).is_strictly_negative())
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the current constraint value and a
    /// strictly positive column value. Ties are broken by taking the lowest row index.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the variable that enters the basis, in range `0` until
    /// `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// The row index and the minimal ratio. If no value in the column is positive, the problem is
    /// unbounded and `None` is returned.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<(usize, F)> {
        debug_assert!(column < self.nr_columns());

        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.element(row, column);
            if xij.is_strictly_positive() {
                let ratio = self.constraint_value(row).clone() / xij.clone();
                match &min_values {
                    Some((_, min_ratio)) if &ratio >= min_ratio => {},
                    _ => min_values = Some((row, ratio)),
                }
            }
        }

        min_values
    }

    /// Brings a column into the basis by pivoting on (`pivot_row_index`, `pivot_column_index`).
    ///
    /// The pivot row is normalized and the pivot column is eliminated from all other rows,
    /// including the cost row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Variable entering the basis, not yet in the basis.
    /// * `pivot_row_index`: Row of the variable leaving the basis.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));
        debug_assert_eq!(self.matrix.nr_columns(), 1 + self.nr_columns());

        let column = 1 + pivot_column_index;
        let pivot = self.matrix[(pivot_row_index, column)].clone();
        debug_assert!(!pivot.is_zero(), "Pivot element can't be zero");

        self.matrix.divide_row(pivot_row_index, &pivot);
        for row in (0..self.matrix.nr_rows()).filter(|&row| row != pivot_row_index) {
            let factor = self.matrix[(row, column)].clone();
            if !factor.is_zero() {
                self.matrix.mul_sub_rows(pivot_row_index, row, &factor);
            }
        }

        self.basis[pivot_row_index] = pivot_column_index;
    }

    /// Relative cost of a variable.
    ///
    /// # Arguments
    ///
    /// * `j`: Variable index, in range `0` until `self.nr_columns()`.
    pub fn relative_cost(&self, j: usize) -> &F {
        debug_assert!(j < self.nr_columns());

        &self.matrix[(self.nr_rows(), 1 + j)]
    }

    /// Value of a variable's column in a constraint row, with respect to the current basis.
    pub fn element(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        &self.matrix[(i, 1 + j)]
    }

    /// Current right-hand side value of a constraint row.
    ///
    /// Equal to the value of the variable that is basic in that row.
    pub fn constraint_value(&self, i: usize) -> &F {
        debug_assert!(i < self.nr_rows());

        &self.matrix[(i, 0)]
    }

    /// Get the value of the decision variables in the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// A `Vec` of length `n`; non basic variables have value zero, slacks are not included.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut solution = vec![F::zero(); self.nr_variables];
        for (row, &variable) in self.basis.iter().enumerate() {
            if variable < self.nr_variables {
                solution[variable] = self.constraint_value(row).clone();
            }
        }

        solution
    }

    /// Get the value of the objective function `c x` for the current basic feasible solution.
    ///
    /// The cost row starts at `-c` and the pivots add multiples of the constraint rows to it, so
    /// the cost row's right-hand side value accumulates `c x` itself.
    pub fn objective_function_value(&self) -> F {
        self.matrix[(self.nr_rows(), 0)].clone()
    }

    /// Deep copy of the tableau and basis.
    pub fn snapshot(&self) -> Snapshot<F> {
        Snapshot {
            tableau: self.matrix.rows().cloned().collect(),
            basis: self.basis.clone(),
        }
    }
}

impl<F> Tableau<F> {
    /// Whether a variable is in the basis.
    pub fn is_in_basis(&self, j: usize) -> bool {
        debug_assert!(j < self.nr_columns());

        self.basis.contains(&j)
    }

    /// For each constraint row, the index of the variable that is basic in that row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Number of constraint rows `m` in the tableau, the cost row not included.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variables `n + m`, including the slacks.
    pub fn nr_columns(&self) -> usize {
        self.nr_variables + self.nr_rows()
    }

    /// Name of a variable, as it appears in messages and when printing.
    ///
    /// Decision variables are named `x1` through `xn`, slack variables `s1` through `sm`.
    pub fn variable_name(&self, j: usize) -> String {
        debug_assert!(j < self.nr_columns());

        if j < self.nr_variables {
            format!("x{}", j + 1)
        } else {
            format!("s{}", j - self.nr_variables + 1)
        }
    }
}

/// Check whether the tableau currently has a valid basis.
///
/// Each basis column should be a unit vector on the constraint rows and have relative cost zero.
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<F: OrderedField>(tableau: &Tableau<F>) -> bool {
    let m = tableau.nr_rows();
    let unique = tableau.basis.iter().all_unique();

    let unit_columns = tableau.basis.iter().enumerate().all(|(row, &j)| {
        (0..m).all(|i| {
            let expected = if i == row { F::one() } else { F::zero() };
            tableau.element(i, j) == &expected
        }) && tableau.relative_cost(j).is_zero()
    });

    unique && unit_columns
}

impl<F: OrderedField> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let header = std::iter::once("basis".to_string())
            .chain(std::iter::once("b".to_string()))
            .chain((0..self.nr_columns()).map(|j| self.variable_name(j)))
            .collect::<Vec<_>>();
        let rows = (0..=self.nr_rows())
            .map(|i| {
                let label = if i < self.nr_rows() {
                    self.variable_name(self.basis[i])
                } else {
                    "cost".to_string()
                };
                std::iter::once(label)
                    .chain(self.matrix.row(i).iter().map(ToString::to_string))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let widths = (0..header.len())
            .map(|j| {
                rows.iter().map(|row| row[j].len())
                    .chain(std::iter::once(header[j].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();
        let format_line = |cells: &[String]| {
            cells.iter().zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .join(" | ")
        };

        writeln!(f, "{}", format_line(&header))?;
        let separator = "-".repeat(widths.iter().sum::<usize>() + 3 * (widths.len() - 1));
        writeln!(f, "{separator}")?;
        for (i, row) in rows.iter().enumerate() {
            if i == self.nr_rows() {
                writeln!(f, "{separator}")?;
            }
            writeln!(f, "{}", format_line(row))?;
        }

        Ok(())
    }
}
