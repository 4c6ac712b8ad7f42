//! # Pivot rules
//!
//! Strategies for choosing the variable that enters the basis.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of the variable to bring into the basis, together with its relative cost. `None`
    /// if no relative cost is negative, that is, if the tableau is optimal.
    fn select_primal_pivot_column<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)>;
}

/// Which pivot rule to use, as a plain value for configuration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum PivotRuleKind {
    /// See `SteepestDescentAlongVariable`.
    #[default]
    MostNegative,
    /// See `FirstProfitable`.
    FirstProfitable,
}

/// Simply pivot on the first column which has a negative relative cost.
///
/// This is the entering rule of Bland's anti cycling algorithm.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|(_, cost)| cost.is_strictly_negative())
            .map(|(column, cost)| (column, cost.clone()))
    }
}

/// Pivot on the column which has the most negative relative cost (Dantzig's rule).
///
/// When several columns share the most negative cost, the one with the lowest index is chosen.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        let mut smallest: Option<(usize, &F)> = None;
        for (j, cost) in (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|(_, cost)| cost.is_strictly_negative()) {
            match smallest {
                Some((_, existing_cost)) if cost >= existing_cost => {},
                _ => smallest = Some((j, cost)),
            }
        }

        smallest.map(|(j, cost)| (j, cost.clone()))
    }
}
