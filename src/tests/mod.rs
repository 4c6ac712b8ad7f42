//! # Test problems that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn create_data()`: the `(c, A, b)` of a maximization problem
//! * `fn linear_program()`: the same data as a `LinearProgram`
//! * `fn initial_snapshot()`: the tableau and basis before the first pivot
//! * `fn first_pivot_snapshot()`: the tableau and basis after the first pivot
//! * `fn optimal_snapshot()`: the final tableau and basis
use num_traits::FromPrimitive;

use crate::data::number_types::traits::OrderedField;


/// Convert test data, given as a nested `Vec` of integers, to a field type.
pub fn to_field<F: OrderedField + FromPrimitive>(rows: Vec<Vec<i64>>) -> Vec<Vec<F>> {
    rows.into_iter().map(|row| row.into_iter().map(integer).collect()).collect()
}

/// Integer in a field.
pub fn integer<F: OrderedField + FromPrimitive>(value: i64) -> F {
    F::from_i64(value).unwrap()
}

/// Fraction in a field.
pub fn fraction<F: OrderedField + FromPrimitive>(numerator: i64, denominator: i64) -> F {
    integer::<F>(numerator) / integer(denominator)
}
