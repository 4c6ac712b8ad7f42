//! # Traits
//!
//! The number types the tableau can be computed over. The hierarchy is "mathematically exact", but
//! the implementations aren't: floating point types only approximately satisfy the field axioms.
//! Rational types satisfy them exactly, as long as they don't overflow.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// The simplex algorithm is defined over the ordered fields. All methods containing algorithmic
/// logic should be defined to work over an ordered field.
///
/// Automatically implemented for all types satisfying the trait's bounds, such as `f64` and
/// `num_rational::Ratio<i64>`.
pub trait OrderedField:
    PartialEq +
    PartialOrd +
    Zero + // Additive identity
    One + // Multiplicative identity
    Neg<Output=Self> + // Additive inverse
    Add<Output=Self> +
    Sub<Output=Self> +
    Mul<Output=Self> +
    Div<Output=Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
{
    /// Whether this value is strictly smaller than the additive identity.
    fn is_strictly_negative(&self) -> bool {
        self < &Self::zero()
    }

    /// Whether this value is strictly larger than the additive identity.
    fn is_strictly_positive(&self) -> bool {
        self > &Self::zero()
    }
}

impl<T> OrderedField for T
where
    T: PartialEq + PartialOrd + Zero + One + Neg<Output=T> + Add<Output=T> + Sub<Output=T> +
        Mul<Output=T> + Div<Output=T> + Clone + Display + Debug,
{
}
