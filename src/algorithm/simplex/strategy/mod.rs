//! # Strategies
//!
//! Different strategies that can be plugged into the Simplex algorithm.
pub mod pivot_rule;
