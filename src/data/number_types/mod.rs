//! # Number types
//!
//! Traits describing which number types the algorithms can be computed with.
pub mod traits;
