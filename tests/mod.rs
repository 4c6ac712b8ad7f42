//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod scenarios;
#[cfg(feature = "serde")]
mod serialization;
