//! # Solver options
//!
//! Everything a caller can configure about a solve call.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;

/// Maximum number of pivots if nothing else is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Configuration of a solve call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Options {
    /// Maximum number of pivots before giving up with status `IterationLimit`.
    pub max_iterations: usize,
    /// Whether to record every intermediate tableau.
    pub record_trace: bool,
    /// Rule for choosing the entering variable.
    pub pivot_rule: PivotRuleKind,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            record_trace: false,
            pivot_rule: PivotRuleKind::default(),
        }
    }
}

impl Options {
    /// Set the maximum number of pivots.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Request (or stop requesting) a trace of all steps.
    #[must_use]
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Set the rule for choosing the entering variable.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }
}
