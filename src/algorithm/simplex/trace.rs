//! # Solution traces
//!
//! The driver loop reports each state transition to an `Observer`. The `TraceRecorder` observer
//! copies the tableau at every transition, such that every intermediate tableau can be shown (and
//! checked) afterwards. The unit type `()` is the observer that ignores everything.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::solution::Snapshot;
use crate::data::number_types::traits::OrderedField;

/// The moment in the algorithm at which a step was recorded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum StepStatus {
    /// Before the first iteration.
    Initial,
    /// A pivot was chosen but not yet performed.
    PrePivot,
    /// Directly after a pivot.
    PostPivot,
    /// Terminated with a finite optimum.
    Optimal,
    /// Terminated because the objective can be improved indefinitely.
    Unbounded,
    /// Terminated because the maximum number of pivots was reached.
    IterationLimit,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepStatus::Initial => "initial",
            StepStatus::PrePivot => "pre_pivot",
            StepStatus::PostPivot => "post_pivot",
            StepStatus::Optimal => "optimal",
            StepStatus::Unbounded => "unbounded",
            StepStatus::IterationLimit => "iteration_limit",
        })
    }
}

/// A pivot that was chosen by the pivot rule and the ratio test.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PivotDecision<F> {
    /// Tableau column of the entering variable (column `0` being the right-hand side).
    pub entering_column: usize,
    /// Index of the entering variable, equal to `entering_column - 1`.
    pub entering_variable: usize,
    /// Constraint row in which the pivot happens.
    pub leaving_row: usize,
    /// Index of the variable that leaves the basis.
    pub leaving_variable: usize,
    /// Ratio of the right-hand side and the pivot element in the leaving row.
    pub min_ratio: F,
}

/// A single recorded state of the algorithm.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step<F> {
    /// Number of the iteration this step belongs to; `0` for the initial step.
    pub iteration: usize,
    /// When this step was recorded.
    pub status: StepStatus,
    /// The tableau and basis at the moment of recording.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub snapshot: Snapshot<F>,
    /// The chosen pivot, only for `PrePivot` steps.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pivot: Option<PivotDecision<F>>,
    /// Explanation, for `Unbounded` steps.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,
}

/// All steps of a solve, in order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Trace<F> {
    steps: Vec<Step<F>>,
}

impl<F> Trace<F> {
    /// All recorded steps, in order.
    pub fn steps(&self) -> &[Step<F>] {
        &self.steps
    }

    /// The sequence of statuses, useful for a quick overview.
    pub fn statuses(&self) -> Vec<StepStatus> {
        self.steps.iter().map(|step| step.status).collect()
    }

    /// The last recorded step.
    pub fn last(&self) -> Option<&Step<F>> {
        self.steps.last()
    }
}

impl<F> IntoIterator for Trace<F> {
    type Item = Step<F>;
    type IntoIter = std::vec::IntoIter<Step<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Receives the state transitions of the driver loop.
///
/// All methods do nothing by default.
pub trait Observer<F> {
    /// Before the first iteration.
    fn initial(&mut self, _tableau: &Tableau<F>) {}

    /// After a pivot was chosen, before it is performed.
    fn before_pivot(&mut self, _iteration: usize, _tableau: &Tableau<F>, _pivot: &PivotDecision<F>) {}

    /// Directly after a pivot.
    fn after_pivot(&mut self, _iteration: usize, _tableau: &Tableau<F>) {}

    /// When the algorithm stops.
    ///
    /// # Arguments
    ///
    /// * `iteration`: Number of pivots performed.
    /// * `status`: Why the algorithm stopped; one of `Optimal`, `Unbounded` or `IterationLimit`.
    /// * `message`: Explanation, if any.
    fn terminated(&mut self, _iteration: usize, _tableau: &Tableau<F>, _status: StepStatus, _message: Option<&str>) {}
}

impl<F> Observer<F> for () {}

/// Records a deep copy of the tableau at every state transition.
#[derive(Debug, Default)]
pub struct TraceRecorder<F> {
    steps: Vec<Step<F>>,
}

impl<F> TraceRecorder<F> {
    /// Create a recorder without any steps.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Stop recording and hand out the steps.
    pub fn into_trace(self) -> Trace<F> {
        Trace { steps: self.steps }
    }
}

impl<F: OrderedField> TraceRecorder<F> {
    fn record(
        &mut self,
        iteration: usize,
        status: StepStatus,
        tableau: &Tableau<F>,
        pivot: Option<PivotDecision<F>>,
        message: Option<String>,
    ) {
        self.steps.push(Step {
            iteration,
            status,
            snapshot: tableau.snapshot(),
            pivot,
            message,
        });
    }
}

impl<F: OrderedField> Observer<F> for TraceRecorder<F> {
    fn initial(&mut self, tableau: &Tableau<F>) {
        self.record(0, StepStatus::Initial, tableau, None, None);
    }

    fn before_pivot(&mut self, iteration: usize, tableau: &Tableau<F>, pivot: &PivotDecision<F>) {
        self.record(iteration, StepStatus::PrePivot, tableau, Some(pivot.clone()), None);
    }

    fn after_pivot(&mut self, iteration: usize, tableau: &Tableau<F>) {
        self.record(iteration, StepStatus::PostPivot, tableau, None, None);
    }

    fn terminated(&mut self, iteration: usize, tableau: &Tableau<F>, status: StepStatus, message: Option<&str>) {
        // Without any pivot, the initial step already shows the state at the iteration limit
        if status == StepStatus::IterationLimit && iteration == 0 {
            return;
        }

        self.record(iteration, status, tableau, None, message.map(str::to_string));
    }
}
