//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the tableau Simplex method. The
//! algorithm is the textbook primal Simplex method on a dense tableau, starting from the basis of
//! all slack variables. That basis is feasible because the right-hand side is nonnegative, so no
//! first phase is needed.
use log::{debug, info, trace};

use crate::algorithm::simplex::options::Options;
use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, PivotRule, PivotRuleKind, SteepestDescentAlongVariable};
use crate::algorithm::simplex::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::simplex::trace::{Observer, PivotDecision, StepStatus, TraceRecorder};
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::linear_program::solution::{SolveResult, Status};
use crate::data::number_types::traits::OrderedField;
use crate::error::InvalidProblem;

pub mod options;
pub mod strategy;
pub mod tableau;
pub mod trace;

/// How the primal Simplex loop ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OptimizationResult {
    /// No relative cost is negative.
    FiniteOptimum,
    /// The variable with this index can increase indefinitely while improving the objective.
    Unbounded {
        /// Index of the variable that was about to enter the basis.
        column: usize,
    },
    /// The maximum number of pivots was performed.
    IterationLimit,
}

impl OptimizationResult {
    /// The status reported to the caller.
    pub fn status(&self) -> Status {
        match self {
            OptimizationResult::FiniteOptimum => Status::Optimal,
            OptimizationResult::Unbounded { .. } => Status::Unbounded,
            OptimizationResult::IterationLimit => Status::IterationLimit,
        }
    }

    fn step_status(&self) -> StepStatus {
        match self {
            OptimizationResult::FiniteOptimum => StepStatus::Optimal,
            OptimizationResult::Unbounded { .. } => StepStatus::Unbounded,
            OptimizationResult::IterationLimit => StepStatus::IterationLimit,
        }
    }

    /// Explanation for the caller, if the result needs one.
    pub fn message<F>(&self, tableau: &Tableau<F>) -> Option<String> {
        match *self {
            OptimizationResult::Unbounded { column } => Some(format!(
                "Problem is unbounded: {} (tableau column {}) can increase without bound",
                tableau.variable_name(column), column + 1,
            )),
            _ => None,
        }
    }
}

/// Solve a linear program.
///
/// A minimization problem is solved by maximizing the negated objective function; the reported
/// objective value is in terms of the original objective function.
///
/// # Arguments
///
/// * `problem`: Linear program with a nonnegative right-hand side.
/// * `options`: Iteration limit, pivot rule and whether to record a trace.
///
/// # Return value
///
/// The outcome. Unboundedness and reaching the iteration limit are reported through its status.
///
/// # Errors
///
/// When the problem has a negative right-hand side value or inconsistent dimensions.
pub fn solve<F: OrderedField>(
    problem: &LinearProgram<F>,
    options: &Options,
) -> Result<SolveResult<F>, InvalidProblem> {
    let c = if problem.maximize() {
        problem.c().to_vec()
    } else {
        problem.c().iter().map(|value| -value.clone()).collect()
    };
    let mut tableau = Tableau::new(&c, problem.a(), problem.b())?;
    debug!(
        "Solving a problem with {} variables and {} constraints",
        problem.nr_variables(), problem.nr_constraints(),
    );

    let (result, iterations, trace) = if options.record_trace {
        let mut recorder = TraceRecorder::new();
        let (result, iterations) = primal_with_rule(&mut tableau, options, &mut recorder);
        (result, iterations, Some(recorder.into_trace()))
    } else {
        let (result, iterations) = primal_with_rule(&mut tableau, options, &mut ());
        (result, iterations, None)
    };

    let status = result.status();
    let (solution, objective_value) = match result {
        OptimizationResult::Unbounded { .. } => (None, None),
        OptimizationResult::FiniteOptimum | OptimizationResult::IterationLimit => {
            let value = tableau.objective_function_value();
            let value = if problem.maximize() { value } else { -value };
            (Some(tableau.current_bfs()), Some(value))
        },
    };
    info!("Terminated with status {} after {} iterations", status, iterations);

    Ok(SolveResult {
        status,
        solution,
        objective_value,
        iterations,
        message: result.message(&tableau),
        final_state: Some(tableau.snapshot()),
        trace,
    })
}

/// Solve with the default options.
///
/// # Arguments
///
/// * `c`: Objective function coefficients.
/// * `a`: Constraint coefficients, one row per constraint.
/// * `b`: Right-hand side, nonnegative.
/// * `maximize`: Whether to maximize or minimize `c x`.
///
/// # Errors
///
/// See `solve`.
pub fn solve_lp<F: OrderedField>(
    c: Vec<F>,
    a: Vec<Vec<F>>,
    b: Vec<F>,
    maximize: bool,
) -> Result<SolveResult<F>, InvalidProblem> {
    let problem = LinearProgram::new(c, a, b, maximize)?;
    solve(&problem, &Options::default())
}

fn primal_with_rule<F, O>(
    tableau: &mut Tableau<F>,
    options: &Options,
    observer: &mut O,
) -> (OptimizationResult, usize)
where
    F: OrderedField,
    O: Observer<F>,
{
    match options.pivot_rule {
        PivotRuleKind::MostNegative => primal::<_, SteepestDescentAlongVariable, _>(
            tableau, options.max_iterations, observer,
        ),
        PivotRuleKind::FirstProfitable => primal::<_, FirstProfitable, _>(
            tableau, options.max_iterations, observer,
        ),
    }
}

/// Increases the objective value of the basic feasible solution up to the maximum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible solution state. Is pivoted in place.
/// * `max_iterations`: Maximum number of pivots.
/// * `observer`: Is told about every state transition.
///
/// # Return value
///
/// How the algorithm ended, and the number of pivots performed.
pub fn primal<F, PR, O>(
    tableau: &mut Tableau<F>,
    max_iterations: usize,
    observer: &mut O,
) -> (OptimizationResult, usize)
where
    F: OrderedField,
    PR: PivotRule,
    O: Observer<F>,
{
    let mut rule = PR::new();
    let mut iterations = 0;
    observer.initial(tableau);
    trace!("Initial tableau:\n{}", tableau);

    let result = loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        match rule.select_primal_pivot_column(tableau) {
            None => {
                debug_assert!(tableau.is_optimal());
                break OptimizationResult::FiniteOptimum;
            },
            Some(_) if iterations >= max_iterations => break OptimizationResult::IterationLimit,
            Some((column_index, cost)) => match tableau.select_primal_pivot_row(column_index) {
                Some((row_index, min_ratio)) => {
                    iterations += 1;
                    let pivot = PivotDecision {
                        entering_column: column_index + 1,
                        entering_variable: column_index,
                        leaving_row: row_index,
                        leaving_variable: tableau.basis()[row_index],
                        min_ratio,
                    };
                    debug!(
                        "Iteration {}: {} (cost {}) enters, {} leaves from row {}, ratio {}",
                        iterations,
                        tableau.variable_name(pivot.entering_variable), cost,
                        tableau.variable_name(pivot.leaving_variable), row_index,
                        pivot.min_ratio,
                    );

                    observer.before_pivot(iterations, tableau, &pivot);
                    tableau.bring_into_basis(column_index, row_index);
                    observer.after_pivot(iterations, tableau);
                    trace!("Tableau after iteration {}:\n{}", iterations, tableau);
                },
                None => break OptimizationResult::Unbounded { column: column_index },
            },
        }
    };

    let message = result.message(tableau);
    observer.terminated(iterations, tableau, result.step_status(), message.as_deref());

    (result, iterations)
}
