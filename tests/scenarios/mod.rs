use approx::assert_relative_eq;

use relp_tableau::{
    ConstraintTransformation, InvalidProblem, LinearProgram, Options, SolveResult, Status, StepStatus,
    solve, solve_lp,
};

#[test]
fn optimal() {
    let result = solve_lp(
        vec![3f64, 4f64],
        vec![vec![1f64, 2f64], vec![3f64, 2f64]],
        vec![8f64, 12f64],
        true,
    ).unwrap();

    assert_eq!(result.status, Status::Optimal);
    assert!(result.iterations >= 1);
    let solution = result.solution.unwrap();
    assert_relative_eq!(solution[0], 2f64);
    assert_relative_eq!(solution[1], 3f64);
    assert_relative_eq!(result.objective_value.unwrap(), 18f64);
    assert!(result.message.is_none());
    assert!(result.trace.is_none());
}

#[test]
fn unbounded() {
    let result = solve_lp(vec![1f64, 1f64], vec![vec![-1f64, 1f64]], vec![1f64], true).unwrap();

    assert_eq!(result.status, Status::Unbounded);
    assert!(result.solution.is_none());
    assert!(result.objective_value.is_none());
    assert!(result.message.unwrap().contains("unbounded"));
    assert!(result.final_state.is_some());
}

#[test]
fn no_iterations_allowed() {
    let problem = LinearProgram::new(
        vec![3f64, 4f64],
        vec![vec![1f64, 2f64], vec![3f64, 2f64]],
        vec![8f64, 12f64],
        true,
    ).unwrap();
    let options = Options::default().with_max_iterations(0).with_trace(true);
    let result = solve(&problem, &options).unwrap();

    assert_eq!(result.status, Status::IterationLimit);
    assert_eq!(result.iterations, 0);
    assert_eq!(result.solution, Some(vec![0f64, 0f64]));
    assert_eq!(result.objective_value, Some(0f64));
    assert_eq!(result.trace.unwrap().statuses(), vec![StepStatus::Initial]);
}

#[test]
fn trace_overview() {
    let problem = LinearProgram::new(
        vec![3f64, 4f64],
        vec![vec![1f64, 2f64], vec![3f64, 2f64]],
        vec![8f64, 12f64],
        true,
    ).unwrap();
    let result = solve(&problem, &Options::default().with_trace(true)).unwrap();
    let trace = result.trace.unwrap();

    assert_eq!(trace.statuses(), vec![
        StepStatus::Initial,
        StepStatus::PrePivot, StepStatus::PostPivot,
        StepStatus::PrePivot, StepStatus::PostPivot,
        StepStatus::Optimal,
    ]);
    let first = trace.steps()[1].pivot.as_ref().unwrap();
    assert_eq!((first.entering_column, first.leaving_row), (2, 0));
    assert_relative_eq!(first.min_ratio, 4f64);
    let second = trace.steps()[3].pivot.as_ref().unwrap();
    assert_eq!((second.entering_column, second.leaving_row), (1, 1));
    assert_relative_eq!(second.min_ratio, 2f64);
    assert_eq!(trace.last().unwrap().snapshot, result.final_state.unwrap());
}

#[test]
fn minimize() {
    let result = solve_lp(
        vec![-3f64, -4f64],
        vec![vec![1f64, 2f64], vec![3f64, 2f64]],
        vec![8f64, 12f64],
        false,
    ).unwrap();

    assert_eq!(result.status, Status::Optimal);
    assert_eq!(result.solution, Some(vec![2f64, 3f64]));
    assert_relative_eq!(result.objective_value.unwrap(), -18f64);
}

#[test]
fn negative_right_hand_side() {
    let mut problem = LinearProgram::new(
        vec![1f64, 1f64],
        vec![vec![1f64, 0f64], vec![-1f64, -1f64]],
        vec![4f64, -6f64],
        true,
    ).unwrap();

    assert_eq!(
        solve(&problem, &Options::default()),
        Err(InvalidProblem::NegativeRightHandSide { row: 1, value: "-6".to_string() }),
    );

    let transformations = problem.normalize_right_hand_side();
    assert_eq!(transformations, vec![ConstraintTransformation {
        constraint_index: 1,
        original_b: -6f64,
        transformed_b: 6f64,
    }]);

    let result = solve(&problem, &Options::default()).unwrap();
    assert_eq!(result.status, Status::Optimal);
    assert_eq!(result.solution, Some(vec![4f64, 2f64]));
    assert_eq!(result.objective_value, Some(6f64));
    assert_eq!(result.iterations, 2);
}

#[test]
fn batch_with_errors() {
    let problems = vec![
        (vec![1f64], vec![vec![1f64]], vec![2f64]),
        (vec![1f64], vec![vec![1f64, 1f64]], vec![2f64]),
        (vec![1f64], vec![vec![1f64]], vec![-2f64]),
    ];

    let results = problems.into_iter()
        .map(|(c, a, b)| solve_lp(c, a, b, true).unwrap_or_else(SolveResult::from))
        .collect::<Vec<_>>();

    assert_eq!(
        results.iter().map(|result| result.status).collect::<Vec<_>>(),
        vec![Status::Optimal, Status::Error, Status::Error],
    );
    assert_eq!(results[0].objective_value, Some(2f64));
    assert!(results[1].message.as_ref().unwrap().contains("coefficients"));
    assert!(results[2].message.as_ref().unwrap().contains("negative"));
}
