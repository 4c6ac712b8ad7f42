//! The JSON shape consumed by report generators.
use serde_json::{Value, json};

use relp_tableau::{LinearProgram, Options, SolveResult, solve, solve_lp};

fn problem() -> LinearProgram<f64> {
    serde_json::from_value(json!({
        "c": [3.0, 4.0],
        "A": [[1.0, 2.0], [3.0, 2.0]],
        "b": [8.0, 12.0],
        "maximize": true,
    })).unwrap()
}

#[test]
fn result_with_trace() {
    let options: Options = serde_json::from_str(r#"{"record_trace": true}"#).unwrap();
    let result = solve(&problem(), &options).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["status"], "optimal");
    assert_eq!(value["solution"], json!([2.0, 3.0]));
    assert_eq!(value["objective_value"], json!(18.0));
    assert_eq!(value["iterations"], 2);
    assert_eq!(value["message"], Value::Null);

    let steps = value["trace"].as_array().unwrap();
    let statuses = steps.iter().map(|step| step["status"].as_str().unwrap()).collect::<Vec<_>>();
    assert_eq!(statuses, vec!["initial", "pre_pivot", "post_pivot", "pre_pivot", "post_pivot", "optimal"]);

    assert_eq!(steps[0]["iteration"], 0);
    assert_eq!(steps[0]["basis"], json!([2, 3]));
    assert_eq!(steps[0]["tableau"], json!([[8.0, 1.0, 2.0, 1.0, 0.0], [12.0, 3.0, 2.0, 0.0, 1.0], [0.0, -3.0, -4.0, 0.0, 0.0]]));
    assert!(steps[0].get("pivot").is_none());

    assert_eq!(steps[1]["pivot"]["entering_column"], 2);
    assert_eq!(steps[1]["pivot"]["leaving_row"], 0);
    assert_eq!(steps[1]["pivot"]["min_ratio"], json!(4.0));
    assert_eq!(steps[5]["iteration"], 2);
}

#[test]
fn unbounded_result() {
    let result = solve_lp(vec![1f64, 1f64], vec![vec![-1f64, 1f64]], vec![1f64], true).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["status"], "unbounded");
    assert_eq!(value["solution"], Value::Null);
    assert!(value["message"].as_str().unwrap().contains("x1"));
}

#[test]
fn error_result() {
    let result = solve_lp(vec![1f64], vec![vec![1f64]], vec![-1f64], true)
        .unwrap_or_else(SolveResult::from);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["status"], "error");
    assert_eq!(value["iterations"], 0);
}

#[test]
fn round_trip_through_json() {
    let result = solve(&problem(), &Options::default().with_trace(true)).unwrap();
    let text = serde_json::to_string(&result).unwrap();

    let parsed: SolveResult<f64> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, result);
}
