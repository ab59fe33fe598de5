#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

use crate::scenario::cases;
use crate::serialize;
use crate::sink::MemorySink;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn squares() -> (ValueRunner<i64, i64>, MemorySink) {
    let sink = MemorySink::new();
    let runner = ValueRunner::new(|n: &i64| n * n, serialize::display(), sink.clone());
    (runner, sink)
}

#[test]
fn check_case_passes_on_equal_serialized_form() {
    let (runner, _) = squares();
    assert_eq!(runner.check_case(&2, &4), Ok(()));
}

#[test]
fn check_case_reports_serialized_strings() {
    let (runner, _) = squares();
    let failure = runner.check_case(&3, &10).unwrap_err();
    assert_eq!(failure, CaseFailure::new(0, "10", "9"));
}

#[test]
fn equality_is_defined_by_the_serializer() {
    // Outputs in arbitrary order compare equal once the serializer sorts.
    let runner = ValueRunner::new(
        |n: &u32| {
            let mut digits: Vec<u32> = (1..=*n).rev().collect();
            digits.push(0);
            digits
        },
        |output: &Vec<u32>| {
            let mut sorted = output.clone();
            sorted.sort_unstable();
            format!("{sorted:?}")
        },
        MemorySink::new(),
    );
    assert_eq!(runner.check_case(&3, &vec![0, 1, 2, 3]), Ok(()));
}

#[test]
fn check_scenario_runs_every_case_before_reporting() {
    let (runner, _) = squares();
    let scenario = Scenario::new(cases(vec![(1, 2), (2, 4), (3, 10)]));
    let report = runner.check_scenario(&scenario);
    assert_eq!(report.total, 3);
    assert_eq!(
        report.failures,
        vec![CaseFailure::new(0, "2", "1"), CaseFailure::new(2, "10", "9")]
    );
}

#[test]
fn check_scenario_accepts_empty_case_lists() {
    let (runner, _) = squares();
    let report = runner.check_scenario(&Scenario::new(Vec::new()));
    assert!(report.is_pass());
    assert_eq!(report.summary_line(), "ALL 0/0 cases passed.");
}

#[test]
fn params_reach_every_run_call() {
    let runner: ValueRunner<i64, i64, i64> = ValueRunner::with_params(
        |scale: &i64, n: &i64| scale * n,
        serialize::display(),
        MemorySink::new(),
    );
    let scenario = Scenario::with_params(3, cases(vec![(1, 3), (2, 6), (5, 15)]));
    assert!(runner.check_scenario(&scenario).is_pass());
    assert_eq!(runner.check_case_with(&10, &2, &20), Ok(()));
}

#[test]
fn check_suite_tallies_across_scenarios() {
    let (runner, _) = squares();
    let suite = vec![
        Scenario::new(cases(vec![(1, 1), (2, 4)])),
        Scenario::new(cases(vec![(3, 9), (4, 17)])),
    ];
    let report = runner.check_suite(&suite);
    assert_eq!(report.scenarios, 2);
    assert_eq!(report.total_cases, 4);
    assert_eq!(report.failed_scenarios(), 1);
    assert_eq!(report.failed[0].index, 1);
    assert_eq!(
        report.failed[0].report.failures,
        vec![CaseFailure::new(1, "17", "16")]
    );
}

#[test]
fn assert_case_writes_an_empty_line_on_success() {
    let (mut runner, sink) = squares();
    runner.assert_case(&2, &4);
    assert_eq!(sink.lines(), vec![String::new()]);
}

#[test]
#[should_panic(expected = "Case #1: expected [10], but got [9].")]
fn assert_case_panics_on_mismatch() {
    let (mut runner, _) = squares();
    runner.assert_case(&3, &10);
}

#[test]
fn assert_case_writes_the_message_before_panicking() {
    let (mut runner, sink) = squares();
    let outcome = catch_unwind(AssertUnwindSafe(move || runner.assert_case(&3, &10)));
    assert!(outcome.is_err());
    assert_eq!(
        sink.lines(),
        vec!["  Case #1: expected [10], but got [9].\n".to_string()]
    );
}

#[test]
fn assert_scenario_writes_only_the_summary_on_a_clean_run() {
    let (mut runner, sink) = squares();
    runner.assert_scenario(&Scenario::new(cases(vec![(2, 4), (3, 9)])));
    assert_eq!(sink.lines(), vec!["ALL 2/2 cases passed.".to_string()]);
}

#[test]
fn assert_scenario_reports_every_failure_before_panicking() {
    let (mut runner, sink) = squares();
    let scenario = Scenario::new(cases(vec![(2, 4), (3, 10)]));
    let outcome = catch_unwind(AssertUnwindSafe(move || runner.assert_scenario(&scenario)));

    let payload = outcome.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert_eq!(message, "1/2 cases failed");
    assert_eq!(
        sink.lines(),
        vec![
            "1/2 cases passed.".to_string(),
            "1/2 cases failed.\n  Case #2: expected [10], but got [9].\n".to_string(),
        ]
    );
}

#[test]
fn assert_suite_writes_only_the_summary_on_a_clean_run() {
    let (mut runner, sink) = squares();
    let suite = vec![
        Scenario::new(cases(vec![(1, 1)])),
        Scenario::new(cases(vec![(2, 4), (3, 9)])),
    ];
    runner.assert_suite(&suite);
    assert_eq!(sink.lines(), vec!["ALL 3/3 cases passed.".to_string()]);
}

#[test]
fn assert_suite_reports_the_scenario_breakdown_before_panicking() {
    let (mut runner, sink) = squares();
    let suite = vec![
        Scenario::new(cases(vec![(1, 1), (2, 4)])),
        Scenario::new(cases(vec![(3, 9), (4, 17)])),
    ];
    let outcome = catch_unwind(AssertUnwindSafe(move || runner.assert_suite(&suite)));

    let payload = outcome.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert_eq!(message, "1/2 scenarios failed");
    assert_eq!(
        sink.lines(),
        vec![
            "3/4 cases passed.".to_string(),
            concat!(
                "1/2 scenarios & 1/4 cases failed.\n",
                "Scenario #2: 1 failures.\n",
                "  Case #2: expected [17], but got [16].\n"
            )
            .to_string(),
        ]
    );
}

#[test]
fn assert_suite_accepts_an_empty_suite() {
    let (mut runner, sink) = squares();
    runner.assert_suite(&[]);
    assert_eq!(sink.lines(), vec!["ALL 0/0 cases passed.".to_string()]);
}

#[test]
fn run_panics_propagate_unchanged() {
    let runner = ValueRunner::new(
        |n: &i64| {
            assert!(*n < 10, "input out of range: {n}");
            n * n
        },
        serialize::display(),
        MemorySink::new(),
    );
    let scenario = Scenario::new(cases(vec![(2, 4), (12, 144)]));
    let outcome = catch_unwind(AssertUnwindSafe(|| runner.check_scenario(&scenario)));
    assert!(outcome.is_err());
}
