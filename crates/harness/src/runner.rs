// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The value runner: serialized-equality comparison with batch reporting.

use crate::report::{CaseFailure, ScenarioFailure, ScenarioReport, SuiteReport};
use crate::scenario::Scenario;
use crate::sink::ReportSink;

/// Runs value cases and reports every serialized-equality mismatch.
///
/// A runner is assembled from two capability functions and a sink:
///
/// - `run` executes one input (with the scenario's params, if any),
/// - `serialize` renders an output in its canonical string form,
/// - the [`ReportSink`] receives every line of report text.
///
/// A case passes when the serialized expected and actual outputs are equal
/// strings, so output types with unordered or noisy internals are handled by
/// normalizing in the serializer rather than by implementing `PartialEq`.
///
/// Scenario and suite operations are fail-at-end: every case runs before the
/// batch verdict, and one report covers all failures. Only the single-case
/// assertion is fail-fast. Panics raised inside `run` or `serialize`
/// propagate unchanged and abort the batch.
pub struct ValueRunner<I, O, P = ()> {
    run: Box<dyn Fn(&P, &I) -> O>,
    serialize: Box<dyn Fn(&O) -> String>,
    sink: Box<dyn ReportSink>,
}

impl<I, O> ValueRunner<I, O> {
    /// Runner without params.
    pub fn new(
        run: impl Fn(&I) -> O + 'static,
        serialize: impl Fn(&O) -> String + 'static,
        sink: impl ReportSink + 'static,
    ) -> Self {
        Self {
            run: Box::new(move |_, input| run(input)),
            serialize: Box::new(serialize),
            sink: Box::new(sink),
        }
    }

    /// Run one (input, expected) pair without touching the sink.
    pub fn check_case(&self, input: &I, expected: &O) -> Result<(), CaseFailure> {
        self.check_case_with(&(), input, expected)
    }

    /// Run one (input, expected) pair and panic on mismatch.
    ///
    /// The sink receives an empty line on success or the case message on
    /// failure. This is the only fail-fast operation.
    pub fn assert_case(&mut self, input: &I, expected: &O) {
        self.assert_case_with(&(), input, expected);
    }
}

impl<I, O, P> ValueRunner<I, O, P> {
    /// Runner whose run function receives shared params.
    pub fn with_params(
        run: impl Fn(&P, &I) -> O + 'static,
        serialize: impl Fn(&O) -> String + 'static,
        sink: impl ReportSink + 'static,
    ) -> Self {
        Self {
            run: Box::new(run),
            serialize: Box::new(serialize),
            sink: Box::new(sink),
        }
    }

    /// Run one pair under explicit params without touching the sink.
    pub fn check_case_with(
        &self,
        params: &P,
        input: &I,
        expected: &O,
    ) -> Result<(), CaseFailure> {
        self.check_one(params, input, expected, 0)
    }

    /// Run every case of `scenario` in order, collecting all failures.
    pub fn check_scenario(&self, scenario: &Scenario<I, O, P>) -> ScenarioReport {
        let failures = scenario
            .cases
            .iter()
            .enumerate()
            .filter_map(|(index, case)| {
                self.check_one(&scenario.params, &case.input, &case.expected, index)
                    .err()
            })
            .collect();
        ScenarioReport {
            total: scenario.cases.len(),
            failures,
        }
    }

    /// Run every case of every scenario, collecting the failed scenarios.
    pub fn check_suite(&self, scenarios: &[Scenario<I, O, P>]) -> SuiteReport {
        let mut total_cases = 0;
        let mut failed = Vec::new();
        for (index, scenario) in scenarios.iter().enumerate() {
            total_cases += scenario.cases.len();
            let report = self.check_scenario(scenario);
            if !report.is_pass() {
                failed.push(ScenarioFailure { index, report });
            }
        }
        SuiteReport {
            scenarios: scenarios.len(),
            total_cases,
            failed,
        }
    }

    /// Run one pair under explicit params and panic on mismatch.
    // Panicking is the assertion contract.
    #[allow(clippy::panic)]
    pub fn assert_case_with(&mut self, params: &P, input: &I, expected: &O) {
        match self.check_one(params, input, expected, 0) {
            Ok(()) => self.sink.line(""),
            Err(failure) => {
                let message = failure.message();
                self.sink.line(&message);
                panic!("{}", message.trim_end());
            }
        }
    }

    /// Run a whole scenario, report through the sink, and panic unless every
    /// case passed.
    ///
    /// The summary line is always written; on failure the full failure block
    /// follows it before the panic.
    #[allow(clippy::panic)]
    pub fn assert_scenario(&mut self, scenario: &Scenario<I, O, P>) {
        let report = self.check_scenario(scenario);
        self.sink.line(&report.summary_line());
        if let Some(line) = report.failure_line() {
            self.sink.line(&line);
            panic!("{}/{} cases failed", report.failed(), report.total);
        }
    }

    /// Run a whole suite, report through the sink, and panic unless every
    /// scenario passed.
    #[allow(clippy::panic)]
    pub fn assert_suite(&mut self, scenarios: &[Scenario<I, O, P>]) {
        let report = self.check_suite(scenarios);
        self.sink.line(&report.summary_line());
        if let Some(line) = report.failure_line() {
            self.sink.line(&line);
            panic!(
                "{}/{} scenarios failed",
                report.failed_scenarios(),
                report.scenarios
            );
        }
    }

    fn check_one(
        &self,
        params: &P,
        input: &I,
        expected: &O,
        index: usize,
    ) -> Result<(), CaseFailure> {
        let actual = (self.run)(params, input);
        let expected = (self.serialize)(expected);
        let actual = (self.serialize)(&actual);
        if expected == actual {
            Ok(())
        } else {
            Err(CaseFailure::new(index, expected, actual))
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
