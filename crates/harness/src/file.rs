// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The file runner: byte outputs checked against golden files.

use crate::scenario::FileScenario;
use multicase_golden::{ByteComparator, GoldenEntry, GoldenError};
use std::path::Path;

/// Runs file cases and defers all comparison to a [`ByteComparator`].
///
/// The runner only produces `(actual bytes, golden path)` entries; reading
/// goldens, byte equality, and failure rendering belong to the comparator.
/// Scenario and suite operations hand the comparator the whole batch in one
/// call, in scenario-then-case order, so it can build one consolidated
/// report covering every mismatch.
///
/// There is no sink here: comparator errors already carry the full report
/// text, and the assertion methods panic with it.
pub struct FileRunner<I, C, P = ()> {
    run: Box<dyn Fn(&P, &I) -> Vec<u8>>,
    comparator: C,
}

impl<I, C: ByteComparator> FileRunner<I, C> {
    /// Runner without params.
    pub fn new(run: impl Fn(&I) -> Vec<u8> + 'static, comparator: C) -> Self {
        Self {
            run: Box::new(move |_, input| run(input)),
            comparator,
        }
    }

    /// Run one input and compare its bytes against the golden at `path`.
    pub fn check_case(&self, input: &I, path: impl AsRef<Path>) -> Result<(), GoldenError> {
        self.check_case_with(&(), input, path)
    }

    /// Run one input and panic unless its bytes match the golden at `path`.
    pub fn assert_case(&self, input: &I, path: impl AsRef<Path>) {
        self.assert_case_with(&(), input, path);
    }
}

impl<I, C: ByteComparator, P> FileRunner<I, C, P> {
    /// Runner whose run function receives shared params.
    pub fn with_params(run: impl Fn(&P, &I) -> Vec<u8> + 'static, comparator: C) -> Self {
        Self {
            run: Box::new(run),
            comparator,
        }
    }

    /// The injected comparator.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Run one input under explicit params and compare against one golden.
    pub fn check_case_with(
        &self,
        params: &P,
        input: &I,
        path: impl AsRef<Path>,
    ) -> Result<(), GoldenError> {
        let actual = (self.run)(params, input);
        self.comparator.compare(&actual, path.as_ref())
    }

    // Panicking is the assertion contract.
    #[allow(clippy::panic)]
    pub fn assert_case_with(&self, params: &P, input: &I, path: impl AsRef<Path>) {
        if let Err(err) = self.check_case_with(params, input, path) {
            panic!("{err}");
        }
    }

    /// Run every case of `scenario` and compare the batch in one call.
    pub fn check_scenario(&self, scenario: &FileScenario<I, P>) -> Result<(), GoldenError> {
        let mut entries = Vec::with_capacity(scenario.cases.len());
        self.collect(scenario, &mut entries);
        self.comparator.compare_all(&entries)
    }

    #[allow(clippy::panic)]
    pub fn assert_scenario(&self, scenario: &FileScenario<I, P>) {
        if let Err(err) = self.check_scenario(scenario) {
            panic!("{err}");
        }
    }

    /// Run every case of every scenario, flattened in scenario-then-case
    /// order, and compare the batch in one call.
    pub fn check_suite(&self, scenarios: &[FileScenario<I, P>]) -> Result<(), GoldenError> {
        let mut entries = Vec::new();
        for scenario in scenarios {
            self.collect(scenario, &mut entries);
        }
        self.comparator.compare_all(&entries)
    }

    #[allow(clippy::panic)]
    pub fn assert_suite(&self, scenarios: &[FileScenario<I, P>]) {
        if let Err(err) = self.check_suite(scenarios) {
            panic!("{err}");
        }
    }

    fn collect(&self, scenario: &FileScenario<I, P>, entries: &mut Vec<GoldenEntry>) {
        for case in &scenario.cases {
            let actual = (self.run)(&scenario.params, &case.input);
            entries.push(GoldenEntry::new(actual, case.expected.clone()));
        }
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
