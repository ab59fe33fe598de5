// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure records and the report text built from them.
//!
//! Reports store 0-based indices and serialized value strings; all rendered
//! text uses 1-based numbering. Rendering is deterministic, so the same
//! failures always produce byte-identical report text.

use serde::Serialize;

/// One failed case: the serialized expected and actual strings that differed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseFailure {
    /// 0-based position of the case in its scenario
    pub index: usize,
    /// Serialized expected output
    pub expected: String,
    /// Serialized actual output
    pub actual: String,
}

impl CaseFailure {
    pub fn new(index: usize, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            index,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The indented per-case line, newline-terminated.
    pub fn message(&self) -> String {
        format!(
            "  Case #{}: expected [{}], but got [{}].\n",
            self.index + 1,
            self.expected,
            self.actual
        )
    }
}

/// Outcome of running every case of one scenario.
///
/// Runner-built reports never hold more failures than `total`; the tally
/// methods saturate rather than underflow if a hand-built report breaks
/// that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Cases executed
    pub total: usize,
    /// Failures, in case order
    pub failures: Vec<CaseFailure>,
}

impl ScenarioReport {
    pub fn passed(&self) -> usize {
        self.total.saturating_sub(self.failures.len())
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }

    /// Always-emitted summary; the `ALL ` prefix appears only on a clean run.
    pub fn summary_line(&self) -> String {
        format!(
            "{}{}/{} cases passed.",
            if self.is_pass() { "ALL " } else { "" },
            self.passed(),
            self.total
        )
    }

    /// Failure count plus one message per failed case; `None` on a clean run.
    pub fn failure_line(&self) -> Option<String> {
        if self.is_pass() {
            return None;
        }
        let mut line = format!("{}/{} cases failed.\n", self.failed(), self.total);
        for failure in &self.failures {
            line.push_str(&failure.message());
        }
        Some(line)
    }
}

/// One failed scenario, with its position in the suite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioFailure {
    /// 0-based position of the scenario in its suite
    pub index: usize,
    pub report: ScenarioReport,
}

impl ScenarioFailure {
    /// The scenario heading plus its case messages.
    pub fn block(&self) -> String {
        let mut block = format!(
            "Scenario #{}: {} failures.\n",
            self.index + 1,
            self.report.failed()
        );
        for failure in &self.report.failures {
            block.push_str(&failure.message());
        }
        block
    }
}

/// Outcome of running every scenario of a suite.
///
/// As with [`ScenarioReport`], tallies saturate if a hand-built report
/// holds more case failures than `total_cases`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// Scenarios executed
    pub scenarios: usize,
    /// Cases executed across all scenarios
    pub total_cases: usize,
    /// Failed scenarios, in suite order
    pub failed: Vec<ScenarioFailure>,
}

impl SuiteReport {
    pub fn failed_scenarios(&self) -> usize {
        self.failed.len()
    }

    pub fn failed_cases(&self) -> usize {
        self.failed.iter().map(|s| s.report.failed()).sum()
    }

    pub fn passed_cases(&self) -> usize {
        self.total_cases.saturating_sub(self.failed_cases())
    }

    pub fn is_pass(&self) -> bool {
        self.failed.is_empty()
    }

    /// Global case tally across every scenario.
    pub fn summary_line(&self) -> String {
        format!(
            "{}{}/{} cases passed.",
            if self.is_pass() { "ALL " } else { "" },
            self.passed_cases(),
            self.total_cases
        )
    }

    /// Scenario and case tallies plus one block per failed scenario; `None`
    /// on a clean run.
    pub fn failure_line(&self) -> Option<String> {
        if self.is_pass() {
            return None;
        }
        let mut line = format!(
            "{}/{} scenarios & {}/{} cases failed.\n",
            self.failed_scenarios(),
            self.scenarios,
            self.failed_cases(),
            self.total_cases
        );
        for scenario in &self.failed {
            line.push_str(&scenario.block());
        }
        Some(line)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
