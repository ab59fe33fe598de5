// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-case test runners with serialized-equality reporting.
//!
//! Two independent runners cover the two assertion styles:
//!
//! - [`ValueRunner`] executes a transformation and compares each result
//!   against an expected value through a canonical serialized form,
//!   reporting every mismatch in the batch before failing.
//! - [`FileRunner`] executes a transformation producing raw bytes and
//!   defers comparison to a golden-file comparator (see [`golden`]).
//!
//! Both accept a single (input, expected) pair, a [`Scenario`] of ordered
//! cases, or a whole suite of scenarios, optionally threading a shared
//! params value into every run call. Batch operations are fail-at-end: all
//! cases run, then one report covers every failure.
//!
//! ```
//! use multicase::{cases, serialize, MemorySink, Scenario, ValueRunner};
//!
//! let mut runner = ValueRunner::new(
//!     |n: &i64| n * n,
//!     serialize::display(),
//!     MemorySink::new(),
//! );
//! runner.assert_scenario(&Scenario::new(cases(vec![(2, 4), (3, 9)])));
//! ```

mod file;
mod report;
mod runner;
mod scenario;
pub mod serialize;
mod sink;

pub use file::FileRunner;
pub use report::{CaseFailure, ScenarioFailure, ScenarioReport, SuiteReport};
pub use runner::ValueRunner;
pub use scenario::{cases, load_suite, Case, FileCase, FileScenario, LoadError, Scenario};
pub use sink::{MemorySink, ReportSink, WriteSink};

/// Golden-file comparison, re-exported from `multicase-golden`.
pub mod golden {
    pub use multicase_golden::{
        mismatch_detail, update_from_env, BatchReport, ByteComparator, GoldenDir, GoldenEntry,
        GoldenError, UPDATE_ENV,
    };
}
