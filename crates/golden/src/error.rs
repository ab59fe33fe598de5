// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for golden-file comparison.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while comparing results against golden files
#[derive(Debug, Error)]
pub enum GoldenError {
    #[error("Failed to read golden file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write golden file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing golden file '{}' (set {}=1 to create it)", path.display(), crate::UPDATE_ENV)]
    Missing { path: PathBuf },

    #[error("Golden mismatch for '{}':\n{detail}", path.display())]
    Mismatch { path: PathBuf, detail: String },

    #[error("{0}")]
    Batch(BatchReport),
}

impl GoldenError {
    /// The golden path this error concerns, if it concerns a single file
    pub fn path(&self) -> Option<&Path> {
        match self {
            GoldenError::Read { path, .. }
            | GoldenError::Write { path, .. }
            | GoldenError::Missing { path }
            | GoldenError::Mismatch { path, .. } => Some(path),
            GoldenError::Batch(_) => None,
        }
    }
}

/// Consolidated outcome of comparing a batch of golden entries.
///
/// Collects every per-entry failure so a single run surfaces all mismatches
/// at once instead of stopping at the first.
#[derive(Debug)]
pub struct BatchReport {
    total: usize,
    failures: Vec<GoldenError>,
}

impl BatchReport {
    pub(crate) fn new(total: usize, failures: Vec<GoldenError>) -> Self {
        Self { total, failures }
    }

    /// Number of entries compared
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of entries that failed
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// The per-entry failures, in entry order
    pub fn failures(&self) -> &[GoldenError] {
        &self.failures
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} golden comparisons failed.",
            self.failures.len(),
            self.total
        )?;
        for failure in &self.failures {
            write!(f, "\n{failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
