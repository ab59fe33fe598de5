// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The comparator contract consumed by file-based case runners.

use crate::error::{BatchReport, GoldenError};
use std::path::{Path, PathBuf};

/// One produced result paired with the golden path it is asserted against
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoldenEntry {
    /// Raw bytes produced by the transformation under test
    pub actual: Vec<u8>,
    /// Golden-file path, resolved by the comparator
    pub path: PathBuf,
}

impl GoldenEntry {
    pub fn new(actual: impl Into<Vec<u8>>, path: impl Into<PathBuf>) -> Self {
        Self {
            actual: actual.into(),
            path: path.into(),
        }
    }
}

/// Byte comparison against stored golden content.
///
/// Implementations decide how paths are resolved and how mismatches are
/// described; [`compare_all`](ByteComparator::compare_all) must check every
/// entry before failing so one run reports every mismatch.
pub trait ByteComparator {
    /// Compare one result against the golden file at `path`.
    fn compare(&self, actual: &[u8], path: &Path) -> Result<(), GoldenError>;

    /// Compare a whole batch, consolidating all failures into one error.
    ///
    /// Entries are checked in order; an IO fault on one entry is recorded as
    /// that entry's failure and does not stop the rest of the batch.
    fn compare_all(&self, entries: &[GoldenEntry]) -> Result<(), GoldenError> {
        let failures: Vec<GoldenError> = entries
            .iter()
            .filter_map(|entry| self.compare(&entry.actual, &entry.path).err())
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(GoldenError::Batch(BatchReport::new(entries.len(), failures)))
        }
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
