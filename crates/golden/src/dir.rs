// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-rooted golden file store.

use crate::compare::ByteComparator;
use crate::diff::mismatch_detail;
use crate::error::GoldenError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// `MULTICASE_UPDATE` — when set to a non-empty value other than `0`,
/// golden comparisons rewrite the golden file instead of failing.
pub const UPDATE_ENV: &str = "MULTICASE_UPDATE";

/// Whether [`UPDATE_ENV`] currently requests update mode.
pub fn update_from_env() -> bool {
    std::env::var(UPDATE_ENV).is_ok_and(|value| !value.is_empty() && value != "0")
}

/// Golden store rooted at a directory.
///
/// Relative golden paths are resolved against the root; absolute paths are
/// used as-is. Comparison is byte-exact. In update mode the actual bytes are
/// written to the golden path (creating parent directories as needed) instead
/// of failing, for both missing and mismatched goldens.
#[derive(Clone, Debug)]
pub struct GoldenDir {
    root: PathBuf,
    update: bool,
}

impl GoldenDir {
    /// Create a store rooted at `root`, honoring [`UPDATE_ENV`]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            update: update_from_env(),
        }
    }

    /// Create a store with update mode set explicitly
    pub fn with_update(root: impl Into<PathBuf>, update: bool) -> Self {
        Self {
            root: root.into(),
            update,
        }
    }

    /// The root directory golden paths are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether mismatches rewrite the golden file instead of failing
    pub fn update_enabled(&self) -> bool {
        self.update
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn write_golden(&self, path: &Path, actual: &[u8]) -> Result<(), GoldenError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GoldenError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, actual).map_err(|source| GoldenError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ByteComparator for GoldenDir {
    fn compare(&self, actual: &[u8], path: &Path) -> Result<(), GoldenError> {
        let full = self.resolve(path);
        let expected = match fs::read(&full) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                if self.update {
                    return self.write_golden(&full, actual);
                }
                return Err(GoldenError::Missing { path: full });
            }
            Err(source) => return Err(GoldenError::Read { path: full, source }),
        };

        if expected == actual {
            Ok(())
        } else if self.update {
            self.write_golden(&full, actual)
        } else {
            Err(GoldenError::Mismatch {
                detail: mismatch_detail(&expected, actual),
                path: full,
            })
        }
    }
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
