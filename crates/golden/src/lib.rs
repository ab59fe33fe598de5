// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file byte assertions for multicase test runners.
//!
//! This crate provides the comparator collaborator consumed by the
//! `multicase` file runner: it reads an expected ("golden") file, compares
//! it byte-for-byte against a produced result, and reports every mismatch
//! in a batch as one consolidated failure.
//!
//! Golden files are addressed relative to a root directory via [`GoldenDir`].
//! Custom stores can implement [`ByteComparator`] instead.

mod compare;
mod diff;
mod dir;
mod error;

pub use compare::{ByteComparator, GoldenEntry};
pub use diff::mismatch_detail;
pub use dir::{update_from_env, GoldenDir, UPDATE_ENV};
pub use error::{BatchReport, GoldenError};
