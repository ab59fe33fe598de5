// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stock serializers for the value runner.
//!
//! The runner compares outputs by serialized string, so the serializer both
//! defines equality and provides the text shown in failure messages. These
//! constructors cover the common choices; hand-roll a closure when outputs
//! need normalizing (sorting unordered collections, masking timestamps)
//! before comparison.

use serde::Serialize;
use std::fmt::{Debug, Display};

/// Serializer using the output's [`Display`] form.
pub fn display<O: Display>() -> impl Fn(&O) -> String {
    |output| output.to_string()
}

/// Serializer using the output's [`Debug`] form.
pub fn debug<O: Debug>() -> impl Fn(&O) -> String {
    |output| format!("{output:?}")
}

/// Serializer using compact JSON.
///
/// Total by contract: an output that cannot serialize renders as an
/// `<unserializable: …>` marker rather than aborting the batch, so the
/// failure report still covers every case.
pub fn json<O: Serialize>() -> impl Fn(&O) -> String {
    |output| match serde_json::to_string(output) {
        Ok(text) => text,
        Err(err) => format!("<unserializable: {err}>"),
    }
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod tests;
