// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mismatch detail rendering.

use similar::TextDiff;

/// Content larger than this is summarized instead of diffed line-by-line.
const MAX_TEXT_DIFF: usize = 64 * 1024;

/// Describe how `actual` differs from `expected`.
///
/// When both sides are UTF-8 text of reasonable size the detail is a unified
/// diff; otherwise a byte summary naming the first differing offset. Callers
/// are expected to have established that the contents differ.
pub fn mismatch_detail(expected: &[u8], actual: &[u8]) -> String {
    match (std::str::from_utf8(expected), std::str::from_utf8(actual)) {
        (Ok(expected_text), Ok(actual_text))
            if expected.len() <= MAX_TEXT_DIFF && actual.len() <= MAX_TEXT_DIFF =>
        {
            TextDiff::from_lines(expected_text, actual_text)
                .unified_diff()
                .context_radius(3)
                .header("expected", "actual")
                .to_string()
        }
        _ => byte_summary(expected, actual),
    }
}

fn byte_summary(expected: &[u8], actual: &[u8]) -> String {
    format!(
        "Binary contents differ: expected {} bytes, actual {} bytes, first difference at offset {}",
        expected.len(),
        actual.len(),
        first_difference(expected, actual)
    )
}

/// Offset of the first differing byte; the shorter length when one side is a
/// prefix of the other.
fn first_difference(expected: &[u8], actual: &[u8]) -> usize {
    expected
        .iter()
        .zip(actual.iter())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()))
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
