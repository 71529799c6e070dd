// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered-subsequence matching.
//!
//! `P` matches `T` iff there is a strictly increasing sequence of positions in
//! `T` whose characters spell `P`. Greedy left-to-right consumption is enough:
//! taking the earliest possible position for each pattern char never rules
//! out a later match.

use crate::util::fold::fold;

/// Subsequence test on already-folded strings.
///
/// The empty pattern is a subsequence of everything.
pub fn is_subsequence(pattern: &str, text: &str) -> bool {
    let mut remaining = text.chars();
    pattern.chars().all(|p| remaining.any(|t| t == p))
}

/// Case-insensitive subsequence test on raw strings.
pub fn fuzzy_match(pattern: &str, text: &str) -> bool {
    is_subsequence(&fold(pattern), &fold(text))
}
