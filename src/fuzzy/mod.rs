// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: the last-resort recall path.
//!
//! When neither exact nor substring matching finds anything, a query still
//! counts as a (weak) match if its characters appear in order somewhere in
//! the text. There is no gap penalty, so short queries match almost any long
//! text. Scoring keeps this in check by giving subsequence hits the smallest
//! weights.

mod subsequence;

pub use subsequence::*;
