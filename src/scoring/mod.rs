// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Title checks and content checks run independently and add up. The title
//! weights are chosen so that the weakest title match (subsequence, 25) still
//! outranks the strongest content-only match (substring, 10).

mod core;
pub mod ranking;

pub use core::*;
