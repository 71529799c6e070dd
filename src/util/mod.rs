// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by scoring, excerpting and highlighting.
//!
//! Case folding that can map match positions back onto the original text,
//! HTML escaping for the few user-controlled strings that end up in markup,
//! and `encodeURIComponent`-compatible fragment handling.

pub mod escape;
pub mod fold;
pub mod url;
