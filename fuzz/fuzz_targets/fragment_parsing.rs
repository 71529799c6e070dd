// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the link contract.
//!
//! Any query encoded into an href must decode back to itself, and arbitrary
//! fragments must parse without panicking.

#![no_main]

use glimmer::{fragment_param, search_href};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (query, fragment) = data;

    let _ = fragment_param(fragment, "search");

    if !query.is_empty() {
        let href = search_href("/page/", "search", query);
        let (_, encoded) = href.split_once('#').unwrap_or_default();
        assert_eq!(fragment_param(encoded, "search").as_deref(), Some(query));
    }
});
