// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for excerpts and highlighting.
//!
//! Multi-byte text, case folding that changes length, and tiny or huge
//! context windows must never slice through a character.

#![no_main]

use arbitrary::Arbitrary;
use glimmer::{extract, highlight};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    content: String,
    query: String,
    context: u8,
}

fuzz_target!(|input: Input| {
    let context = usize::from(input.context);
    let excerpt = extract(&input.content, &input.query, context);

    let query_chars = input.query.chars().count();
    assert!(excerpt.chars().count() <= 2 * context + query_chars + 6);

    let html = highlight(&excerpt, &input.query);
    assert!(html.len() >= excerpt.len());
    if !excerpt.is_empty() && !input.query.is_empty() {
        assert!(html.contains("<mark>"), "excerpt lost its match: {:?}", excerpt);
    }
});
