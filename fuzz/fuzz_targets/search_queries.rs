// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole searches.
//!
//! Arbitrary pages and an arbitrary query go through scoring, ranking,
//! excerpting, highlighting and rendering. Nothing may panic, and the
//! ordering and announcement rules must hold for whatever comes out.

#![no_main]

use arbitrary::Arbitrary;
use glimmer::{render, search, Document, SearchIndex, SearchOutcome};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    pages: Vec<(String, String)>,
    query: String,
}

fuzz_target!(|input: Input| {
    let index: SearchIndex = input
        .pages
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, (title, content))| Document::new(title, content, format!("/p/{}/", i)))
        .collect();
    let query: String = input.query.chars().take(200).collect();

    let outcome = search(&query, &index);

    let trimmed = query.trim().chars().count();
    match &outcome {
        SearchOutcome::Cleared => assert_eq!(trimmed, 0),
        SearchOutcome::Hint { .. } => assert_eq!(trimmed, 1),
        SearchOutcome::Results { results, .. } => {
            assert!(trimmed >= 2);
            assert!(results.len() <= index.len());
            for pair in results.windows(2) {
                assert!(pair[0].score >= pair[1].score, "results not sorted");
            }
            for row in results {
                assert!(row.score > 0);
                assert!(row.href.contains("#search="));
            }
        }
    }

    let view = render(&outcome);
    if outcome.is_cleared() {
        assert!(view.html.is_empty());
    }
});
