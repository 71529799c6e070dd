// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for destination-page highlighting.
//!
//! Wrapping and unwrapping an arbitrary occurrence must leave the page text
//! exactly as it was.

#![no_main]

use arbitrary::Arbitrary;
use glimmer::annotate::{PageElement, PageTree};
use glimmer::{encode_uri_component, MemoryLocation, PageAnnotator, SearchConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    paragraphs: Vec<String>,
    query: String,
}

fuzz_target!(|input: Input| {
    let main = input
        .paragraphs
        .into_iter()
        .take(16)
        .fold(PageElement::new("main"), |main, text| {
            main.child(PageElement::new("p").text(text))
        });
    let mut page = PageTree::new(PageElement::new("body").child(main));
    let before = page.text_content(page.root());

    let hash = format!("#search={}", encode_uri_component(&input.query));
    let mut location = MemoryLocation::new("/", "", hash);
    let mut annotator = PageAnnotator::new(&SearchConfig::default());
    annotator.annotate(&mut page, &mut location, 0);
    assert_eq!(page.text_content(page.root()), before);

    annotator.tick(&mut page, u64::MAX);
    assert!(!annotator.is_active());
    assert_eq!(page.text_content(page.root()), before);
});
