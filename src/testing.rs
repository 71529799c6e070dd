// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::annotate::{PageElement, PageTree};
use crate::index::SearchIndex;
use crate::types::Document;

/// Create a document whose URL is derived from its position.
pub fn make_doc(id: usize, title: &str, content: &str) -> Document {
    Document::new(title, content, format!("/doc/{}/", id))
}

/// Build an index from `(title, content)` pairs, in order.
pub fn make_index(pages: &[(&str, &str)]) -> SearchIndex {
    pages
        .iter()
        .enumerate()
        .map(|(id, (title, content))| make_doc(id, title, content))
        .collect()
}

/// A small garden-themed site used across integration tests.
pub fn garden_index() -> SearchIndex {
    make_index(&[
        ("Ferns", "Ferns thrive in shade and humidity. Mist them often."),
        ("Watering Guide", "Most ferns want moist soil, never soggy."),
        ("Succulents", "Succulents store water in thick leaves."),
        ("Repotting", "Frequent root checks keep plants healthy."),
        ("About", ""),
    ])
}

/// A destination page with navigation, a script block, and article text.
pub fn sample_page() -> PageTree {
    PageTree::new(
        PageElement::new("body")
            .child(PageElement::new("nav").text("Home Ferns Succulents"))
            .child(
                PageElement::new("main")
                    .child(PageElement::new("script").text("const ferns = [];"))
                    .child(PageElement::new("h1").text("Watering Guide"))
                    .child(
                        PageElement::new("p")
                            .text("Most ferns want ")
                            .child(PageElement::new("em").text("moist"))
                            .text(" soil, never soggy."),
                    ),
            )
            .child(PageElement::new("footer").text("Made with moss")),
    )
}
