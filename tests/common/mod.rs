//! Shared test utilities and fixtures.

#![allow(dead_code)]

use glimmer::{SearchOutcome, RenderedResult};

// Re-export canonical test utilities from glimmer::testing
pub use glimmer::testing::{garden_index, make_doc, make_index, sample_page};

/// Hrefs of the rendered rows, in order.
pub fn hrefs(outcome: &SearchOutcome) -> Vec<&str> {
    outcome.rendered().iter().map(|r| r.href.as_str()).collect()
}

/// Strip the default highlight markers.
pub fn unmark(html: &str) -> String {
    html.replace("<mark>", "").replace("</mark>", "")
}

/// The only rendered row, failing loudly otherwise.
pub fn single(outcome: &SearchOutcome) -> &RenderedResult {
    let rows = outcome.rendered();
    assert_eq!(rows.len(), 1, "expected one row, got {:?}", rows);
    &rows[0]
}
