// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrapping query occurrences in emphasis markers.
//!
//! Matching is literal and case-insensitive; the matched text keeps its
//! original casing. The input is trusted: titles and excerpts come from the
//! index and are inserted as markup, so nothing here escapes or sanitizes.
//! Callers must not pass arbitrary user markup as `text`.

use crate::config::HighlightConfig;
use crate::util::fold::{fold, FoldedText};

/// Wrap every occurrence of `query` in `<mark>…</mark>`.
///
/// An empty query returns `text` unchanged.
///
/// ```
/// use glimmer::highlight;
///
/// assert_eq!(highlight("Fox and fox", "fox"), "<mark>Fox</mark> and <mark>fox</mark>");
/// assert_eq!(highlight("Fox and fox", ""), "Fox and fox");
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, &HighlightConfig::default())
}

/// [`highlight`] with custom markers.
pub fn highlight_with(text: &str, query: &str, markers: &HighlightConfig) -> String {
    if query.is_empty() {
        return text.to_string();
    }
    highlight_folded(text, &FoldedText::new(text), &fold(query), markers)
}

/// [`highlight_with`] with folding already done.
pub fn highlight_folded(
    text: &str,
    folded_text: &FoldedText,
    folded_query: &str,
    markers: &HighlightConfig,
) -> String {
    let ranges = folded_text.match_ranges(folded_query);
    if ranges.is_empty() {
        return text.to_string();
    }

    let extra = ranges.len() * (markers.open_tag.len() + markers.close_tag.len());
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        out.push_str(&markers.open_tag);
        out.push_str(&text[range.clone()]);
        out.push_str(&markers.close_tag);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}
