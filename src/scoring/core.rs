// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Each document gets at most one title award and at most one content award:
//!
//! | Check (case-insensitive)       | Points | Location  |
//! |--------------------------------|--------|-----------|
//! | title equals query             | 100    | title     |
//! | title contains query           | 50     | title     |
//! | query is subsequence of title  | 25     | title     |
//! | content contains query         | +10    | content*  |
//! | query is subsequence of content| +5     | content*  |
//!
//! `*` only if no title check already set the location. The first award that
//! fires sets the location; later awards only add points.
//!
//! # Key Invariant: Title Dominance
//!
//! ```text
//! TITLE_FUZZY_SCORE > CONTENT_CONTAINS_SCORE + 0   (25 > 10)
//! ```
//!
//! Any title match outranks any content-only match. Checked at compile time
//! in `contracts`.

use crate::fuzzy::is_subsequence;
use crate::types::{Document, MatchLocation, MatchScore};
use crate::util::fold::fold;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// The ordering between these is asserted in contracts.rs.

/// Title equals the query.
pub const TITLE_EXACT_SCORE: u32 = 100;

/// Title contains the query.
pub const TITLE_CONTAINS_SCORE: u32 = 50;

/// Query characters appear in order in the title.
pub const TITLE_FUZZY_SCORE: u32 = 25;

/// Content contains the query.
pub const CONTENT_CONTAINS_SCORE: u32 = 10;

/// Query characters appear in order in the content.
pub const CONTENT_FUZZY_SCORE: u32 = 5;

/// Score a document against a raw query.
///
/// Folds both sides on every call. The search pipeline uses
/// [`score_folded`] with index-time folding instead.
pub fn score(document: &Document, query: &str) -> MatchScore {
    score_folded(&fold(&document.title), &fold(&document.content), &fold(query))
}

/// Score already-folded title and content against an already-folded query.
///
/// An empty query scores nothing, rather than "contained in everything".
pub fn score_folded(title: &str, content: &str, query: &str) -> MatchScore {
    if query.is_empty() {
        return MatchScore::NONE;
    }

    let mut score = 0;
    let mut location = None;

    if title == query {
        score += TITLE_EXACT_SCORE;
        location = Some(MatchLocation::Title);
    } else if title.contains(query) {
        score += TITLE_CONTAINS_SCORE;
        location = Some(MatchLocation::Title);
    } else if is_subsequence(query, title) {
        score += TITLE_FUZZY_SCORE;
        location = Some(MatchLocation::Title);
    }

    if content.contains(query) {
        score += CONTENT_CONTAINS_SCORE;
        location.get_or_insert(MatchLocation::Content);
    } else if is_subsequence(query, content) {
        score += CONTENT_FUZZY_SCORE;
        location.get_or_insert(MatchLocation::Content);
    }

    MatchScore { score, location }
}
