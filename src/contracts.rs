// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search pipeline.
//!
//! Debug-mode assertions over the properties ranking depends on. They
//! compile to nothing in release builds.
//!
//! | Contract Function          | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_score_consistent`   | `score > 0 ⇔ location is set`                   |
//! | `check_ranked`             | descending score, ties in index order           |
//! | `check_rendered`           | content rows always carry a non-empty excerpt   |
//!
//! # Usage
//!
//! ```ignore
//! rank(&mut matches);
//! check_ranked(&matches);
//! ```

use crate::scoring::{
    CONTENT_CONTAINS_SCORE, CONTENT_FUZZY_SCORE, TITLE_CONTAINS_SCORE, TITLE_EXACT_SCORE,
    TITLE_FUZZY_SCORE,
};
use crate::types::{MatchLocation, MatchScore, RenderedResult, ScoredMatch};

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // Each tier strictly beats the next within a field.
    assert!(TITLE_EXACT_SCORE > TITLE_CONTAINS_SCORE);
    assert!(TITLE_CONTAINS_SCORE > TITLE_FUZZY_SCORE);
    assert!(CONTENT_CONTAINS_SCORE > CONTENT_FUZZY_SCORE);

    // INVARIANT: title dominance. The weakest title award beats the best
    // content-only total.
    assert!(TITLE_FUZZY_SCORE > CONTENT_CONTAINS_SCORE); // 25 > 10

    // A nonzero score needs every award to be positive.
    assert!(CONTENT_FUZZY_SCORE > 0);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a score and its location agree.
///
/// # Panics (debug builds only)
/// Panics if a positive score has no location or a zero score has one.
#[inline]
pub fn check_score_consistent(score: &MatchScore) {
    debug_assert_eq!(
        score.score > 0,
        score.location.is_some(),
        "Contract violation: score {} with location {:?}",
        score.score,
        score.location
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that matches are sorted by descending score with index order as the
/// tiebreaker.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranked(matches: &[ScoredMatch<'_>]) {
    for (i, pair) in matches.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        debug_assert!(
            prev.score > curr.score || (prev.score == curr.score && prev.doc_id < curr.doc_id),
            "Contract violation: ranking - matches[{}] (doc {}, score {}) before \
             matches[{}] (doc {}, score {})",
            i,
            prev.doc_id,
            prev.score,
            i + 1,
            curr.doc_id,
            curr.score
        );
    }
}

// ============================================================================
// RENDER CONTRACTS
// ============================================================================

/// Check that no content match was rendered without an excerpt.
#[inline]
pub fn check_rendered(results: &[RenderedResult]) {
    for (i, result) in results.iter().enumerate() {
        if result.location == MatchLocation::Content {
            debug_assert!(
                result.excerpt_html.as_deref().is_some_and(|e| !e.is_empty()),
                "Contract violation: results[{}] ({}) is a content match without an excerpt",
                i,
                result.href
            );
        }
    }
}
