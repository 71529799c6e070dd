//! Property tests for per-document scoring.
//!
//! Scores are checked against a small oracle that spells out the award table
//! directly on lowercased ASCII strings.

use glimmer::{is_subsequence, score, Document, MatchLocation, MatchScore};
use proptest::prelude::*;

// =============================================================================
// ORACLE
// =============================================================================

/// Award table: one title award, one content award, first award sets location.
fn oracle_score(title: &str, content: &str, query: &str) -> MatchScore {
    let (t, c, q) = (title.to_lowercase(), content.to_lowercase(), query.to_lowercase());
    if q.is_empty() {
        return MatchScore::NONE;
    }
    let title_points = if t == q {
        100
    } else if t.contains(&q) {
        50
    } else if is_subsequence(&q, &t) {
        25
    } else {
        0
    };
    let content_points = if c.contains(&q) {
        10
    } else if is_subsequence(&q, &c) {
        5
    } else {
        0
    };
    let location = match (title_points, content_points) {
        (0, 0) => None,
        (0, _) => Some(MatchLocation::Content),
        _ => Some(MatchLocation::Title),
    };
    MatchScore {
        score: title_points + content_points,
        location,
    }
}

fn word() -> impl Strategy<Value = String> {
    "[a-dA-D]{1,6}"
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..6).prop_map(|w| w.join(" "))
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Scoring agrees with the award table.
    #[test]
    fn prop_matches_oracle(title in text(), content in text(), query in "[a-dA-D]{1,4}") {
        let doc = Document::new(title.clone(), content.clone(), "/p/");
        prop_assert_eq!(score(&doc, &query), oracle_score(&title, &content, &query));
    }

    /// A positive score always comes with a location, and only then.
    #[test]
    fn prop_location_iff_positive(title in text(), content in text(), query in "[a-d ]{0,4}") {
        let s = score(&Document::new(title, content, "/p/"), &query);
        prop_assert_eq!(s.score > 0, s.location.is_some());
    }

    /// Case never changes a score.
    #[test]
    fn prop_case_insensitive(title in text(), content in text(), query in "[a-d]{1,4}") {
        let doc = Document::new(title, content, "/p/");
        prop_assert_eq!(score(&doc, &query), score(&doc, &query.to_uppercase()));
    }

    /// Any title award puts the document above every content-only document.
    #[test]
    fn prop_title_dominance(
        t1 in text(), c1 in text(),
        t2 in text(), c2 in text(),
        query in "[a-d]{1,3}",
    ) {
        let a = score(&Document::new(t1, c1, "/a/"), &query);
        let b = score(&Document::new(t2, c2, "/b/"), &query);
        if a.location == Some(MatchLocation::Title) && b.location == Some(MatchLocation::Content) {
            prop_assert!(a.score > b.score);
        }
    }

    /// Scores stay within the table's range.
    #[test]
    fn prop_bounded(title in text(), content in text(), query in "[a-d]{1,4}") {
        let s = score(&Document::new(title, content, "/p/"), &query).score;
        prop_assert!(s <= 110);
        prop_assert!(s == 0 || s >= 5);
    }
}
