//! Ranking tests: score tiers, title dominance, and stable ties.

use crate::common::{hrefs, make_index};
use glimmer::{score, search, Document, MatchLocation};

#[test]
fn test_equal_scores_keep_index_order() {
    // A and C score 10 (content), B scores 50 (title).
    let index = make_index(&[
        ("Alpha", "the widget"),
        ("Widget board", "zzz"),
        ("Gamma", "a widget"),
    ]);
    let outcome = search("widget", &index);
    assert_eq!(hrefs(&outcome), vec!["/doc/1/", "/doc/0/", "/doc/2/"]
        .into_iter()
        .map(|h| format!("{}#search=widget", h))
        .collect::<Vec<_>>());
}

#[test]
fn test_title_subsequence_beats_content_substring() {
    let index = make_index(&[
        ("Zzz", "all about rust"),
        ("Rivers Under Stone Tunnels", "Caves."),
    ]);
    let outcome = search("rust", &index);
    let rows = outcome.rendered();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].location, MatchLocation::Title);
    assert_eq!(rows[0].score, 25);
    assert_eq!(rows[1].location, MatchLocation::Content);
    assert_eq!(rows[1].score, 10);
}

#[test]
fn test_exact_title_scores_at_least_100() {
    let doc = Document::new("Getting Started", "", "/start/");
    let s = score(&doc, "GETTING STARTED");
    assert!(s.score >= 100);
    assert_eq!(s.location, Some(MatchLocation::Title));
}

#[test]
fn test_unrelated_document_is_excluded() {
    let doc = Document::new("abc", "def", "/x/");
    assert_eq!(score(&doc, "xyz").score, 0);

    let index = make_index(&[("abc", "def")]);
    assert!(search("xyz", &index).rendered().is_empty());
}

#[test]
fn test_both_fields_add_up() {
    let doc = Document::new("Ferns", "Ferns like shade", "/ferns/");
    let s = score(&doc, "ferns");
    assert_eq!(s.score, 110);
    assert_eq!(s.location, Some(MatchLocation::Title));
}

#[test]
fn test_subsequence_has_no_gap_penalty() {
    let near = Document::new("abc", "", "/near/");
    let far = Document::new("a----------b----------c", "", "/far/");
    assert_eq!(score(&near, "ac").score, score(&far, "ac").score);
}
