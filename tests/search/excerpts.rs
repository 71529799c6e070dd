//! What each row shows under its title.

use crate::common::{make_index, single, unmark};
use glimmer::{search, search_with, MatchLocation, SearchConfig};

#[test]
fn test_fuzzy_only_content_match_is_not_rendered() {
    // Scores 5 through the subsequence fallback, but has no literal excerpt.
    let index = make_index(&[("Notes", "frequent root checks")]);
    let outcome = search("frc", &index);
    assert!(outcome.rendered().is_empty());
    assert_eq!(outcome.announcement(), Some("No results found"));
}

#[test]
fn test_content_excerpt_is_centered_and_highlighted() {
    let content = format!(
        "{} the rare blue orchid grows here {}",
        "lorem ipsum ".repeat(10),
        "dolor sit ".repeat(10)
    );
    let index = make_index(&[("Garden", content.as_str())]);
    let row = single(&search("orchid", &index)).clone();

    assert_eq!(row.location, MatchLocation::Content);
    let excerpt = row.excerpt_html.unwrap();
    assert!(excerpt.starts_with("..."));
    assert!(excerpt.ends_with("..."));
    assert!(excerpt.contains("<mark>orchid</mark>"));
    // 60 chars each side plus the query, plus two ellipses, at most.
    assert!(unmark(&excerpt).chars().count() <= 60 + 6 + 60 + 6);
}

#[test]
fn test_title_match_preview_is_plain_prefix() {
    let content = "x".repeat(200);
    let index = make_index(&[("Ferns", content.as_str())]);
    let row = single(&search("ferns", &index)).clone();

    assert_eq!(row.location, MatchLocation::Title);
    assert_eq!(row.excerpt_html, Some(format!("{}...", "x".repeat(80))));
}

#[test]
fn test_title_match_preview_is_not_highlighted() {
    let index = make_index(&[("Ferns", "Ferns are old plants.")]);
    let row = single(&search("ferns", &index)).clone();
    assert_eq!(row.title_html, "<mark>Ferns</mark>");
    assert_eq!(row.excerpt_html.as_deref(), Some("Ferns are old plants...."));
}

#[test]
fn test_highlight_keeps_original_casing() {
    let index = make_index(&[("Zzz", "Big FERNS and small ferns")]);
    let row = single(&search("Ferns", &index)).clone();
    assert_eq!(
        row.excerpt_html.as_deref(),
        Some("Big <mark>FERNS</mark> and small <mark>ferns</mark>")
    );
}

#[test]
fn test_custom_context_and_markers() {
    let config = SearchConfig::from_json(
        r#"{"contextLength": 4, "highlight": {"openTag": "<b>", "closeTag": "</b>"}}"#,
    )
    .unwrap();
    let index = make_index(&[("Zzz", "aaaa bbbb needle cccc dddd")]);
    let outcome = search_with("needle", Some(&index), &config);
    let row = single(&outcome);
    assert_eq!(row.excerpt_html.as_deref(), Some("...<b>needle</b>..."));
}
