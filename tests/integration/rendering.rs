//! From query to results-list markup.

use crate::common::garden_index;
use glimmer::{render, search, SearchOutcome};

#[test]
fn test_results_markup() {
    let view = render(&search("succulents", &garden_index()));
    assert!(view.html.starts_with(
        r#"<a href="/doc/2/#search=succulents" class="main-search-result-item"><div class="main-result-title"><mark>Succulents</mark></div>"#
    ));
    assert!(view
        .html
        .contains(r#"<div class="main-result-excerpt">Succulents store water in thick leaves....</div></a>"#));
    assert_eq!(view.aria_live, Some("polite"));
    assert_eq!(view.aria_label.as_deref(), Some("1 result found"));
}

#[test]
fn test_one_anchor_per_row() {
    let outcome = search("ferns", &garden_index());
    let view = render(&outcome);
    assert_eq!(
        view.html.matches("class=\"main-search-result-item\"").count(),
        outcome.rendered().len()
    );
}

#[test]
fn test_row_without_content_shows_bare_ellipsis() {
    let view = render(&search("about", &garden_index()));
    assert!(view.html.contains("<mark>About</mark>"));
    assert!(view
        .html
        .contains(r#"<div class="main-result-excerpt">...</div></a>"#));
}

#[test]
fn test_no_results_echoes_escaped_query() {
    let view = render(&search("<script>", &garden_index()));
    assert_eq!(
        view.html,
        r#"<div class="main-no-results">No results found for "&lt;script&gt;"</div>"#
    );
    assert_eq!(view.aria_label.as_deref(), Some("No results found"));
}

#[test]
fn test_hint_and_cleared_views() {
    let hint = render(&search("f", &garden_index()));
    assert_eq!(
        hint.html,
        r#"<div class="main-search-hint">Type at least 2 characters to search...</div>"#
    );
    assert_eq!(hint.aria_live, None);

    let cleared = render(&search("", &garden_index()));
    assert_eq!(cleared.html, "");
    assert_eq!(cleared.aria_live, Some("off"));
}

#[test]
fn test_outcome_serializes_with_state_tag() {
    let json = serde_json::to_value(search("succulents", &garden_index())).unwrap();
    assert_eq!(json["state"], "results");
    assert_eq!(json["results"][0]["titleHtml"], "<mark>Succulents</mark>");
    assert_eq!(json["results"][0]["location"], "title");

    let json = serde_json::to_value(SearchOutcome::Cleared).unwrap();
    assert_eq!(json["state"], "cleared");
}
