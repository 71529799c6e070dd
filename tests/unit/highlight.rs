//! Highlighting and excerpt extraction through the public API.

use glimmer::{extract, highlight, highlight_with, HighlightConfig};

// ============================================================================
// HIGHLIGHT
// ============================================================================

#[test]
fn test_every_occurrence_is_wrapped() {
    assert_eq!(
        highlight("fern, Fern, FERN", "fern"),
        "<mark>fern</mark>, <mark>Fern</mark>, <mark>FERN</mark>"
    );
}

#[test]
fn test_pattern_characters_match_literally() {
    assert_eq!(highlight("a (b) c", "(b)"), "a <mark>(b)</mark> c");
    assert_eq!(highlight("1+1=2", "1+1"), "<mark>1+1</mark>=2");
    assert_eq!(highlight("a.b", "."), "a<mark>.</mark>b");
    assert_eq!(highlight("abc", "a*"), "abc");
}

#[test]
fn test_no_occurrence_is_unchanged() {
    assert_eq!(highlight("Ferns like shade", "cactus"), "Ferns like shade");
}

#[test]
fn test_empty_query_is_unchanged() {
    assert_eq!(highlight("Ferns", ""), "Ferns");
}

#[test]
fn test_overlapping_occurrences_do_not_nest() {
    assert_eq!(highlight("aaa", "aa"), "<mark>aa</mark>a");
}

#[test]
fn test_non_ascii_text() {
    assert_eq!(highlight("Crème brûlée", "BRÛLÉE"), "Crème <mark>brûlée</mark>");
}

#[test]
fn test_custom_markers() {
    let markers = HighlightConfig {
        open_tag: "<em class=\"hit\">".to_string(),
        close_tag: "</em>".to_string(),
    };
    assert_eq!(
        highlight_with("Moss and more moss", "moss", &markers),
        "<em class=\"hit\">Moss</em> and more <em class=\"hit\">moss</em>"
    );
}

// ============================================================================
// EXTRACT
// ============================================================================

#[test]
fn test_extract_whole_short_content() {
    assert_eq!(extract("Ferns like shade.", "like", 60), "Ferns like shade.");
}

#[test]
fn test_extract_requires_literal_occurrence() {
    assert_eq!(extract("frequent root checks", "frc", 60), "");
    assert_eq!(extract("", "fern", 60), "");
    assert_eq!(extract("Ferns", "", 60), "");
}

#[test]
fn test_extract_cuts_both_ends() {
    let excerpt = extract("The quick brown fox jumps over the lazy dog", "fox", 5);
    assert_eq!(excerpt, "...fox...");
}

#[test]
fn test_extract_counts_characters() {
    let content = format!("{}target{}", "é".repeat(100), "ü".repeat(100));
    let excerpt = extract(&content, "target", 10);
    assert_eq!(
        excerpt,
        format!("...{}target{}...", "é".repeat(10), "ü".repeat(10))
    );
}
