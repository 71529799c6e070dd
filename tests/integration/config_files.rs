//! Reading settings from JSON files.

use crate::common::garden_index;
use glimmer::{search_with, GlimmerError, SearchConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("glimmer.json");
    fs::write(&path, r#"{"minQueryChars": 3, "limit": 1}"#).unwrap();

    let config = SearchConfig::from_path(&path).unwrap();
    assert_eq!(config.min_query_chars, 3);
    assert_eq!(config.limit, Some(1));
    assert_eq!(config.context_length, 60);
    assert_eq!(config.fragment_param, "search");
    assert_eq!(config.annotator.scroll_delay_ms, 300);
}

#[test]
fn test_limit_applies_to_rendered_rows() {
    let config = SearchConfig {
        limit: Some(1),
        ..SearchConfig::default()
    };
    let outcome = search_with("ferns", Some(&garden_index()), &config);
    assert_eq!(outcome.rendered().len(), 1);
    assert_eq!(outcome.announcement(), Some("1 result found"));
}

#[test]
fn test_custom_fragment_param_flows_into_links() {
    let config = SearchConfig::from_json(r#"{"fragmentParam": "q"}"#).unwrap();
    let outcome = search_with("succulents", Some(&garden_index()), &config);
    assert_eq!(outcome.rendered()[0].href, "/doc/2/#q=succulents");
}

#[test]
fn test_invalid_values_are_rejected() {
    for json in [
        r#"{"minQueryChars": 0}"#,
        r#"{"fragmentParam": ""}"#,
        r#"{"annotator": {"containers": []}}"#,
        r#"{"highlight": {"openTag": "<b>", "closeTag": ""}}"#,
    ] {
        let err = SearchConfig::from_json(json).unwrap_err();
        assert!(matches!(err, GlimmerError::InvalidConfig(_)), "{}", json);
    }
}

#[test]
fn test_wrong_types_are_parse_errors() {
    let err = SearchConfig::from_json(r#"{"debounceMs": "fast"}"#).unwrap_err();
    assert!(matches!(err, GlimmerError::ConfigParse(_)));
}
