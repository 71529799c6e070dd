//! Link building and fragment parsing.

use glimmer::{encode_uri_component, fragment_param, search_href};

#[test]
fn test_href_encodes_query() {
    assert_eq!(
        search_href("/docs/intro/", "search", "a&b c"),
        "/docs/intro/#search=a%26b%20c"
    );
}

#[test]
fn test_unreserved_characters_pass_through() {
    assert_eq!(encode_uri_component("A-z_0.9!~*'()"), "A-z_0.9!~*'()");
    assert_eq!(encode_uri_component("/?#"), "%2F%3F%23");
}

#[test]
fn test_fragment_round_trip() {
    for query in ["ferns", "moist & soggy", "100% café", "a+b", "(x)|[y]"] {
        let href = search_href("/p/", "search", query);
        let (_, fragment) = href.split_once('#').unwrap();
        assert_eq!(fragment_param(fragment, "search").as_deref(), Some(query));
    }
}

#[test]
fn test_fragment_forms() {
    assert_eq!(fragment_param("#search=moss", "search").as_deref(), Some("moss"));
    assert_eq!(fragment_param("search=moss", "search").as_deref(), Some("moss"));
    assert_eq!(
        fragment_param("#x=1&search=wet+soil", "search").as_deref(),
        Some("wet soil")
    );
    assert_eq!(
        fragment_param("#search=first&search=second", "search").as_deref(),
        Some("first")
    );
}

#[test]
fn test_missing_or_empty_value() {
    assert_eq!(fragment_param("", "search"), None);
    assert_eq!(fragment_param("#section-2", "search"), None);
    assert_eq!(fragment_param("#search=", "search"), None);
}

#[test]
fn test_whitespace_value_is_present() {
    assert_eq!(fragment_param("#search=%20%20", "search").as_deref(), Some("  "));
    assert_eq!(fragment_param("#search=+", "search").as_deref(), Some(" "));
}

#[test]
fn test_undecodable_value() {
    assert_eq!(fragment_param("#search=%FF", "search"), None);
}
