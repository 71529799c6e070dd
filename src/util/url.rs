// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The navigation contract: `url#search=<encoded query>`.
//!
//! Encoding matches JavaScript's `encodeURIComponent` so links built here and
//! links built by page scripts are byte-identical. Decoding follows
//! `URLSearchParams`: `&`-separated pairs, `+` is a space, first key wins.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Link to `url` that carries `query` for the destination page.
pub fn search_href(url: &str, param: &str, query: &str) -> String {
    format!("{}#{}={}", url, param, encode_uri_component(query))
}

/// Decode one form-encoded component. Invalid UTF-8 after decoding is `None`.
fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Look up `name` in a fragment such as `#search=foo&x=1`.
///
/// Returns `None` when the key is absent, its value is empty, or the value
/// does not decode. Whitespace-only values are returned as-is.
pub fn fragment_param(fragment: &str, name: &str) -> Option<String> {
    let body = fragment.strip_prefix('#').unwrap_or(fragment);
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(key).as_deref() == Some(name) {
            return decode_component(value).filter(|v| !v.is_empty());
        }
    }
    None
}

/// The visible location once the fragment is gone: path plus query string.
pub fn without_fragment(pathname: &str, search: &str) -> String {
    format!("{}{}", pathname, search)
}
