// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Results-list markup and the accessibility attributes that go with it.
//!
//! Titles and excerpts are inserted as-is (they already carry highlight
//! markers and come from the index). The `href` and the echoed query are
//! user-controlled and always escaped.

use crate::types::{RenderedResult, SearchOutcome};
use crate::util::escape::escape_html;
use std::fmt::Write;

/// What to put into the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub html: String,
    /// Value for the container's `aria-live` attribute; `None` leaves it
    /// untouched.
    pub aria_live: Option<&'static str>,
    /// Value for `aria-label`; `None` leaves the attribute untouched.
    pub aria_label: Option<String>,
}

pub fn render(outcome: &SearchOutcome) -> ResultsView {
    match outcome {
        SearchOutcome::Cleared => ResultsView {
            html: String::new(),
            aria_live: Some("off"),
            aria_label: None,
        },
        SearchOutcome::Hint { message } => ResultsView {
            html: format!(
                r#"<div class="main-search-hint">{}</div>"#,
                escape_html(message)
            ),
            aria_live: None,
            aria_label: None,
        },
        SearchOutcome::Results {
            query,
            results,
            announcement,
        } => {
            let html = if results.is_empty() {
                format!(
                    r#"<div class="main-no-results">No results found for "{}"</div>"#,
                    escape_html(query)
                )
            } else {
                results.iter().fold(String::new(), |mut html, row| {
                    render_row(&mut html, row);
                    html
                })
            };
            ResultsView {
                html,
                aria_live: Some("polite"),
                aria_label: Some(announcement.clone()),
            }
        }
    }
}

fn render_row(out: &mut String, row: &RenderedResult) {
    let _ = write!(
        out,
        r#"<a href="{}" class="main-search-result-item"><div class="main-result-title">{}</div>"#,
        escape_html(&row.href),
        row.title_html
    );
    if let Some(excerpt) = &row.excerpt_html {
        let _ = write!(out, r#"<div class="main-result-excerpt">{}</div>"#, excerpt);
    }
    out.push_str("</a>");
}
