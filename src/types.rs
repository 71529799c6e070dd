// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through a search.
//!
//! A [`Document`] is what the index builder hands us: a page title, its plain
//! text content, and the URL to navigate to. Everything else in here is
//! transient - computed for one query, rendered, then thrown away.
//!
//! # Pipeline shapes
//!
//! ```text
//! Document ──score──▶ MatchScore ──filter/sort──▶ ScoredMatch ──render──▶ RenderedResult
//!                                                                             │
//!                                                            SearchOutcome ◀──┘
//! ```
//!
//! # Invariants
//!
//! - **MatchScore**: `score > 0 ⇔ location.is_some()`. A location is only
//!   assigned by a check that also added points.
//! - **ScoredMatch**: only built for `score > 0`.
//! - **RenderedResult**: a content match is only rendered when a literal
//!   excerpt exists. A positive score does not imply a renderable result.

use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT
// =============================================================================

/// One searchable page, as produced by the external index build.
///
/// Identity is the position in the index; there is no id field. `content` is
/// plain text (markup already stripped by the builder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub url: String,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
        }
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Which field produced the first qualifying match.
///
/// Title always wins the assignment when both fields match; the content score
/// is still added on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLocation {
    Title,
    Content,
}

impl MatchLocation {
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLocation::Title => "title",
            MatchLocation::Content => "content",
        }
    }
}

/// Result of scoring one document against one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub score: u32,
    pub location: Option<MatchLocation>,
}

impl MatchScore {
    /// Nothing matched anywhere.
    pub const NONE: MatchScore = MatchScore {
        score: 0,
        location: None,
    };

    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// A document that survived scoring, ready for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    /// Position in the index; the tiebreaker for equal scores.
    pub doc_id: usize,
    pub document: &'a Document,
    pub score: u32,
    pub location: Option<MatchLocation>,
}

// =============================================================================
// OUTPUT
// =============================================================================

/// One row of the results list.
///
/// `title_html` and `excerpt_html` contain highlight markers and are meant to
/// be inserted as markup. `href` embeds the query in the fragment so the
/// destination page can highlight it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResult {
    pub title_html: String,
    pub excerpt_html: Option<String>,
    pub href: String,
    pub score: u32,
    pub location: MatchLocation,
}

/// What the results surface should show after a query.
///
/// The three states are distinct on purpose: a cleared box, a "keep typing"
/// hint, and an actual (possibly empty) result set each render and announce
/// differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SearchOutcome {
    /// Empty query: wipe the results and stop announcing.
    Cleared,
    /// Query too short to score.
    Hint { message: String },
    /// A scored search, possibly with zero results.
    #[serde(rename_all = "camelCase")]
    Results {
        query: String,
        results: Vec<RenderedResult>,
        announcement: String,
    },
}

impl SearchOutcome {
    /// Build a results state, deriving the screen-reader announcement from the
    /// number of rows that will actually be shown.
    pub fn results(query: impl Into<String>, results: Vec<RenderedResult>) -> Self {
        let announcement = announcement_for(results.len());
        SearchOutcome::Results {
            query: query.into(),
            results,
            announcement,
        }
    }

    /// Rendered rows; empty for the cleared and hint states.
    pub fn rendered(&self) -> &[RenderedResult] {
        match self {
            SearchOutcome::Results { results, .. } => results,
            _ => &[],
        }
    }

    pub fn announcement(&self) -> Option<&str> {
        match self {
            SearchOutcome::Results { announcement, .. } => Some(announcement),
            _ => None,
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, SearchOutcome::Cleared)
    }

    pub fn is_hint(&self) -> bool {
        matches!(self, SearchOutcome::Hint { .. })
    }
}

/// "No results found", "1 result found", "N results found".
pub fn announcement_for(count: usize) -> String {
    match count {
        0 => "No results found".to_string(),
        1 => "1 result found".to_string(),
        n => format!("{} results found", n),
    }
}
