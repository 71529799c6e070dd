// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side page search with ranked excerpts and on-page highlighting.
//!
//! A static site ships a JSON array of `{title, content, url}` records. This
//! crate scores every page against a query, ranks them, cuts a highlighted
//! excerpt around the first literal occurrence, and renders the results
//! list. Links carry the query in their fragment so the destination page can
//! find and briefly highlight it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │  index      │────▶│  scoring     │────▶│  search::engine          │
//! │ (pre-folded │     │ (MatchScorer,│     │ (gate, rank, excerpt,    │
//! │  documents) │     │  ranking)    │     │  highlight, render)      │
//! └─────────────┘     └──────────────┘     └──────────────────────────┘
//!                                                       │ href#search=q
//!                                                       ▼
//!                                          ┌──────────────────────────┐
//!                                          │  annotate                │
//!                                          │ (PageAnnotator over a    │
//!                                          │  TextTree, timeline)     │
//!                                          └──────────────────────────┘
//! ```
//!
//! Matching is literal and case-insensitive everywhere. Queries are never
//! compiled into patterns, so characters like `(`, `*` or `|` just match
//! themselves.
//!
//! # Usage
//!
//! ```
//! use glimmer::{search, Document, SearchIndex, SearchOutcome};
//!
//! let index = SearchIndex::new(vec![
//!     Document::new("Ferns", "Ferns like shade.", "/ferns/"),
//! ]);
//!
//! match search("fern", &index) {
//!     SearchOutcome::Results { results, announcement, .. } => {
//!         assert_eq!(results[0].title_html, "<mark>Fern</mark>s");
//!         assert_eq!(announcement, "1 result found");
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod annotate;
pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;

pub mod runtime;

pub mod testing;

// Re-exports for public API
pub use annotate::{AnnotateOutcome, LocationBar, MemoryLocation, PageAnnotator};
pub use config::{AnnotatorConfig, HighlightConfig, SearchConfig};
pub use error::{GlimmerError, Result};
pub use fuzzy::{fuzzy_match, is_subsequence};
pub use index::{IndexState, SearchIndex};
pub use scoring::score;
pub use search::{
    extract, highlight, highlight_with, render, search, search_with, DebounceTicket, Debouncer,
    ResultsView, SearchEngine,
};
pub use types::{
    Document, MatchLocation, MatchScore, RenderedResult, ScoredMatch, SearchOutcome,
};
pub use util::fold::{contains_ignore_case, find_ignore_case};
pub use util::url::{encode_uri_component, fragment_param, search_href};
