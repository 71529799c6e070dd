// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline and the engine instance that owns its state.
//!
//! ```text
//! input ──trim──▶ length gate ──▶ score every entry ──▶ rank ──▶ render rows
//!                  │ 0 chars: Cleared                              │
//!                  │ < min:   Hint            content rows without ─┘
//!                                             a literal excerpt are dropped
//! ```
//!
//! Scoring can succeed through the subsequence fallback while excerpt
//! extraction only accepts a literal occurrence, so a positive score does not
//! guarantee a row. The announcement counts rows actually rendered.

use crate::config::SearchConfig;
use crate::contracts::{check_ranked, check_rendered, check_score_consistent};
use crate::error::Result;
use crate::index::{IndexEntry, IndexState, SearchIndex};
use crate::scoring::ranking::rank;
use crate::scoring::score_folded;
use crate::search::debounce::{DebounceTicket, Debouncer};
use crate::search::highlight::{highlight_folded, highlight_with};
use crate::search::snippet::extract_folded;
use crate::types::{Document, MatchLocation, RenderedResult, ScoredMatch, SearchOutcome};
use crate::util::fold::fold;
use crate::util::url::search_href;
use std::path::Path;
use tracing::{debug, info, warn};

/// Run one search with default settings.
///
/// ```
/// use glimmer::{search, Document, SearchIndex};
///
/// let index = SearchIndex::new(vec![
///     Document::new("Ferns", "Shade-loving plants.", "/ferns/"),
///     Document::new("Cacti", "They grow ferns of spines.", "/cacti/"),
/// ]);
/// let outcome = search("fern", &index);
/// let rows = outcome.rendered();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].href, "/ferns/#search=fern");
/// ```
pub fn search(query: &str, index: &SearchIndex) -> SearchOutcome {
    search_with(query, Some(index), &SearchConfig::default())
}

/// Run one search. A missing index searches like an empty one.
pub fn search_with(input: &str, index: Option<&SearchIndex>, config: &SearchConfig) -> SearchOutcome {
    let query = input.trim();
    let query_chars = query.chars().count();
    if query_chars == 0 {
        return SearchOutcome::Cleared;
    }
    if query_chars < config.min_query_chars {
        return SearchOutcome::Hint {
            message: config.hint_message.clone(),
        };
    }

    let Some(index) = index else {
        debug!(query, "index not ready, searching nothing");
        return SearchOutcome::results(query, Vec::new());
    };

    let folded_query = fold(query);
    let mut matches = score_all(index, &folded_query);
    let candidates = matches.len();
    rank(&mut matches);
    check_ranked(&matches);

    let mut dropped = 0;
    let mut results = Vec::with_capacity(matches.len());
    for m in &matches {
        let Some(entry) = index.get(m.doc_id) else {
            continue;
        };
        match render_match(entry, m, query, &folded_query, config) {
            Some(row) => results.push(row),
            None => {
                dropped += 1;
                debug!(url = %m.document.url, "dropping content match without a literal excerpt");
            }
        }
    }
    if let Some(limit) = config.limit {
        results.truncate(limit);
    }
    check_rendered(&results);

    debug!(
        query,
        documents = index.len(),
        candidates,
        dropped,
        shown = results.len(),
        "search"
    );
    SearchOutcome::results(query, results)
}

/// Score every entry in index order, keeping positive scores.
fn score_all<'a>(index: &'a SearchIndex, folded_query: &str) -> Vec<ScoredMatch<'a>> {
    index
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(doc_id, entry)| {
            let s = score_folded(
                entry.folded_title().as_str(),
                entry.folded_content().as_str(),
                folded_query,
            );
            check_score_consistent(&s);
            s.is_match().then_some(ScoredMatch {
                doc_id,
                document: entry.document(),
                score: s.score,
                location: s.location,
            })
        })
        .collect()
}

fn render_match(
    entry: &IndexEntry,
    m: &ScoredMatch<'_>,
    query: &str,
    folded_query: &str,
    config: &SearchConfig,
) -> Option<RenderedResult> {
    let document = entry.document();
    let location = m.location?;

    let excerpt_html = match location {
        MatchLocation::Title => Some(title_excerpt(&document.content, config.title_excerpt_chars)),
        MatchLocation::Content => {
            let excerpt = extract_folded(
                &document.content,
                entry.folded_content(),
                folded_query,
                config.context_length,
            );
            if excerpt.is_empty() {
                return None;
            }
            Some(highlight_with(&excerpt, query, &config.highlight))
        }
    };

    Some(RenderedResult {
        title_html: highlight_folded(
            &document.title,
            entry.folded_title(),
            folded_query,
            &config.highlight,
        ),
        excerpt_html,
        href: search_href(&document.url, &config.fragment_param, query),
        score: m.score,
        location,
    })
}

/// Opening of the content, shown under a title match. Not highlighted.
///
/// Always present: empty content previews as a bare ellipsis.
pub fn title_excerpt(content: &str, max_chars: usize) -> String {
    let mut excerpt: String = content.chars().take(max_chars).collect();
    excerpt.push_str("...");
    excerpt
}

// =============================================================================
// ENGINE INSTANCE
// =============================================================================

/// A search surface's state: settings, the index lifecycle, and the one
/// pending debounced query.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: SearchConfig,
    index: IndexState,
    debouncer: Debouncer,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        let debouncer = Debouncer::new(config.debounce_ms);
        Self {
            config,
            index: IndexState::Unloaded,
            debouncer,
        }
    }

    /// An engine whose index is already loaded.
    pub fn with_index(config: SearchConfig, index: SearchIndex) -> Self {
        let mut engine = Self::new(config);
        engine.index = IndexState::Ready(index);
        engine
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index_state(&self) -> &IndexState {
        &self.index
    }

    /// Mark the index fetch as in flight. Searches still see nothing.
    pub fn begin_loading(&mut self) {
        self.index = IndexState::Loading;
    }

    pub fn load_documents(&mut self, documents: Vec<Document>) -> usize {
        let index = SearchIndex::new(documents);
        let count = index.len();
        info!(documents = count, "search index loaded");
        self.index = IndexState::Ready(index);
        count
    }

    /// Parse and install an index. On failure the engine is left in the
    /// failed state and keeps answering with zero results.
    pub fn load_json(&mut self, json: &str) -> Result<usize> {
        self.install(SearchIndex::from_json(json))
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.install(SearchIndex::from_path(path))
    }

    fn install(&mut self, loaded: Result<SearchIndex>) -> Result<usize> {
        match loaded {
            Ok(index) => {
                let count = index.len();
                info!(documents = count, "search index loaded");
                self.index = IndexState::Ready(index);
                Ok(count)
            }
            Err(err) => {
                self.fail_loading(err.to_string());
                Err(err)
            }
        }
    }

    pub fn fail_loading(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "search index failed to load");
        self.index = IndexState::Failed(reason);
    }

    pub fn search(&self, input: &str) -> SearchOutcome {
        search_with(input, self.index.index(), &self.config)
    }

    /// A keystroke. Replaces any pending search; the host fires the ticket
    /// when its timer elapses.
    pub fn on_input(&mut self, value: impl Into<String>, now_ms: u64) -> DebounceTicket {
        self.debouncer.schedule(value, now_ms)
    }

    /// Timer callback for a ticket. Stale tickets yield nothing.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<SearchOutcome> {
        let value = self.debouncer.fire(ticket)?;
        Some(self.search(&value))
    }

    /// Run the pending search if its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<SearchOutcome> {
        let value = self.debouncer.poll(now_ms)?;
        Some(self.search(&value))
    }

    /// Explicit submit: search now and forget any pending keystroke.
    pub fn confirm(&mut self, value: &str) -> SearchOutcome {
        self.debouncer.cancel();
        self.search(value)
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Cancel the pending search and drop the index.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
        self.index = IndexState::Unloaded;
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
