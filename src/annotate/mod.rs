// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting the query on the page a result links to.
//!
//! A results link carries the query in its fragment (`/page/#search=fern`).
//! On arrival, [`PageAnnotator::annotate`] reads it, strips the fragment from
//! the address bar without navigating, finds the first occurrence in the most
//! specific container that has one, and wraps it. The wrapper then runs its
//! [timeline](schedule): scroll into view, fade, remove.
//!
//! Only the first occurrence on the page is marked.

pub mod schedule;
pub mod tree;

pub use schedule::{AnnotationSchedule, AnnotationStep};
pub use tree::{
    find_first_match, find_in_containers, HighlightSurface, NodeId, PageElement, PageTree,
    ScanRules, TextHit, TextTree,
};

use crate::config::{AnnotatorConfig, SearchConfig};
use crate::util::fold::fold;
use crate::util::url::{fragment_param, without_fragment};
use tracing::trace;

/// The address bar, as far as annotation cares.
pub trait LocationBar {
    /// Current fragment including the leading `#`, or empty.
    fn fragment(&self) -> String;

    /// Drop the fragment from the visible URL without navigating.
    fn strip_fragment(&mut self);
}

/// A [`LocationBar`] that only records what happened to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    pub pathname: String,
    pub search: String,
    pub hash: String,
    /// Every URL passed to a history replace, oldest first.
    pub replaced: Vec<String>,
}

impl MemoryLocation {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
            hash: hash.into(),
            replaced: Vec::new(),
        }
    }
}

impl LocationBar for MemoryLocation {
    fn fragment(&self) -> String {
        self.hash.clone()
    }

    fn strip_fragment(&mut self) {
        self.replaced.push(without_fragment(&self.pathname, &self.search));
        self.hash.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotateOutcome {
    /// No usable query in the fragment; the page was left alone.
    NoQuery,
    /// The query is not on the page.
    NoMatch { query: String },
    /// The first occurrence was wrapped inside `container`.
    Highlighted { query: String, container: String },
    /// This annotator already ran for the current page.
    AlreadyRan,
}

#[derive(Debug)]
struct ActiveHighlight<H> {
    handle: H,
    schedule: AnnotationSchedule,
}

/// Annotates one page load.
pub struct PageAnnotator<S: HighlightSurface> {
    fragment_param: String,
    config: AnnotatorConfig,
    rules: ScanRules,
    ran: bool,
    active: Option<ActiveHighlight<S::Handle>>,
}

impl<S: HighlightSurface> PageAnnotator<S> {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            fragment_param: config.fragment_param.clone(),
            config: config.annotator.clone(),
            rules: ScanRules::from_config(&config.annotator),
            ran: false,
            active: None,
        }
    }

    /// Read the query from `location`, then highlight its first occurrence.
    pub fn annotate<L: LocationBar>(
        &mut self,
        surface: &mut S,
        location: &mut L,
        now_ms: u64,
    ) -> AnnotateOutcome {
        if self.ran {
            return AnnotateOutcome::AlreadyRan;
        }
        self.ran = true;

        let Some(query) = fragment_param(&location.fragment(), &self.fragment_param) else {
            return AnnotateOutcome::NoQuery;
        };
        location.strip_fragment();

        let query = query.trim().to_string();
        let Some((container, hit)) =
            find_in_containers(&*surface, &self.config.containers, &fold(&query), &self.rules)
        else {
            trace!(%query, "query not found on page");
            return AnnotateOutcome::NoMatch { query };
        };
        let container = container.to_string();

        let Some(handle) = surface.wrap_match(&hit, &self.config.wrapper_class, &self.config.mark_class)
        else {
            return AnnotateOutcome::NoMatch { query };
        };
        trace!(%query, %container, "highlighted first occurrence");
        self.active = Some(ActiveHighlight {
            handle,
            schedule: AnnotationSchedule::new(now_ms, &self.config),
        });
        AnnotateOutcome::Highlighted { query, container }
    }

    /// Apply every step due at `now_ms`. Returns the steps that were due,
    /// whether or not their target was still attached.
    pub fn tick(&mut self, surface: &mut S, now_ms: u64) -> Vec<AnnotationStep> {
        let Some(active) = self.active.as_mut() else {
            return Vec::new();
        };
        let due = active.schedule.due(now_ms);
        for &step in &due {
            let applied = match step {
                AnnotationStep::Scroll => surface.scroll_into_view(&active.handle),
                AnnotationStep::Fade => surface.begin_fade(&active.handle, &self.config.fade_class),
                AnnotationStep::Remove => surface.unwrap(&active.handle),
            };
            trace!(?step, applied, "annotation step");
        }
        if active.schedule.is_finished() {
            self.active = None;
        }
        due
    }

    /// When [`tick`](Self::tick) next has work, if ever.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.active.as_ref().and_then(|a| a.schedule.next_due_ms())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Cancel remaining steps. The page is left as it is.
    pub fn teardown(&mut self) {
        if let Some(mut active) = self.active.take() {
            let dropped = active.schedule.cancel();
            trace!(dropped, "annotation cancelled");
        }
    }
}
