// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the index is in its load lifecycle.
//!
//! The index arrives asynchronously and can lose the race against the first
//! keystroke, or never arrive at all. Every state other than `Ready` searches
//! like an empty index.

use super::SearchIndex;

#[derive(Debug, Clone, Default)]
pub enum IndexState {
    /// Nothing requested yet (or torn down).
    #[default]
    Unloaded,
    /// Fetch in flight.
    Loading,
    Ready(SearchIndex),
    /// Fetch or parse failed; the reason is kept for diagnostics.
    Failed(String),
}

impl IndexState {
    /// The index, if it finished loading.
    pub fn index(&self) -> Option<&SearchIndex> {
        match self {
            IndexState::Ready(index) => Some(index),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, IndexState::Ready(_))
    }

    /// Short label for logs and the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            IndexState::Unloaded => "unloaded",
            IndexState::Loading => "loading",
            IndexState::Ready(_) => "ready",
            IndexState::Failed(_) => "failed",
        }
    }
}
