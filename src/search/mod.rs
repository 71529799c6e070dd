// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query in, rendered rows out.
//!
//! The pieces run in this order for every query that clears the length gate:
//! score each document, rank, cut an excerpt, highlight, render. The engine
//! in [`engine`] strings them together; the other modules are usable alone.

pub mod debounce;
pub mod engine;
pub mod highlight;
pub mod render;
pub mod snippet;

pub use debounce::{DebounceTicket, Debouncer};
pub use engine::{search, search_with, title_excerpt, SearchEngine};
pub use highlight::{highlight, highlight_with};
pub use render::{render, ResultsView};
pub use snippet::extract;
