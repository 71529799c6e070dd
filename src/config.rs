// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search and annotation settings.
//!
//! Every field has a default matching the stock site theme, so an empty JSON
//! object (or no config at all) gives the standard behavior. Keys are
//! camelCase because the same struct is deserialized from JavaScript options.

use crate::error::{GlimmerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level settings for a search surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Trimmed queries shorter than this show the hint instead of scoring.
    pub min_query_chars: usize,
    /// Characters of context kept on each side of a content match.
    pub context_length: usize,
    /// Length of the content preview shown under title matches.
    pub title_excerpt_chars: usize,
    /// Quiet period after the last keystroke before searching.
    pub debounce_ms: u64,
    /// Fragment key carrying the query to the destination page.
    pub fragment_param: String,
    pub hint_message: String,
    /// Cap on rendered rows, applied after unrenderable matches are dropped.
    pub limit: Option<usize>,
    pub highlight: HighlightConfig,
    pub annotator: AnnotatorConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            context_length: 60,
            title_excerpt_chars: 80,
            debounce_ms: 300,
            fragment_param: "search".to_string(),
            hint_message: "Type at least 2 characters to search...".to_string(),
            limit: None,
            highlight: HighlightConfig::default(),
            annotator: AnnotatorConfig::default(),
        }
    }
}

/// Markers wrapped around matches in the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightConfig {
    pub open_tag: String,
    pub close_tag: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            open_tag: "<mark>".to_string(),
            close_tag: "</mark>".to_string(),
        }
    }
}

/// Settings for highlighting the query on the destination page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotatorConfig {
    /// Candidate containers, most specific first. Simple `tag` or `.class`
    /// selectors.
    pub containers: Vec<String>,
    /// Elements whose text is never scanned.
    pub skip_tags: Vec<String>,
    pub wrapper_class: String,
    pub mark_class: String,
    pub fade_class: String,
    /// Delay before scrolling the match into view.
    pub scroll_delay_ms: u64,
    /// How long the highlight stays before fading, counted from the scroll.
    pub fade_delay_ms: u64,
    /// Length of the fade before the wrapper is removed.
    pub remove_delay_ms: u64,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            containers: vec!["main".to_string(), ".content".to_string(), "body".to_string()],
            skip_tags: vec!["script".to_string(), "style".to_string()],
            wrapper_class: "search-highlight-container".to_string(),
            mark_class: "search-highlight-text".to_string(),
            fade_class: "search-highlight-fade".to_string(),
            scroll_delay_ms: 300,
            fade_delay_ms: 5000,
            remove_delay_ms: 500,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json).map_err(GlimmerError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| GlimmerError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Reject settings that would make the pipeline misbehave rather than
    /// merely look different.
    pub fn validate(&self) -> Result<()> {
        if self.min_query_chars == 0 {
            return Err(GlimmerError::InvalidConfig(
                "minQueryChars must be at least 1".to_string(),
            ));
        }
        if self.fragment_param.is_empty() {
            return Err(GlimmerError::InvalidConfig(
                "fragmentParam must not be empty".to_string(),
            ));
        }
        if self.annotator.containers.iter().all(|c| c.trim().is_empty()) {
            return Err(GlimmerError::InvalidConfig(
                "annotator.containers needs at least one selector".to_string(),
            ));
        }
        if self.highlight.open_tag.is_empty() != self.highlight.close_tag.is_empty() {
            return Err(GlimmerError::InvalidConfig(
                "highlight tags must both be set or both be empty".to_string(),
            ));
        }
        Ok(())
    }
}
