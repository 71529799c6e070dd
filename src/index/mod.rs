// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded document index.
//!
//! The builder ships a JSON array of `{title, content, url}` records. Loading
//! folds every title and content once, so a query only pays for its own
//! folding and the substring scans.
//!
//! Order is significant: a document's position is its identity and the
//! tiebreaker for equal scores.

mod state;

pub use state::IndexState;

use crate::error::{GlimmerError, Result};
use crate::types::Document;
use crate::util::fold::FoldedText;
use std::fs;
use std::path::Path;

/// A document plus its index-time folded fields.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    document: Document,
    title: FoldedText,
    content: FoldedText,
}

impl IndexEntry {
    pub fn new(document: Document) -> Self {
        let title = FoldedText::new(&document.title);
        let content = FoldedText::new(&document.content);
        Self {
            document,
            title,
            content,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn folded_title(&self) -> &FoldedText {
        &self.title
    }

    pub fn folded_content(&self) -> &FoldedText {
        &self.content
    }
}

/// Ordered, read-only collection of searchable documents.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn new(documents: Vec<Document>) -> Self {
        documents.into_iter().collect()
    }

    /// Parse the builder's JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        let documents: Vec<Document> =
            serde_json::from_str(json).map_err(GlimmerError::IndexParse)?;
        Ok(Self::new(documents))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| GlimmerError::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn get(&self, doc_id: usize) -> Option<&IndexEntry> {
        self.entries.get(doc_id)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.entries.iter().map(IndexEntry::document)
    }
}

impl FromIterator<Document> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(IndexEntry::new).collect(),
        }
    }
}
