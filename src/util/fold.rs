// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive literal matching with offsets in the original text.
//!
//! Lowercasing is not length-preserving: `İ` folds to two chars, `K` (Kelvin
//! sign) folds from three bytes to one. Searching the folded copy is easy;
//! the hard part is cutting the *original* string at the right place so the
//! casing the user sees is preserved. [`FoldedText`] keeps one span per
//! folded char pointing back at the original char it came from.
//!
//! The needle is never interpreted: no pattern syntax, no escaping needed.
//! `a.b*` matches the five literal characters `a.b*`.

use std::ops::Range;

/// Fold a string the same way [`FoldedText`] does (per char, no context).
///
/// `str::to_lowercase` special-cases a final sigma; folding per char keeps
/// needle and haystack consistent.
pub fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FoldSpan {
    /// Byte offset of this folded char in `FoldedText::folded`.
    folded_start: usize,
    /// Byte range of the originating char in the original text.
    original_start: usize,
    original_end: usize,
}

/// A lowercased copy of a string that remembers where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldedText {
    folded: String,
    spans: Vec<FoldSpan>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut spans = Vec::with_capacity(text.len());
        for (start, c) in text.char_indices() {
            let end = start + c.len_utf8();
            for lower in c.to_lowercase() {
                spans.push(FoldSpan {
                    folded_start: folded.len(),
                    original_start: start,
                    original_end: end,
                });
                folded.push(lower);
            }
        }
        Self { folded, spans }
    }

    /// The folded text itself.
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    fn span_at(&self, folded_byte: usize) -> Option<&FoldSpan> {
        // Spans are strictly increasing by folded_start.
        let after = self.spans.partition_point(|s| s.folded_start <= folded_byte);
        after.checked_sub(1).map(|i| &self.spans[i])
    }

    /// Map a byte range of the folded text back onto the original text.
    ///
    /// A range that starts or ends inside a multi-char expansion widens to
    /// cover the whole original char.
    pub fn to_original(&self, range: Range<usize>) -> Option<Range<usize>> {
        if range.is_empty() || range.end > self.folded.len() {
            return None;
        }
        let first = self.span_at(range.start)?;
        let last = self.span_at(range.end - 1)?;
        Some(first.original_start..last.original_end)
    }

    /// First occurrence of an already-folded needle, as an original byte range.
    ///
    /// An empty needle has no occurrence.
    pub fn find(&self, folded_needle: &str) -> Option<Range<usize>> {
        if folded_needle.is_empty() {
            return None;
        }
        let start = self.folded.find(folded_needle)?;
        self.to_original(start..start + folded_needle.len())
    }

    /// All non-overlapping occurrences, left to right, as original byte ranges.
    pub fn match_ranges(&self, folded_needle: &str) -> Vec<Range<usize>> {
        if folded_needle.is_empty() {
            return Vec::new();
        }
        let mut ranges = Vec::new();
        let mut last_end = 0;
        for (start, hit) in self.folded.match_indices(folded_needle) {
            if let Some(range) = self.to_original(start..start + hit.len()) {
                // Two folded hits inside one expanding char would map onto the
                // same original range.
                if range.start >= last_end {
                    last_end = range.end;
                    ranges.push(range);
                }
            }
        }
        ranges
    }
}

/// First case-insensitive occurrence of `needle` in `haystack`.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    FoldedText::new(haystack).find(&fold(needle))
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}
