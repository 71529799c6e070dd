// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpts: a window of content around the first literal hit.
//!
//! ```text
//!            context            query           context
//!   ...ing a |<--- 60 chars --->|match|<--- 60 chars --->| wh...
//!          ^ cut back to a word start        cut back to a word end ^
//! ```
//!
//! Lengths are counted in chars, not bytes, so multi-byte text gets the same
//! amount of context as ASCII.
//!
//! Extraction only accepts a literal (case-insensitive) occurrence. A document
//! that matched through the subsequence fallback has nothing to center on, so
//! it gets an empty excerpt, and the engine drops it.

use crate::util::fold::{fold, FoldedText};

/// Default characters of context on each side of the match.
pub const DEFAULT_CONTEXT_LENGTH: usize = 60;

/// Marker for text cut off at either end.
pub const ELLIPSIS: &str = "...";

/// A partial word is only trimmed when a space shows up this close to the cut.
const WORD_BOUNDARY_WINDOW: usize = 20;

/// Excerpt of `content` around the first case-insensitive occurrence of `query`.
///
/// Returns an empty string when there is no literal occurrence (or the query
/// is empty).
///
/// # Example
///
/// ```
/// use glimmer::extract;
///
/// let excerpt = extract("The quick brown fox jumps over the lazy dog", "fox", 5);
/// assert_eq!(excerpt, "...fox...");
/// assert_eq!(extract("The quick brown fox", "qbf", 60), "");
/// ```
pub fn extract(content: &str, query: &str, context_length: usize) -> String {
    extract_folded(content, &FoldedText::new(content), &fold(query), context_length)
}

/// [`extract`] with index-time folding already done.
pub fn extract_folded(
    content: &str,
    folded_content: &FoldedText,
    folded_query: &str,
    context_length: usize,
) -> String {
    let Some(hit) = folded_content.find(folded_query) else {
        return String::new();
    };

    let chars: Vec<char> = content.chars().collect();
    let match_start = content[..hit.start].chars().count();
    let match_len = content[hit].chars().count();

    let start = match_start.saturating_sub(context_length);
    let end = (match_start + match_len + context_length).min(chars.len());
    let cut_head = start > 0;
    let cut_tail = end < chars.len();

    let mut snippet: Vec<char> = Vec::with_capacity(end - start + 2 * ELLIPSIS.len());
    if cut_head {
        snippet.extend(ELLIPSIS.chars());
    }
    snippet.extend_from_slice(&chars[start..end]);
    if cut_tail {
        snippet.extend(ELLIPSIS.chars());
    }

    if cut_head {
        snippet = trim_partial_head(snippet);
    }
    if cut_tail {
        snippet = trim_partial_tail(snippet);
    }

    snippet.into_iter().collect::<String>().trim().to_string()
}

/// `...own fox` → `...fox`, if the first space after the ellipsis is close.
fn trim_partial_head(snippet: Vec<char>) -> Vec<char> {
    let marker = ELLIPSIS.chars().count();
    let first_space = snippet
        .iter()
        .skip(marker)
        .position(|&c| c == ' ')
        .map(|p| p + marker);

    match first_space {
        Some(pos) if pos < WORD_BOUNDARY_WINDOW => ELLIPSIS
            .chars()
            .chain(snippet[pos + 1..].iter().copied())
            .collect(),
        _ => snippet,
    }
}

/// `fox jum...` → `fox...`, if the last space before the ellipsis is close.
fn trim_partial_tail(snippet: Vec<char>) -> Vec<char> {
    let marker = ELLIPSIS.chars().count();
    let len = snippet.len();
    if len == 0 {
        return snippet;
    }
    // Search backwards from just before the trailing ellipsis.
    let from = len.saturating_sub(marker + 1).min(len - 1);
    let last_space = snippet[..=from].iter().rposition(|&c| c == ' ');

    match last_space {
        Some(pos) if pos + WORD_BOUNDARY_WINDOW > len => snippet[..pos]
            .iter()
            .copied()
            .chain(ELLIPSIS.chars())
            .collect(),
        _ => snippet,
    }
}
