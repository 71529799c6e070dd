// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first. Equal scores keep index order, which is the order the
//! site author listed pages in. That tiebreak comes from the sort being
//! stable, not from comparing `doc_id`, so callers must feed matches in index
//! order.

use crate::types::ScoredMatch;
use std::cmp::Ordering;

/// Compare two matches for ranking: descending by score only.
///
/// Equal scores compare `Equal` so a stable sort leaves them in input order.
pub fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Sort matches in place, best first, ties in input order.
pub fn rank(matches: &mut [ScoredMatch<'_>]) {
    // slice::sort_by is stable.
    matches.sort_by(compare_matches);
}
