//! Property tests over whole searches.

use glimmer::{search, Document, MatchLocation, SearchIndex};
use proptest::prelude::*;

fn words(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c]{1,5}", 0..max).prop_map(|w| w.join(" "))
}

fn index() -> impl Strategy<Value = SearchIndex> {
    prop::collection::vec((words(3), words(12)), 0..12).prop_map(|pages| {
        pages
            .into_iter()
            .enumerate()
            .map(|(id, (title, content))| Document::new(title, content, format!("/doc/{}/", id)))
            .collect()
    })
}

/// Recover the index position from `/doc/{id}/#...`.
fn doc_id(href: &str) -> usize {
    href.split('/').nth(2).and_then(|s| s.parse().ok()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Scores never increase down the list; equal scores keep index order.
    #[test]
    fn prop_sorted_and_stable(index in index(), query in "[a-c]{2,3}") {
        let outcome = search(&query, &index);
        for pair in outcome.rendered().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(doc_id(&pair[0].href) < doc_id(&pair[1].href));
            }
        }
    }

    /// Title matches are listed before content matches.
    #[test]
    fn prop_titles_first(index in index(), query in "[a-c]{2,3}") {
        let outcome = search(&query, &index);
        let locations: Vec<MatchLocation> = outcome.rendered().iter().map(|r| r.location).collect();
        let first_content = locations.iter().position(|l| *l == MatchLocation::Content);
        if let Some(pos) = first_content {
            prop_assert!(locations[pos..].iter().all(|l| *l == MatchLocation::Content));
        }
    }

    /// Every content row shows the query highlighted.
    #[test]
    fn prop_content_rows_have_marks(index in index(), query in "[a-c]{2,3}") {
        let outcome = search(&query, &index);
        for row in outcome.rendered() {
            if row.location == MatchLocation::Content {
                let excerpt = row.excerpt_html.as_deref().unwrap_or_default();
                prop_assert!(excerpt.contains("<mark>"), "{:?}", row);
            }
        }
    }

    /// Each document appears at most once and only if it scored.
    #[test]
    fn prop_rows_unique(index in index(), query in "[a-c]{2,3}") {
        let outcome = search(&query, &index);
        let mut ids: Vec<usize> = outcome.rendered().iter().map(|r| doc_id(&r.href)).collect();
        prop_assert!(outcome.rendered().iter().all(|r| r.score > 0));
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), outcome.rendered().len());
        prop_assert!(ids.len() <= index.len());
    }
}
