//! Property tests for excerpt extraction.

use glimmer::extract;
use proptest::prelude::*;

fn content() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-f]{1,8}", 0..40).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// An excerpt exists exactly when the query occurs literally.
    #[test]
    fn prop_nonempty_iff_literal(content in content(), query in "[a-f]{1,3}", ctx in 0usize..80) {
        let excerpt = extract(&content, &query, ctx);
        prop_assert_eq!(!excerpt.is_empty(), content.contains(&query));
    }

    /// With enough context, word trimming never eats into the match.
    #[test]
    fn prop_excerpt_contains_query(content in content(), query in "[a-f]{1,3}", ctx in 20usize..80) {
        let excerpt = extract(&content, &query, ctx);
        if content.contains(&query) {
            prop_assert!(excerpt.contains(&query), "{:?} not in {:?}", query, excerpt);
        }
    }

    /// Context plus match plus two ellipses is the ceiling.
    #[test]
    fn prop_length_bounded(content in content(), query in "[a-f]{1,3}", ctx in 0usize..80) {
        let excerpt = extract(&content, &query, ctx);
        prop_assert!(excerpt.chars().count() <= 2 * ctx + query.chars().count() + 6);
    }

    /// A leading ellipsis means text before the window was cut.
    #[test]
    fn prop_head_ellipsis_marks_cut(content in content(), query in "[a-f]{1,3}", ctx in 0usize..80) {
        let excerpt = extract(&content, &query, ctx);
        if let Some(start) = content.find(&query) {
            prop_assert_eq!(excerpt.starts_with("..."), start > ctx);
        }
    }

    /// Short content is returned whole.
    #[test]
    fn prop_short_content_whole(content in "[a-f ]{0,30}", query in "[a-f]{1,2}") {
        let excerpt = extract(&content, &query, 60);
        if content.contains(&query) {
            prop_assert_eq!(excerpt, content.trim());
        }
    }
}
