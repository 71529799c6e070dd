//! Destination-page annotation over the in-memory page tree.

use crate::common::sample_page;
use glimmer::annotate::{AnnotationStep, PageTree, TextTree};
use glimmer::{AnnotateOutcome, MemoryLocation, PageAnnotator, SearchConfig};

fn annotator() -> PageAnnotator<PageTree> {
    PageAnnotator::new(&SearchConfig::default())
}

fn location(hash: &str) -> MemoryLocation {
    MemoryLocation::new("/guide/watering/", "?lang=en", hash)
}

#[test]
fn test_highlights_first_occurrence_in_main() {
    let mut page = sample_page();
    let mut loc = location("#search=ferns");
    let outcome = annotator().annotate(&mut page, &mut loc, 0);

    assert_eq!(
        outcome,
        AnnotateOutcome::Highlighted {
            query: "ferns".to_string(),
            container: "main".to_string()
        }
    );
    let marks = page.find_by_class("search-highlight-text");
    assert_eq!(marks.len(), 1);
    assert_eq!(page.text_content(marks[0]), "ferns");
    // The nav mention comes first in the document but is outside main.
    assert!(page.to_html().contains("<nav>Home Ferns Succulents</nav>"));
}

#[test]
fn test_text_is_preserved_around_the_mark() {
    let mut page = sample_page();
    let before = page.text_content(page.root());
    annotator().annotate(&mut page, &mut location("#search=ferns"), 0);
    assert_eq!(page.text_content(page.root()), before);
}

#[test]
fn test_falls_back_to_later_containers() {
    let mut page = sample_page();
    let outcome = annotator().annotate(&mut page, &mut location("#search=moss"), 0);
    assert_eq!(
        outcome,
        AnnotateOutcome::Highlighted {
            query: "moss".to_string(),
            container: "body".to_string()
        }
    );
}

#[test]
fn test_script_text_is_never_matched() {
    let mut page = sample_page();
    let outcome = annotator().annotate(&mut page, &mut location("#search=const"), 0);
    assert_eq!(
        outcome,
        AnnotateOutcome::NoMatch {
            query: "const".to_string()
        }
    );
    assert!(page.find_by_class("search-highlight-container").is_empty());
}

#[test]
fn test_fragment_is_stripped_without_navigation() {
    let mut page = sample_page();
    let mut loc = location("#search=ferns");
    annotator().annotate(&mut page, &mut loc, 0);
    assert_eq!(loc.hash, "");
    assert_eq!(loc.replaced, vec!["/guide/watering/?lang=en".to_string()]);
}

#[test]
fn test_no_query_leaves_everything_alone() {
    let mut page = sample_page();
    let html = page.to_html();
    let mut loc = location("#section-2");
    assert_eq!(annotator().annotate(&mut page, &mut loc, 0), AnnotateOutcome::NoQuery);
    assert_eq!(page.to_html(), html);
    assert_eq!(loc.hash, "#section-2");
    assert!(loc.replaced.is_empty());
}

#[test]
fn test_blank_query_strips_fragment_and_matches_nothing() {
    let mut page = sample_page();
    let html = page.to_html();
    let mut loc = location("#search=%20");
    let outcome = annotator().annotate(&mut page, &mut loc, 0);
    assert_eq!(
        outcome,
        AnnotateOutcome::NoMatch {
            query: String::new()
        }
    );
    assert_eq!(loc.hash, "");
    assert_eq!(loc.replaced.len(), 1);
    assert_eq!(page.to_html(), html);
}

#[test]
fn test_runs_once_per_page() {
    let mut page = sample_page();
    let mut annotator = annotator();
    annotator.annotate(&mut page, &mut location("#search=ferns"), 0);
    let again = annotator.annotate(&mut page, &mut location("#search=ferns"), 0);
    assert_eq!(again, AnnotateOutcome::AlreadyRan);
    assert_eq!(page.find_by_class("search-highlight-text").len(), 1);
}

#[test]
fn test_timeline_scroll_fade_remove() {
    let mut page = sample_page();
    let mut annotator = annotator();
    annotator.annotate(&mut page, &mut location("#search=moist"), 1_000);

    assert!(annotator.tick(&mut page, 1_299).is_empty());
    assert_eq!(annotator.tick(&mut page, 1_300), vec![AnnotationStep::Scroll]);
    assert_eq!(page.scrolled().len(), 1);

    assert_eq!(annotator.next_due_ms(), Some(6_300));
    assert_eq!(annotator.tick(&mut page, 6_300), vec![AnnotationStep::Fade]);
    assert_eq!(page.find_by_class("search-highlight-fade").len(), 1);

    assert_eq!(annotator.tick(&mut page, 6_800), vec![AnnotationStep::Remove]);
    assert!(!annotator.is_active());
    assert!(page.find_by_class("search-highlight-container").is_empty());
    assert!(page.to_html().contains("<em>moist</em>"));
}

#[test]
fn test_steps_tolerate_replaced_content() {
    let mut page = sample_page();
    let mut annotator = annotator();
    annotator.annotate(&mut page, &mut location("#search=ferns"), 0);

    let main = page.select("main").unwrap();
    page.detach(main);

    let steps = annotator.tick(&mut page, 10_000);
    assert_eq!(
        steps,
        vec![AnnotationStep::Scroll, AnnotationStep::Fade, AnnotationStep::Remove]
    );
    assert!(page.scrolled().is_empty());
    assert!(!annotator.is_active());
}

#[test]
fn test_teardown_cancels_pending_steps() {
    let mut page = sample_page();
    let mut annotator = annotator();
    annotator.annotate(&mut page, &mut location("#search=ferns"), 0);
    annotator.teardown();
    assert!(annotator.tick(&mut page, 10_000).is_empty());
    assert_eq!(page.find_by_class("search-highlight-text").len(), 1);
}
