//! SearchEngine load, debounce, confirm, and teardown.

use crate::common::{garden_index, make_doc};
use glimmer::{SearchConfig, SearchEngine, SearchOutcome};

fn ready_engine() -> SearchEngine {
    SearchEngine::with_index(SearchConfig::default(), garden_index())
}

#[test]
fn test_search_before_index_arrives_is_empty() {
    let mut engine = SearchEngine::default();
    assert_eq!(engine.index_state().label(), "unloaded");
    assert!(engine.search("ferns").rendered().is_empty());

    engine.begin_loading();
    assert!(engine.search("ferns").rendered().is_empty());

    engine.load_documents(vec![make_doc(0, "Ferns", "green")]);
    assert_eq!(engine.search("ferns").rendered().len(), 1);
}

#[test]
fn test_failed_load_keeps_answering() {
    let mut engine = SearchEngine::default();
    engine.begin_loading();
    engine.fail_loading("HTTP 404");
    assert_eq!(engine.index_state().label(), "failed");
    let outcome = engine.search("ferns");
    assert!(matches!(outcome, SearchOutcome::Results { .. }));
    assert!(outcome.rendered().is_empty());
}

#[test]
fn test_three_quick_inputs_search_once_with_last_value() {
    let mut engine = ready_engine();
    engine.on_input("s", 0);
    engine.on_input("su", 120);
    engine.on_input("succulents", 240);

    let mut searches = Vec::new();
    for now in (0..2_000).step_by(10) {
        if let Some(outcome) = engine.poll(now) {
            searches.push(outcome);
        }
    }
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].rendered()[0].href, "/doc/2/#search=succulents");
}

#[test]
fn test_stale_tickets_do_nothing() {
    let mut engine = ready_engine();
    let first = engine.on_input("fe", 0);
    let second = engine.on_input("fer", 10);
    assert!(engine.fire(first).is_none());
    assert!(engine.fire(second).is_some());
}

#[test]
fn test_confirm_searches_now_and_cancels_pending() {
    let mut engine = ready_engine();
    let ticket = engine.on_input("fe", 0);
    let outcome = engine.confirm("ferns");
    assert!(!outcome.rendered().is_empty());
    assert!(engine.fire(ticket).is_none());
    assert!(engine.poll(u64::MAX).is_none());
}

#[test]
fn test_teardown() {
    let mut engine = ready_engine();
    engine.on_input("ferns", 0);
    engine.teardown();
    assert!(!engine.has_pending());
    assert!(engine.search("ferns").rendered().is_empty());
}
