// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for glimmer.
//!
//! This is the browser-facing API. Two entry points:
//!
//! ```js
//! const search = new GlimmerSearch({ debounceMs: 300 });
//! search.mount("main-search-input", "main-search-results");
//! await search.fetchIndex("/search-index.json");
//!
//! // on every page load
//! annotatePage();
//! ```
//!
//! Timers are `setTimeout` handles; the engine itself only sees millisecond
//! timestamps from `Date.now()`.

use crate::annotate::{
    AnnotateOutcome, HighlightSurface, LocationBar, PageAnnotator, TextHit, TextTree,
};
use crate::config::SearchConfig;
use crate::search::{render, SearchEngine};
use crate::types::SearchOutcome;
use crate::util::url::without_fragment;
use js_sys::{Function, Promise};
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    Document, Element, Event, HtmlInputElement, KeyboardEvent, Node, Response, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Options object → config. `undefined`/`null` mean defaults.
fn config_from(options: JsValue) -> Result<SearchConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(SearchConfig::default());
    }
    let config: SearchConfig = from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

fn set_timeout(window: &Window, callback: &Function, delay_ms: u64) -> Option<i32> {
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay) {
        Ok(handle) => Some(handle),
        Err(e) => {
            console_error(&format!("setTimeout failed: {:?}", e));
            None
        }
    }
}

fn clear_timer(timer: &Cell<Option<i32>>) {
    if let (Some(handle), Some(window)) = (timer.take(), web_sys::window()) {
        window.clear_timeout_with_handle(handle);
    }
}

async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "HTTP {} fetching {}",
            response.status(),
            url
        )));
    }
    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Write a rendered outcome into the results container.
fn paint(results: &Element, outcome: &SearchOutcome) {
    let view = render(outcome);
    results.set_inner_html(&view.html);
    if let Some(live) = view.aria_live {
        let _ = results.set_attribute("aria-live", live);
    }
    if let Some(label) = &view.aria_label {
        let _ = results.set_attribute("aria-label", label);
    }
}

// ============================================================================
// SEARCH BOX
// ============================================================================

/// Listeners attached by [`GlimmerSearch::mount`]. Dropping detaches them.
struct Mounted {
    input: HtmlInputElement,
    on_input: Closure<dyn FnMut(Event)>,
    on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
    timer: Rc<Cell<Option<i32>>>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        clear_timer(&self.timer);
        let _ = self
            .input
            .remove_event_listener_with_callback("input", self.on_input.as_ref().unchecked_ref());
        let _ = self.input.remove_event_listener_with_callback(
            "keydown",
            self.on_keydown.as_ref().unchecked_ref(),
        );
    }
}

/// A search box: engine state plus its DOM wiring.
#[wasm_bindgen]
pub struct GlimmerSearch {
    engine: Rc<RefCell<SearchEngine>>,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl GlimmerSearch {
    /// Create a search box. `options` is a partial config object.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<GlimmerSearch, JsValue> {
        Ok(GlimmerSearch {
            engine: Rc::new(RefCell::new(SearchEngine::new(config_from(options)?))),
            mounted: None,
        })
    }

    /// Fetch and install the index. Resolves to the document count; a failed
    /// load is logged to the console and resolves to 0, leaving searches
    /// empty.
    #[wasm_bindgen(js_name = fetchIndex)]
    pub fn fetch_index(&self, url: String) -> Promise {
        let engine = Rc::clone(&self.engine);
        engine.borrow_mut().begin_loading();
        future_to_promise(async move {
            let count = match fetch_text(&url).await {
                Ok(json) => match engine.borrow_mut().load_json(&json) {
                    Ok(count) => count,
                    Err(e) => {
                        console_error(&format!("Failed to load search index: {}", e));
                        0
                    }
                },
                Err(e) => {
                    let reason = e.as_string().unwrap_or_else(|| format!("{:?}", e));
                    console_error(&format!("Failed to load search index: {}", reason));
                    engine.borrow_mut().fail_loading(reason);
                    0
                }
            };
            Ok(JsValue::from_f64(count as f64))
        })
    }

    /// Install an index from a JSON string. Returns the document count.
    #[wasm_bindgen(js_name = loadIndex)]
    pub fn load_index(&self, json: &str) -> Result<usize, JsValue> {
        self.engine
            .borrow_mut()
            .load_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `"unloaded"`, `"loading"`, `"ready"`, or `"failed"`.
    #[wasm_bindgen(js_name = indexState)]
    pub fn index_state(&self) -> String {
        self.engine.borrow().index_state().label().to_string()
    }

    /// Run a search immediately and return the outcome object.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let outcome = self.engine.borrow().search(query);
        to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Run a search immediately and return the results-list markup.
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, query: &str) -> String {
        render(&self.engine.borrow().search(query)).html
    }

    /// Wire an input and a results container by element id.
    ///
    /// Typing searches after the debounce delay; Enter searches at once.
    /// Returns `false` (and does nothing) if either element is missing.
    pub fn mount(&mut self, input_id: &str, results_id: &str) -> Result<bool, JsValue> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(false);
        };
        let Some(input) = document
            .get_element_by_id(input_id)
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        else {
            return Ok(false);
        };
        let Some(results) = document.get_element_by_id(results_id) else {
            return Ok(false);
        };

        self.mounted = None;
        let timer = Rc::new(Cell::new(None));

        let on_input = {
            let engine = Rc::clone(&self.engine);
            let input = input.clone();
            let results = results.clone();
            let timer = Rc::clone(&timer);
            Closure::wrap(Box::new(move |_event: Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let ticket = engine.borrow_mut().on_input(input.value(), now_ms());
                let delay = engine.borrow().config().debounce_ms;

                let engine = Rc::clone(&engine);
                let results = results.clone();
                let fire = Closure::once_into_js(move || {
                    let outcome = engine.borrow_mut().fire(ticket);
                    if let Some(outcome) = outcome {
                        paint(&results, &outcome);
                    }
                });
                clear_timer(&timer);
                timer.set(set_timeout(&window, fire.unchecked_ref(), delay));
            }) as Box<dyn FnMut(Event)>)
        };

        let on_keydown = {
            let engine = Rc::clone(&self.engine);
            let input = input.clone();
            let results = results.clone();
            let timer = Rc::clone(&timer);
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() != "Enter" {
                    return;
                }
                event.prevent_default();
                clear_timer(&timer);
                let outcome = engine.borrow_mut().confirm(&input.value());
                paint(&results, &outcome);
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };

        input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;

        self.mounted = Some(Mounted {
            input,
            on_input,
            on_keydown,
            timer,
        });
        Ok(true)
    }

    /// Detach listeners, cancel the pending search, and drop the index.
    pub fn teardown(&mut self) {
        self.mounted = None;
        self.engine.borrow_mut().teardown();
    }
}

// ============================================================================
// DESTINATION PAGE
// ============================================================================

/// The live document as a [`TextTree`].
struct DomSurface {
    document: Document,
}

#[derive(Clone)]
struct DomHighlight {
    wrapper: Element,
    mark: Element,
}

impl TextTree for DomSurface {
    type Node = Node;

    fn children(&self, node: &Node) -> Vec<Node> {
        let list = node.child_nodes();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn tag_name(&self, node: &Node) -> Option<String> {
        node.dyn_ref::<Element>().map(|e| e.tag_name().to_lowercase())
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        node.dyn_ref::<Element>()
            .is_some_and(|e| e.class_list().contains(class))
    }

    fn text(&self, node: &Node) -> Option<String> {
        if node.node_type() == Node::TEXT_NODE {
            node.node_value()
        } else {
            None
        }
    }

    fn select(&self, selector: &str) -> Option<Node> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(Node::from)
    }
}

impl HighlightSurface for DomSurface {
    type Handle = DomHighlight;

    fn wrap_match(
        &mut self,
        hit: &TextHit<Node>,
        wrapper_class: &str,
        mark_class: &str,
    ) -> Option<DomHighlight> {
        if !hit.node.is_connected() {
            return None;
        }
        let parent = hit.node.parent_node()?;
        let before = hit.text.get(..hit.range.start)?;
        let matched = hit.text.get(hit.range.clone())?;
        let after = hit.text.get(hit.range.end..)?;

        let wrapper = self.document.create_element("span").ok()?;
        wrapper.set_class_name(wrapper_class);
        if !before.is_empty() {
            wrapper
                .append_child(&self.document.create_text_node(before))
                .ok()?;
        }
        let mark = self.document.create_element("span").ok()?;
        mark.set_class_name(mark_class);
        mark.set_text_content(Some(matched));
        wrapper.append_child(&mark).ok()?;
        if !after.is_empty() {
            wrapper
                .append_child(&self.document.create_text_node(after))
                .ok()?;
        }

        parent.replace_child(&wrapper, &hit.node).ok()?;
        Some(DomHighlight { wrapper, mark })
    }

    fn scroll_into_view(&mut self, handle: &DomHighlight) -> bool {
        if !handle.mark.is_connected() {
            return false;
        }
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        handle
            .mark
            .scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn begin_fade(&mut self, handle: &DomHighlight, fade_class: &str) -> bool {
        handle.mark.is_connected() && handle.mark.class_list().add_1(fade_class).is_ok()
    }

    fn unwrap(&mut self, handle: &DomHighlight) -> bool {
        if !handle.wrapper.is_connected() {
            return false;
        }
        let Some(parent) = handle.wrapper.parent_node() else {
            return false;
        };
        let text = handle.wrapper.text_content().unwrap_or_default();
        let restored = self.document.create_text_node(&text);
        parent.replace_child(&restored, &handle.wrapper).is_ok()
    }
}

struct BrowserLocation {
    window: Window,
}

impl LocationBar for BrowserLocation {
    fn fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn strip_fragment(&mut self) {
        let location = self.window.location();
        let url = without_fragment(
            &location.pathname().unwrap_or_default(),
            &location.search().unwrap_or_default(),
        );
        if let Ok(history) = self.window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
        }
    }
}

type LivePage = Rc<RefCell<(PageAnnotator<DomSurface>, DomSurface)>>;

/// Keep ticking the annotator until its timeline is done.
fn schedule_tick(window: &Window, page: LivePage) {
    let Some(due) = page.borrow().0.next_due_ms() else {
        return;
    };
    let next_window = window.clone();
    let next_page = Rc::clone(&page);
    let tick = Closure::once_into_js(move || {
        {
            let mut guard = next_page.borrow_mut();
            let (annotator, surface) = &mut *guard;
            annotator.tick(surface, now_ms());
        }
        schedule_tick(&next_window, next_page);
    });
    set_timeout(window, tick.unchecked_ref(), due.saturating_sub(now_ms()));
}

/// Highlight the query carried in the URL fragment, if any.
///
/// Returns `"noQuery"`, `"noMatch"`, `"highlighted"`, or `"alreadyRan"`.
#[wasm_bindgen(js_name = annotatePage)]
pub fn annotate_page(options: JsValue) -> Result<String, JsValue> {
    let config = config_from(options)?;
    let Some(window) = web_sys::window() else {
        return Ok("noQuery".to_string());
    };
    let Some(document) = window.document() else {
        return Ok("noQuery".to_string());
    };

    let mut surface = DomSurface { document };
    let mut location = BrowserLocation {
        window: window.clone(),
    };
    let mut annotator = PageAnnotator::new(&config);
    let outcome = annotator.annotate(&mut surface, &mut location, now_ms());

    if annotator.is_active() {
        schedule_tick(&window, Rc::new(RefCell::new((annotator, surface))));
    }

    Ok(match outcome {
        AnnotateOutcome::NoQuery => "noQuery",
        AnnotateOutcome::NoMatch { .. } => "noMatch",
        AnnotateOutcome::Highlighted { .. } => "highlighted",
        AnnotateOutcome::AlreadyRan => "alreadyRan",
    }
    .to_string())
}
