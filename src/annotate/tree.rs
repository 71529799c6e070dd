// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text-node trees: the abstraction the annotator scans and mutates.
//!
//! The browser DOM implements these traits in `runtime::wasm`. [`PageTree`]
//! is an in-memory implementation that tests drive directly.
//!
//! Nodes are handles. A handle may go stale when the page replaces part of
//! itself; every mutating operation checks that its target is still attached
//! and becomes a no-op if not.

use crate::config::AnnotatorConfig;
use crate::util::fold::FoldedText;
use std::ops::Range;

/// Read access to a tree of elements and text nodes.
pub trait TextTree {
    type Node: Clone;

    /// Children in document order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Lowercase tag name; `None` for text nodes.
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Text of a text node; `None` for elements.
    fn text(&self, node: &Self::Node) -> Option<String>;

    /// First element matching a simple `tag` or `.class` selector.
    fn select(&self, selector: &str) -> Option<Self::Node>;
}

/// Mutations needed to show, fade, and remove one highlight.
pub trait HighlightSurface: TextTree {
    /// The wrapper element inserted in place of the matched text node.
    type Handle: Clone;

    /// Replace the hit's text node with a wrapper holding the text before the
    /// match, the match in its own marked span, and the text after it.
    fn wrap_match(
        &mut self,
        hit: &TextHit<Self::Node>,
        wrapper_class: &str,
        mark_class: &str,
    ) -> Option<Self::Handle>;

    /// Smoothly scroll the wrapper to the center of the viewport.
    fn scroll_into_view(&mut self, handle: &Self::Handle) -> bool;

    fn begin_fade(&mut self, handle: &Self::Handle, fade_class: &str) -> bool;

    /// Put the wrapper's plain text back in its place.
    fn unwrap(&mut self, handle: &Self::Handle) -> bool;
}

/// A text node containing the query, with the match's byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHit<N> {
    pub node: N,
    pub text: String,
    pub range: Range<usize>,
}

/// What the scan refuses to look inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    pub skip_tags: Vec<String>,
    /// Existing highlight wrappers.
    pub skip_class: String,
}

impl ScanRules {
    pub fn from_config(config: &AnnotatorConfig) -> Self {
        Self {
            skip_tags: config.skip_tags.iter().map(|t| t.to_lowercase()).collect(),
            skip_class: config.wrapper_class.clone(),
        }
    }

    fn skips<T: TextTree>(&self, tree: &T, node: &T::Node, tag: &str) -> bool {
        self.skip_tags.iter().any(|t| t == tag)
            || (!self.skip_class.is_empty() && tree.has_class(node, &self.skip_class))
    }
}

/// Depth-first search under `root` for the first text node containing
/// `folded_query`.
pub fn find_first_match<T: TextTree>(
    tree: &T,
    root: &T::Node,
    folded_query: &str,
    rules: &ScanRules,
) -> Option<TextHit<T::Node>> {
    if folded_query.is_empty() {
        return None;
    }
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        match tree.tag_name(&node) {
            Some(tag) => {
                if rules.skips(tree, &node, &tag) {
                    continue;
                }
                let mut children = tree.children(&node);
                children.reverse();
                stack.extend(children);
            }
            None => {
                let Some(text) = tree.text(&node) else {
                    continue;
                };
                if let Some(range) = FoldedText::new(&text).find(folded_query) {
                    return Some(TextHit { node, text, range });
                }
            }
        }
    }
    None
}

/// Try each container selector in order; the first one with a match wins.
///
/// Returns the winning selector with the hit.
pub fn find_in_containers<'s, T: TextTree>(
    tree: &T,
    containers: &'s [String],
    folded_query: &str,
    rules: &ScanRules,
) -> Option<(&'s str, TextHit<T::Node>)> {
    containers
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .find_map(|selector| {
            let root = tree.select(selector)?;
            find_first_match(tree, &root, folded_query, rules).map(|hit| (selector, hit))
        })
}

// =============================================================================
// IN-MEMORY TREE
// =============================================================================

/// Index of a node in a [`PageTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Element { tag: String, classes: Vec<String> },
    Text(String),
}

#[derive(Debug, Clone)]
struct PageNode {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Builder for one element of a [`PageTree`].
#[derive(Debug, Clone, Default)]
pub struct PageElement {
    tag: String,
    classes: Vec<String>,
    children: Vec<PageChild>,
}

#[derive(Debug, Clone)]
enum PageChild {
    Element(PageElement),
    Text(String),
}

impl PageElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn child(mut self, element: PageElement) -> Self {
        self.children.push(PageChild::Element(element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(PageChild::Text(text.into()));
        self
    }
}

/// An arena-backed element tree.
///
/// Detached nodes stay in the arena, so stale handles remain valid indices
/// and are recognized as detached.
#[derive(Debug, Clone)]
pub struct PageTree {
    nodes: Vec<PageNode>,
    root: NodeId,
    scrolled: Vec<NodeId>,
}

impl PageTree {
    pub fn new(root: PageElement) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            scrolled: Vec::new(),
        };
        tree.root = tree.insert_element(root, None);
        tree
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(PageNode {
            kind,
            parent,
            children: Vec::new(),
        });
        id
    }

    fn insert_element(&mut self, element: PageElement, parent: Option<NodeId>) -> NodeId {
        let id = self.push(
            NodeKind::Element {
                tag: element.tag,
                classes: element.classes,
            },
            parent,
        );
        for child in element.children {
            let child_id = match child {
                PageChild::Element(e) => self.insert_element(e, Some(id)),
                PageChild::Text(t) => self.push(NodeKind::Text(t), Some(id)),
            };
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> Option<&PageNode> {
        self.nodes.get(id.0)
    }

    /// Whether `id` is still reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.node(current).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Remove a node from its parent, as a page script replacing content would.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        self.nodes[parent.0].children.retain(|&c| c != id);
        self.nodes[id.0].parent = None;
    }

    /// Swap `old` for `new` in `old`'s parent.
    fn replace(&mut self, old: NodeId, new: NodeId) -> bool {
        let Some(parent) = self.node(old).and_then(|n| n.parent) else {
            return false;
        };
        let siblings = &mut self.nodes[parent.0].children;
        let Some(pos) = siblings.iter().position(|&c| c == old) else {
            return false;
        };
        siblings[pos] = new;
        self.nodes[new.0].parent = Some(parent);
        self.nodes[old.0].parent = None;
        true
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.push(kind, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Concatenated text under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Element { .. } => {
                for &child in &node.children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Attached elements carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(self.root, &mut |tree, id| {
            if tree.has_class(&id, class) {
                found.push(id);
            }
        });
        found
    }

    fn walk(&self, id: NodeId, visit: &mut impl FnMut(&Self, NodeId)) {
        visit(self, id);
        if let Some(node) = self.node(id) {
            for &child in &node.children {
                self.walk(child, visit);
            }
        }
    }

    /// Nodes that were scrolled into view, oldest first.
    pub fn scrolled(&self) -> &[NodeId] {
        &self.scrolled
    }

    /// Serialize the attached tree. Text is emitted verbatim.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(self.root, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Element { tag, classes } => {
                out.push('<');
                out.push_str(tag);
                if !classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&classes.join(" "));
                    out.push('"');
                }
                out.push('>');
                for &child in &node.children {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    fn matches_selector(&self, id: NodeId, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self.has_class(&id, class),
            None => self
                .tag_name(&id)
                .is_some_and(|tag| tag.eq_ignore_ascii_case(selector)),
        }
    }
}

impl TextTree for PageTree {
    type Node = NodeId;

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.node(*node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn tag_name(&self, node: &NodeId) -> Option<String> {
        match &self.node(*node)?.kind {
            NodeKind::Element { tag, .. } => Some(tag.clone()),
            NodeKind::Text(_) => None,
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        matches!(
            self.node(*node).map(|n| &n.kind),
            Some(NodeKind::Element { classes, .. }) if classes.iter().any(|c| c == class)
        )
    }

    fn text(&self, node: &NodeId) -> Option<String> {
        match &self.node(*node)?.kind {
            NodeKind::Text(t) => Some(t.clone()),
            NodeKind::Element { .. } => None,
        }
    }

    fn select(&self, selector: &str) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if self.matches_selector(id, selector) {
                return Some(id);
            }
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        None
    }
}

impl HighlightSurface for PageTree {
    type Handle = NodeId;

    fn wrap_match(
        &mut self,
        hit: &TextHit<NodeId>,
        wrapper_class: &str,
        mark_class: &str,
    ) -> Option<NodeId> {
        if !self.is_attached(hit.node) {
            return None;
        }
        let before = hit.text.get(..hit.range.start)?.to_string();
        let matched = hit.text.get(hit.range.clone())?.to_string();
        let after = hit.text.get(hit.range.end..)?.to_string();

        let wrapper = self.push(
            NodeKind::Element {
                tag: "span".to_string(),
                classes: vec![wrapper_class.to_string()],
            },
            None,
        );
        if !before.is_empty() {
            self.append(wrapper, NodeKind::Text(before));
        }
        let mark = self.append(
            wrapper,
            NodeKind::Element {
                tag: "span".to_string(),
                classes: vec![mark_class.to_string()],
            },
        );
        self.append(mark, NodeKind::Text(matched));
        if !after.is_empty() {
            self.append(wrapper, NodeKind::Text(after));
        }

        self.replace(hit.node, wrapper).then_some(wrapper)
    }

    fn scroll_into_view(&mut self, handle: &NodeId) -> bool {
        if !self.is_attached(*handle) {
            return false;
        }
        self.scrolled.push(*handle);
        true
    }

    fn begin_fade(&mut self, handle: &NodeId, fade_class: &str) -> bool {
        if !self.is_attached(*handle) {
            return false;
        }
        // The fade goes on the mark, the wrapper's only element child.
        let Some(mark) = self
            .children(handle)
            .into_iter()
            .find(|c| self.tag_name(c).is_some())
        else {
            return false;
        };
        match &mut self.nodes[mark.0].kind {
            NodeKind::Element { classes, .. } => {
                if !classes.iter().any(|c| c == fade_class) {
                    classes.push(fade_class.to_string());
                }
                true
            }
            NodeKind::Text(_) => false,
        }
    }

    fn unwrap(&mut self, handle: &NodeId) -> bool {
        if !self.is_attached(*handle) {
            return false;
        }
        let text = self.text_content(*handle);
        let restored = self.push(NodeKind::Text(text), None);
        self.replace(*handle, restored)
    }
}
