//! In-memory document.
//!
//! A minimal element tree that implements [`Dom`]. Nodes live in a flat
//! `Vec` indexed by [`NodeId`]; removed nodes leave a `None` slot behind so
//! handles are never reused.

use std::collections::BTreeMap;

use super::{Dom, ElementSpec, NodeId, ScrollBehavior, Selector, StylePriority};

/// One element in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, (String, StylePriority)>,
    text: String,
    height: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn from_spec(spec: ElementSpec, parent: Option<NodeId>) -> Self {
        let mut classes = Vec::with_capacity(spec.classes.len());
        for class in spec.classes {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }

        Self {
            tag: spec.tag.to_ascii_lowercase(),
            id: spec.id,
            classes,
            attributes: spec.attributes.into_iter().collect(),
            styles: BTreeMap::new(),
            text: spec.text,
            height: 0,
            parent,
            children: Vec::new(),
        }
    }
}

/// Flat element tree rooted at `<html>` with a `<body>` child.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Option<Element>>,
    root: NodeId,
    body: NodeId,
    scroll_requests: Vec<ScrollBehavior>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        let root = NodeId(0);
        let body = NodeId(1);
        let mut html = Element::from_spec(ElementSpec::new("html"), None);
        html.children.push(body);

        Self {
            nodes: vec![
                Some(html),
                Some(Element::from_spec(ElementSpec::new("body"), Some(root))),
            ],
            root,
            body,
            scroll_requests: Vec::new(),
        }
    }

    /// The `<body>` handle (always present in a memory document).
    pub fn body_node(&self) -> NodeId {
        self.body
    }

    /// Build helper: append `spec` under `parent` and return its handle.
    pub fn create(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        self.append_element(parent, spec)
    }

    /// Set the height reported by [`Dom::offset_height`].
    pub fn set_offset_height(&mut self, node: NodeId, height: u32) {
        if let Some(el) = self.element_mut(node) {
            el.height = height;
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(el) = self.element_mut(node) {
            el.text = text.into();
        }
    }

    /// Inline style value, if set.
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.styles.get(property))
            .map(|(value, _)| value.as_str())
    }

    pub fn style_priority(&self, node: NodeId, property: &str) -> Option<StylePriority> {
        self.element(node)
            .and_then(|el| el.styles.get(property))
            .map(|(_, priority)| *priority)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.element(node).map(|el| el.classes.clone()).unwrap_or_default()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.element(node).map(|el| el.children.clone()).unwrap_or_default()
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    /// Whether the node is still part of the document.
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.element(node).is_some()
    }

    /// Scroll requests issued through [`Dom::scroll_to_top`], oldest first.
    pub fn scroll_requests(&self) -> &[ScrollBehavior] {
        &self.scroll_requests
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0).and_then(Option::as_ref)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0).and_then(Option::as_mut)
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        self.element(node)
            .is_some_and(|el| selector.matches(&el.tag, el.id.as_deref(), &el.classes))
    }

    /// Descendants of `root` (excluding `root`) in document order.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .element(root)
            .map(|el| el.children.iter().rev().copied().collect())
            .unwrap_or_default();

        while let Some(node) = stack.pop() {
            if let Some(el) = self.element(node) {
                out.push(node);
                stack.extend(el.children.iter().rev().copied());
            }
        }

        out
    }
}

impl Dom for MemoryDocument {
    fn query(&self, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector);
        self.descendants(self.root)
            .into_iter()
            .find(|&node| self.matches(node, &selector))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.query_within(self.root, selector)
    }

    fn query_within(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let selector = Selector::parse(selector);
        self.descendants(root)
            .into_iter()
            .filter(|&node| self.matches(node, &selector))
            .collect()
    }

    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector);
        let mut current = Some(node);
        while let Some(id) = current {
            let el = self.element(id)?;
            if selector.matches(&el.tag, el.id.as_deref(), &el.classes) {
                return Some(id);
            }
            current = el.parent;
        }
        None
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if self.element(ancestor).is_none() {
            return false;
        }
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.element(id).and_then(|el| el.parent);
        }
        false
    }

    fn body(&self) -> Option<NodeId> {
        self.element(self.body).map(|_| self.body)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str, priority: StylePriority) {
        if let Some(el) = self.element_mut(node) {
            el.styles
                .insert(property.to_string(), (value.to_string(), priority));
        }
    }

    fn remove_style(&mut self, node: NodeId, property: &str) {
        if let Some(el) = self.element_mut(node) {
            el.styles.remove(property);
        }
    }

    fn offset_height(&self, node: NodeId) -> u32 {
        self.element(node).map(|el| el.height).unwrap_or(0)
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.element(node).and_then(|el| el.id.clone())
    }

    fn text_content(&self, node: NodeId) -> String {
        let Some(el) = self.element(node) else {
            return String::new();
        };
        let mut text = el.text.clone();
        for child in self.descendants(node) {
            if let Some(child_el) = self.element(child) {
                text.push_str(&child_el.text);
            }
        }
        text
    }

    fn append_element(&mut self, parent: NodeId, element: ElementSpec) -> NodeId {
        let id = NodeId(self.nodes.len());
        let attached = self.element(parent).is_some();
        self.nodes
            .push(Some(Element::from_spec(element, attached.then_some(parent))));
        if let Some(parent_el) = self.element_mut(parent) {
            parent_el.children.push(id);
        }
        id
    }

    fn remove_node(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        let Some(parent) = self.element(node).map(|el| el.parent) else {
            return;
        };

        let subtree = self.descendants(node);
        if let Some(parent_el) = parent.and_then(|p| self.element_mut(p)) {
            parent_el.children.retain(|&c| c != node);
        }
        for id in subtree.into_iter().chain(std::iter::once(node)) {
            if let Some(slot) = self.nodes.get_mut(id.0) {
                *slot = None;
            }
        }
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.scroll_requests.push(behavior);
    }
}
