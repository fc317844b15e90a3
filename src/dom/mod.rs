//! DOM Module - The host document as a capability
//!
//! Controllers never reach for ambient globals. They receive the document
//! as a [`Dom`] implementation, cache the [`NodeId`] handles they need at
//! construction, and express every mutation as a [`Directive`].
//!
//! - [`Dom`] - query/mutate capability implemented by the host
//! - [`Directive`] - declarative class/style change applied to one node
//! - [`ElementSpec`] - description of an element to create
//! - [`MemoryDocument`] - in-memory host (headless rendering, tests)

mod memory;
mod selector;

pub use memory::MemoryDocument;
pub use selector::Selector;

// =============================================================================
// TYPES
// =============================================================================

/// Opaque handle to an element owned by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Priority of an inline style declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePriority {
    #[default]
    Normal,
    Important,
}

/// How the window should travel when asked to scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Element to be created by [`Dom::append_element`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: String,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

// =============================================================================
// CAPABILITY
// =============================================================================

/// Everything the page chrome needs from the host document.
///
/// Selectors are simple compound selectors (`tag`, `#id`, `.class`, and
/// combinations like `div.carousel`); see [`Selector`]. Operations on a
/// node that no longer exists are no-ops.
pub trait Dom {
    /// First match in document order.
    fn query(&self, selector: &str) -> Option<NodeId>;

    /// All matches in document order.
    fn query_all(&self, selector: &str) -> Vec<NodeId>;

    /// All matching descendants of `root` in document order.
    fn query_within(&self, root: NodeId, selector: &str) -> Vec<NodeId>;

    /// Nearest inclusive ancestor of `node` matching `selector`.
    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// The `<body>` element, if any.
    fn body(&self) -> Option<NodeId>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);

    fn set_style(&mut self, node: NodeId, property: &str, value: &str, priority: StylePriority);
    fn remove_style(&mut self, node: NodeId, property: &str);

    /// Rendered height in pixels (0 when unknown).
    fn offset_height(&self, node: NodeId) -> u32;

    /// The element's `id` attribute.
    fn element_id(&self, node: NodeId) -> Option<String>;

    fn text_content(&self, node: NodeId) -> String;

    /// Create an element as the last child of `parent`.
    fn append_element(&mut self, parent: NodeId, element: ElementSpec) -> NodeId;

    /// Detach `node` and its subtree from the document.
    fn remove_node(&mut self, node: NodeId);

    /// Scroll the window back to offset 0.
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
}

// =============================================================================
// DIRECTIVES
// =============================================================================

/// A single declarative change to one element.
///
/// State machines map their state to a list of directives; applying the
/// whole list is the only way they touch the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    AddClass(&'static str),
    RemoveClass(&'static str),
    SetStyle {
        property: &'static str,
        value: String,
        priority: StylePriority,
    },
    RemoveStyle(&'static str),
}

impl Directive {
    pub fn apply<D: Dom + ?Sized>(&self, dom: &mut D, node: NodeId) {
        match self {
            Self::AddClass(class) => dom.add_class(node, class),
            Self::RemoveClass(class) => dom.remove_class(node, class),
            Self::SetStyle {
                property,
                value,
                priority,
            } => dom.set_style(node, property, value, *priority),
            Self::RemoveStyle(property) => dom.remove_style(node, property),
        }
    }
}

/// Apply `directives` to `node` in order.
pub fn apply_all<D: Dom + ?Sized>(dom: &mut D, node: NodeId, directives: &[Directive]) {
    for directive in directives {
        directive.apply(dom, node);
    }
}

/// Set or clear `class` on `node`.
pub fn set_class<D: Dom + ?Sized>(dom: &mut D, node: NodeId, class: &'static str, on: bool) {
    let directive = if on {
        Directive::AddClass(class)
    } else {
        Directive::RemoveClass(class)
    };
    directive.apply(dom, node);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_apply_in_order() {
        let mut doc = MemoryDocument::new();
        let body = doc.body_node();
        let header = doc.create(body, ElementSpec::new("header").id("header"));

        apply_all(
            &mut doc,
            header,
            &[
                Directive::SetStyle {
                    property: "position",
                    value: "sticky".to_string(),
                    priority: StylePriority::Important,
                },
                Directive::AddClass("sticky"),
                Directive::RemoveStyle("position"),
            ],
        );

        assert!(doc.has_class(header, "sticky"));
        assert_eq!(doc.style(header, "position"), None);
    }

    #[test]
    fn test_set_class_toggles() {
        let mut doc = MemoryDocument::new();
        let body = doc.body_node();

        set_class(&mut doc, body, "scrolled", true);
        assert!(doc.has_class(body, "scrolled"));

        set_class(&mut doc, body, "scrolled", false);
        assert!(!doc.has_class(body, "scrolled"));
    }

    #[test]
    fn test_element_spec_builder() {
        let spec = ElementSpec::new("li")
            .class("active")
            .attr("data-bs-slide-to", "0");

        assert_eq!(spec.tag, "li");
        assert_eq!(spec.classes, vec!["active".to_string()]);
        assert_eq!(spec.attributes, vec![("data-bs-slide-to".to_string(), "0".to_string())]);
        assert!(spec.id.is_none());
    }
}
