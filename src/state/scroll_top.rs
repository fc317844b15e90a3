//! Scroll-to-top affordance.
//!
//! `.scroll-top` is shown (class `active`) once the page is past the
//! threshold; clicking it smooth-scrolls the window back to the top.

use crate::dom::{set_class, Dom, NodeId, ScrollBehavior};
use crate::types::{ACTIVE_CLASS, DEFAULT_SCROLL_TOP_THRESHOLD_PX, SCROLL_TOP_SELECTOR};

#[derive(Debug, Clone)]
pub struct ScrollTopButton {
    button: Option<NodeId>,
    threshold_px: u32,
    visible: Option<bool>,
}

impl ScrollTopButton {
    pub fn new<D: Dom + ?Sized>(dom: &D) -> Self {
        Self::with_threshold(dom, DEFAULT_SCROLL_TOP_THRESHOLD_PX)
    }

    pub fn with_threshold<D: Dom + ?Sized>(dom: &D, threshold_px: u32) -> Self {
        Self {
            button: dom.query(SCROLL_TOP_SELECTOR),
            threshold_px,
            visible: None,
        }
    }

    /// Show or hide the button for `offset`. Returns the visibility, or
    /// `None` when the page has no button.
    pub fn update<D: Dom + ?Sized>(&mut self, dom: &mut D, offset: u32) -> Option<bool> {
        let button = self.button?;
        let visible = offset > self.threshold_px;
        if self.visible != Some(visible) {
            set_class(dom, button, ACTIVE_CLASS, visible);
            self.visible = Some(visible);
        }
        Some(visible)
    }

    /// Handle a document click. Returns `true` when the click hit the
    /// button; the host must then suppress the default link navigation.
    pub fn handle_click<D: Dom + ?Sized>(&self, dom: &mut D, target: NodeId) -> bool {
        let Some(button) = self.button else {
            return false;
        };
        if !dom.contains(button, target) {
            return false;
        }
        dom.scroll_to_top(ScrollBehavior::Smooth);
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementSpec, MemoryDocument};

    fn setup() -> (MemoryDocument, NodeId, NodeId) {
        let mut doc = MemoryDocument::new();
        let body = doc.body_node();
        let button = doc.create(body, ElementSpec::new("a").class("scroll-top"));
        let icon = doc.create(button, ElementSpec::new("i").class("bi-arrow-up-short"));
        (doc, button, icon)
    }

    #[test]
    fn test_visibility_threshold() {
        let (mut doc, button, _icon) = setup();
        let mut top = ScrollTopButton::new(&doc);

        assert_eq!(top.update(&mut doc, 100), Some(false));
        assert!(!doc.has_class(button, "active"));

        assert_eq!(top.update(&mut doc, 101), Some(true));
        assert!(doc.has_class(button, "active"));
        assert!(top.is_visible());

        assert_eq!(top.update(&mut doc, 0), Some(false));
        assert!(!doc.has_class(button, "active"));
    }

    #[test]
    fn test_click_scrolls_smoothly() {
        let (mut doc, _button, icon) = setup();
        let top = ScrollTopButton::new(&doc);
        let body = doc.body_node();

        assert!(top.handle_click(&mut doc, icon));
        assert!(!top.handle_click(&mut doc, body));
        assert_eq!(doc.scroll_requests(), &[ScrollBehavior::Smooth]);
    }

    #[test]
    fn test_missing_button() {
        let mut doc = MemoryDocument::new();
        let mut top = ScrollTopButton::new(&doc);
        let body = doc.body_node();

        assert_eq!(top.update(&mut doc, 500), None);
        assert!(!top.handle_click(&mut doc, body));
        assert!(doc.scroll_requests().is_empty());
    }
}
