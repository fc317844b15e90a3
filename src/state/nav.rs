//! Navigation Overlay Module - Mobile menu open/closed state
//!
//! Owns the overlay state and everything that follows from it:
//! - `active` class on the overlay
//! - menu/close glyph on the toggle control (derived, never stored)
//! - `no-scroll` lock on the body while open
//!
//! # Clicks
//!
//! Every document click goes through [`NavOverlayController::handle_click`]:
//!
//! ```text
//! target inside toggle         → toggle()
//! target inside close control  → close()
//! target outside overlay       → close()   (observable only while open)
//! target inside overlay        → nothing
//! ```
//!
//! A controller built against a document without the overlay or the toggle
//! control is inert: every call is a no-op.

use spark_signals::{derived, signal, Derived, Signal};
use tracing::{debug, trace};

use crate::dom::{set_class, Dom, NodeId};
use crate::types::{
    NavState, ToggleIcon, ACTIVE_CLASS, NAV_CLOSE_SELECTOR, NAV_OVERLAY_SELECTOR,
    NAV_TOGGLE_SELECTOR, NO_SCROLL_CLASS,
};

// =============================================================================
// TYPES
// =============================================================================

/// Where a document click landed relative to the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick {
    Toggle,
    CloseControl,
    InsideOverlay,
    Outside,
}

/// Element handles the controller needs, resolved once.
#[derive(Debug, Clone, Copy)]
struct NavParts {
    overlay: NodeId,
    toggle: NodeId,
    close: Option<NodeId>,
    body: Option<NodeId>,
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct NavOverlayController {
    parts: Option<NavParts>,
    state: Signal<NavState>,
}

impl NavOverlayController {
    pub fn new<D: Dom + ?Sized>(dom: &D) -> Self {
        let overlay = dom.query(NAV_OVERLAY_SELECTOR);
        let toggle = dom.query(NAV_TOGGLE_SELECTOR);

        let parts = match (overlay, toggle) {
            (Some(overlay), Some(toggle)) => Some(NavParts {
                overlay,
                toggle,
                close: dom.query(NAV_CLOSE_SELECTOR),
                body: dom.body(),
            }),
            _ => {
                debug!(
                    overlay = overlay.is_some(),
                    toggle = toggle.is_some(),
                    "mobile nav elements missing, overlay disabled"
                );
                None
            }
        };

        Self {
            parts,
            state: signal(NavState::Closed),
        }
    }

    /// Whether the controller has the elements it needs.
    pub fn is_active(&self) -> bool {
        self.parts.is_some()
    }

    pub fn state(&self) -> NavState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Glyph currently shown on the toggle control.
    pub fn icon(&self) -> ToggleIcon {
        ToggleIcon::from(self.state())
    }

    /// Reactive glyph, recomputed from the overlay state on every read.
    pub fn icon_derived(&self) -> Derived<ToggleIcon> {
        let state = self.state.clone();
        derived(move || ToggleIcon::from(state.get()))
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Flip between open and closed. Returns the new state, or `None` when
    /// the controller is inert.
    pub fn toggle<D: Dom + ?Sized>(&mut self, dom: &mut D) -> Option<NavState> {
        let next = self.state().toggled();
        self.transition(dom, next).then_some(next)
    }

    /// Open if closed. Returns `true` on a transition.
    pub fn open<D: Dom + ?Sized>(&mut self, dom: &mut D) -> bool {
        if self.is_open() {
            return false;
        }
        self.transition(dom, NavState::Open)
    }

    /// Close if open. Returns `true` on a transition; a second call is a
    /// no-op.
    pub fn close<D: Dom + ?Sized>(&mut self, dom: &mut D) -> bool {
        if !self.is_open() {
            return false;
        }
        self.transition(dom, NavState::Closed)
    }

    /// Navigation away from the page always leaves the overlay closed.
    pub fn on_navigate<D: Dom + ?Sized>(&mut self, dom: &mut D) -> bool {
        self.close(dom)
    }

    // -------------------------------------------------------------------------
    // Click dispatch
    // -------------------------------------------------------------------------

    /// Classify a click target. `None` when the controller is inert.
    pub fn classify<D: Dom + ?Sized>(&self, dom: &D, target: NodeId) -> Option<NavClick> {
        let parts = self.parts?;

        let click = if dom.contains(parts.toggle, target) {
            NavClick::Toggle
        } else if parts.close.is_some_and(|close| dom.contains(close, target)) {
            NavClick::CloseControl
        } else if dom.contains(parts.overlay, target) {
            NavClick::InsideOverlay
        } else {
            NavClick::Outside
        };
        Some(click)
    }

    /// Handle a document-level click. Returns the new state when the click
    /// caused a transition.
    pub fn handle_click<D: Dom + ?Sized>(&mut self, dom: &mut D, target: NodeId) -> Option<NavState> {
        match self.classify(dom, target)? {
            NavClick::Toggle => self.toggle(dom),
            NavClick::CloseControl | NavClick::Outside => {
                self.close(dom).then_some(NavState::Closed)
            }
            NavClick::InsideOverlay => None,
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Move to `next` and render it. Overlay, glyph and scroll lock are
    /// updated together.
    fn transition<D: Dom + ?Sized>(&mut self, dom: &mut D, next: NavState) -> bool {
        let Some(parts) = self.parts else {
            return false;
        };

        let open = next.is_open();
        let icon = ToggleIcon::from(next);

        set_class(dom, parts.overlay, ACTIVE_CLASS, open);
        dom.remove_class(parts.toggle, icon.opposite_class_name());
        dom.add_class(parts.toggle, icon.class_name());
        if let Some(body) = parts.body {
            set_class(dom, body, NO_SCROLL_CLASS, open);
        }

        self.state.set(next);
        trace!(state = ?next, "mobile nav transition");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementSpec, MemoryDocument};

    struct Page {
        doc: MemoryDocument,
        toggle: NodeId,
        overlay: NodeId,
        close: NodeId,
        link: NodeId,
        content: NodeId,
    }

    fn setup() -> Page {
        let mut doc = MemoryDocument::new();
        let body = doc.body_node();
        let header = doc.create(body, ElementSpec::new("header").id("header"));
        let toggle = doc.create(
            header,
            ElementSpec::new("i").class("mobile-nav-toggle").class("bi-list"),
        );
        let overlay = doc.create(body, ElementSpec::new("div").class("mobile-nav-overlay"));
        let close = doc.create(overlay, ElementSpec::new("i").class("mobile-nav-close"));
        let link = doc.create(overlay, ElementSpec::new("a").text("About"));
        let content = doc.create(body, ElementSpec::new("main"));

        Page {
            doc,
            toggle,
            overlay,
            close,
            link,
            content,
        }
    }

    #[test]
    fn test_initial_state_closed() {
        let page = setup();
        let nav = NavOverlayController::new(&page.doc);

        assert!(nav.is_active());
        assert_eq!(nav.state(), NavState::Closed);
        assert_eq!(nav.icon(), ToggleIcon::Menu);
    }

    #[test]
    fn test_toggle_renders_all_markers() {
        let mut page = setup();
        let mut nav = NavOverlayController::new(&page.doc);
        let body = page.doc.body_node();

        assert_eq!(nav.toggle(&mut page.doc), Some(NavState::Open));
        assert!(page.doc.has_class(page.overlay, "active"));
        assert!(page.doc.has_class(page.toggle, "bi-x"));
        assert!(!page.doc.has_class(page.toggle, "bi-list"));
        assert!(page.doc.has_class(body, "no-scroll"));

        assert_eq!(nav.toggle(&mut page.doc), Some(NavState::Closed));
        assert!(!page.doc.has_class(page.overlay, "active"));
        assert!(page.doc.has_class(page.toggle, "bi-list"));
        assert!(!page.doc.has_class(page.toggle, "bi-x"));
        assert!(!page.doc.has_class(body, "no-scroll"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut page = setup();
        let mut nav = NavOverlayController::new(&page.doc);

        assert!(!nav.close(&mut page.doc));
        assert!(nav.open(&mut page.doc));
        assert!(!nav.open(&mut page.doc));
        assert!(nav.close(&mut page.doc));
        assert!(!nav.close(&mut page.doc));
        assert_eq!(nav.state(), NavState::Closed);
    }

    #[test]
    fn test_click_sequence() {
        let mut page = setup();
        let mut nav = NavOverlayController::new(&page.doc);
        let mut states = Vec::new();

        nav.handle_click(&mut page.doc, page.toggle);
        states.push(nav.state());
        nav.handle_click(&mut page.doc, page.content);
        states.push(nav.state());
        nav.handle_click(&mut page.doc, page.toggle);
        states.push(nav.state());
        nav.handle_click(&mut page.doc, page.close);
        states.push(nav.state());

        assert_eq!(
            states,
            vec![NavState::Open, NavState::Closed, NavState::Open, NavState::Closed]
        );
    }

    #[test]
    fn test_outside_click_while_closed_is_ignored() {
        let mut page = setup();
        let mut nav = NavOverlayController::new(&page.doc);

        assert_eq!(nav.classify(&page.doc, page.content), Some(NavClick::Outside));
        assert_eq!(nav.handle_click(&mut page.doc, page.content), None);
        assert_eq!(nav.state(), NavState::Closed);
        assert!(!page.doc.has_class(page.overlay, "active"));
    }

    #[test]
    fn test_click_inside_overlay_keeps_open() {
        let mut page = setup();
        let mut nav = NavOverlayController::new(&page.doc);
        nav.open(&mut page.doc);

        assert_eq!(nav.classify(&page.doc, page.link), Some(NavClick::InsideOverlay));
        assert_eq!(nav.handle_click(&mut page.doc, page.link), None);
        assert!(nav.is_open());
    }

    #[test]
    fn test_navigate_closes() {
        let mut page = setup();
        let mut nav = NavOverlayController::new(&page.doc);
        nav.open(&mut page.doc);

        assert!(nav.on_navigate(&mut page.doc));
        assert_eq!(nav.state(), NavState::Closed);
        assert!(!nav.on_navigate(&mut page.doc));
    }

    #[test]
    fn test_missing_toggle_is_inert() {
        let mut doc = MemoryDocument::new();
        let body = doc.body_node();
        let overlay = doc.create(body, ElementSpec::new("div").class("mobile-nav-overlay"));
        let mut nav = NavOverlayController::new(&doc);

        assert!(!nav.is_active());
        assert_eq!(nav.toggle(&mut doc), None);
        assert!(!nav.open(&mut doc));
        assert_eq!(nav.handle_click(&mut doc, body), None);
        assert_eq!(nav.state(), NavState::Closed);
        assert!(!doc.has_class(overlay, "active"));
    }

    #[test]
    fn test_missing_close_control_still_works() {
        let mut doc = MemoryDocument::new();
        let body = doc.body_node();
        let toggle = doc.create(body, ElementSpec::new("i").class("mobile-nav-toggle"));
        doc.create(body, ElementSpec::new("div").class("mobile-nav-overlay"));
        let mut nav = NavOverlayController::new(&doc);

        assert_eq!(nav.handle_click(&mut doc, toggle), Some(NavState::Open));
        assert_eq!(nav.handle_click(&mut doc, body), Some(NavState::Closed));
    }

    #[test]
    fn test_icon_derived_follows_state() {
        let mut page = setup();
        let mut nav = NavOverlayController::new(&page.doc);
        let icon = nav.icon_derived();

        assert_eq!(icon.get(), ToggleIcon::Menu);
        nav.toggle(&mut page.doc);
        assert_eq!(icon.get(), ToggleIcon::Close);
        nav.close(&mut page.doc);
        assert_eq!(icon.get(), ToggleIcon::Menu);
    }
}
