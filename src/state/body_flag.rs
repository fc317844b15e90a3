//! Body-level "page has scrolled" marker.

use crate::dom::{set_class, Dom, NodeId};
use crate::types::SCROLLED_CLASS;

/// Sets or clears the `scrolled` class on `<body>`.
#[derive(Debug, Clone, Default)]
pub struct BodyScrollFlag {
    body: Option<NodeId>,
    applied: Option<bool>,
}

impl BodyScrollFlag {
    pub fn new<D: Dom + ?Sized>(dom: &D) -> Self {
        Self {
            body: dom.body(),
            applied: None,
        }
    }

    /// Apply the flag. Returns `true` when the document was touched.
    pub fn apply<D: Dom + ?Sized>(&mut self, dom: &mut D, scrolled: bool) -> bool {
        let Some(body) = self.body else {
            return false;
        };
        if self.applied == Some(scrolled) {
            return false;
        }

        set_class(dom, body, SCROLLED_CLASS, scrolled);
        self.applied = Some(scrolled);
        true
    }

    /// Last value pushed to the document.
    pub fn current(&self) -> Option<bool> {
        self.applied
    }
}
