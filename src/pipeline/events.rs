//! Host events and their outcomes.

use crate::dom::NodeId;
use crate::types::{HeaderFrame, NavState};

use super::bootstrap::BootReport;

/// Browser events the page chrome consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// Window scrolled; `offset` is the raw vertical scroll position.
    Scroll { offset: i64 },
    /// Page finished loading; `offset` is the scroll position at that time.
    Load { offset: i64 },
    /// Document-level click on `target`.
    Click { target: NodeId },
    /// Route change / navigation away.
    Navigate,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickOutcome {
    /// The host must suppress the click's default action.
    pub prevent_default: bool,
    /// New overlay state when the click caused a transition.
    pub nav: Option<NavState>,
}

/// Result of dispatching one [`PageEvent`].
#[derive(Debug)]
pub enum Handled {
    Scroll(HeaderFrame),
    /// `None` when the page was already bootstrapped.
    Load(Option<BootReport>),
    Click(ClickOutcome),
    /// Whether the overlay was closed by the navigation.
    Navigate(bool),
}
